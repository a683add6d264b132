//! Wire types for the web app manifest JSON document.
//!
//! These are shared by the parser ([`crate::app::AppConfiguration::from_manifest`])
//! and the generator ([`crate::manifest::ManifestGenerator`]), so the key
//! names and the "omit when unset" rule live in exactly one place.
//!
//! Values are kept as plain strings here. Enumerated fields (`dir`,
//! `display`, `orientation`, `purpose`) are validated when they are moved
//! into an `AppConfiguration`, not at deserialization time.

use serde::{Deserialize, Serialize};

/// A manifest document. Field order is the serialization order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ManifestDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orientation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icons: Option<Vec<ImageObject>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub screenshots: Option<Vec<ImageObject>>,
    /// Older manifest drafts called screenshots `splash_screens`. Read only.
    #[serde(default, skip_serializing)]
    pub splash_screens: Option<Vec<ImageObject>>,
}

/// One entry of `icons` or `screenshots`. `src` is the only required key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageObject {
    pub src: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    /// Kept as a JSON number so `2` is written back as `2`, not `2.0`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub density: Option<serde_json::Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    /// Space-separated purpose tokens.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purpose: Option<String>,
    /// Space-separated `WIDTHxHEIGHT` tokens.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sizes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_serializes_to_empty_object() {
        let json = serde_json::to_string(&ManifestDocument::default()).unwrap();
        assert_eq!(json, "{}");
    }

    #[test]
    fn image_type_uses_manifest_key() {
        let image = ImageObject {
            src: "a.png".into(),
            mime_type: Some("image/png".into()),
            ..Default::default()
        };
        let json = serde_json::to_string(&image).unwrap();
        assert_eq!(json, r#"{"src":"a.png","type":"image/png"}"#);
    }

    #[test]
    fn image_without_src_is_rejected() {
        let result: Result<ImageObject, _> = serde_json::from_str(r#"{"sizes": "64x64"}"#);
        let err = result.unwrap_err().to_string();
        assert!(err.contains("missing field `src`"), "{err}");
    }

    #[test]
    fn splash_screen_members_deserialize() {
        let image: ImageObject = serde_json::from_str(
            r##"{"src": "s.png", "density": 2, "background_color": "#000"}"##,
        )
        .unwrap();
        assert_eq!(image.density, Some(serde_json::Number::from(2u64)));
        assert_eq!(image.background_color.as_deref(), Some("#000"));
    }

    #[test]
    fn null_values_deserialize_as_absent() {
        let doc: ManifestDocument =
            serde_json::from_str(r#"{"name": null, "icons": null}"#).unwrap();
        assert_eq!(doc, ManifestDocument::default());
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let doc: ManifestDocument =
            serde_json::from_str(r#"{"name": "App", "related_applications": []}"#).unwrap();
        assert_eq!(doc.name.as_deref(), Some("App"));
    }

    #[test]
    fn splash_screens_are_never_written() {
        let doc = ManifestDocument {
            splash_screens: Some(vec![ImageObject::default()]),
            ..Default::default()
        };
        let json = serde_json::to_string(&doc).unwrap();
        assert_eq!(json, "{}");
    }

    #[test]
    fn keys_follow_field_order() {
        let doc = ManifestDocument {
            theme_color: Some("red".into()),
            lang: Some("en".into()),
            name: Some("App".into()),
            ..Default::default()
        };
        let json = serde_json::to_string(&doc).unwrap();
        assert_eq!(json, r#"{"lang":"en","name":"App","theme_color":"red"}"#);
    }
}
