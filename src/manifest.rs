//! Web app manifest generation.
//!
//! Turns an [`AppConfiguration`] into a [`ManifestDocument`], the typed form
//! of `manifest.json`. Unset fields are omitted entirely, never written as
//! `null` or `""`; `icons` and `screenshots` only appear when non-empty.
//!
//! Generation is the exact inverse of [`AppConfiguration::from_manifest`]
//! for every recognized key, so parsing a manifest and generating it again
//! reproduces the recognized part of the input. The one deliberate
//! difference: a manifest that used the legacy `splash_screens` key comes
//! back with those images under `screenshots`, `density` and
//! `background_color` included.

use crate::app::AppConfiguration;
use crate::error::Result;
use crate::image::{Image, format_sizes};
use crate::types::{ImageObject, ManifestDocument};

pub struct ManifestGenerator;

impl ManifestGenerator {
    /// Build the manifest document for `config`.
    pub fn get(config: &AppConfiguration) -> ManifestDocument {
        ManifestDocument {
            lang: config.language().map(str::to_string),
            name: config.name().map(str::to_string),
            short_name: config.short_name().map(str::to_string),
            scope: config.scope().map(str::to_string),
            start_url: config.start_url().map(str::to_string),
            display: config.display().map(|d| d.as_str().to_string()),
            orientation: config.orientation().map(|o| o.as_str().to_string()),
            dir: config.direction().map(|d| d.as_str().to_string()),
            description: config.description().map(str::to_string),
            background_color: config.background_color().map(str::to_string),
            theme_color: config.theme_color().map(str::to_string),
            icons: image_list(config.icons()),
            screenshots: image_list(config.screenshots()),
            splash_screens: None,
        }
    }

    /// The manifest as a JSON value.
    pub fn to_value(config: &AppConfiguration) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(Self::get(config))?)
    }

    /// The manifest as pretty-printed JSON text, ready to write to disk.
    pub fn to_json_pretty(config: &AppConfiguration) -> Result<String> {
        Ok(serde_json::to_string_pretty(&Self::get(config))?)
    }
}

fn image_list(images: &[Image]) -> Option<Vec<ImageObject>> {
    if images.is_empty() {
        None
    } else {
        Some(images.iter().map(image_object).collect())
    }
}

fn image_object(image: &Image) -> ImageObject {
    let purpose = image
        .purpose()
        .iter()
        .map(|p| p.as_str())
        .collect::<Vec<_>>()
        .join(" ");

    ImageObject {
        src: image.src().to_string(),
        mime_type: image.mime_type().map(str::to_string),
        density: image.density().and_then(density_number),
        background_color: image.background_color().map(str::to_string),
        platform: image.platform().map(str::to_string),
        purpose: (!purpose.is_empty()).then_some(purpose),
        sizes: (!image.sizes().is_empty()).then(|| format_sizes(image.sizes())),
    }
}

/// Whole densities are written as integers (`2`, not `2.0`).
fn density_number(density: f64) -> Option<serde_json::Number> {
    if density.fract() == 0.0 && density <= u64::MAX as f64 {
        Some(serde_json::Number::from(density as u64))
    } else {
        serde_json::Number::from_f64(density)
    }
}
