//! HTML meta/link tag generation.
//!
//! Produces the `<head>` tags that complement (or stand in for) the web app
//! manifest on browsers that don't read it. Tags are grouped into four
//! families, each independently switchable through [`TagFamilies`] and always
//! emitted in this order:
//!
//! | Family | Tags |
//! |--------|------|
//! | standard | `<link rel="manifest">` |
//! | legacy | `application-name`, `theme-color`, `<link rel="icon">` for `web` icons |
//! | apple | `format-detection`, `apple-mobile-web-app-*`, `<link rel="apple-touch-icon">` for `ios` icons |
//! | microsoft | `msapplication-starturl`, `msapplication-navbutton-color` |
//!
//! Icons without a platform go to both the legacy and the Apple family. Icons
//! for any other platform (`android`, ...) produce no tags at all; they only
//! live in the manifest.
//!
//! ## Rendering
//!
//! A [`Tag`] renders as `<name attr="value">`, or `<name attr="value">text</name>`
//! when it has text content. Values and text are HTML-escaped with maud, and
//! attributes whose value is `None` are left out. `Tag` implements
//! [`maud::Render`], so generated tags can be dropped straight into a maud
//! template:
//!
//! ```rust,ignore
//! html! { head { @for tag in &tags { (tag) } } }
//! ```

use crate::app::{AppConfiguration, DisplayMode};
use crate::error::Result;
use crate::image::{PLATFORM_IOS, PLATFORM_WEB};
use maud::Render;
use serde::{Deserialize, Serialize};

/// Which tag families to generate. All enabled by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TagFamilies {
    /// Standards-compliant tags (the manifest link).
    pub standard: bool,
    /// Tags for browsers that predate the manifest.
    pub legacy: bool,
    /// Proprietary tags for iOS Safari.
    pub apple: bool,
    /// Proprietary tags for Windows.
    pub microsoft: bool,
}

impl Default for TagFamilies {
    fn default() -> Self {
        Self::all()
    }
}

impl TagFamilies {
    pub fn all() -> Self {
        Self {
            standard: true,
            legacy: true,
            apple: true,
            microsoft: true,
        }
    }

    pub fn none() -> Self {
        Self {
            standard: false,
            legacy: false,
            apple: false,
            microsoft: false,
        }
    }
}

/// One generated element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    /// Element name, `meta` or `link`.
    pub name: &'static str,
    /// Text content. `None` renders a void element.
    pub content: Option<String>,
    /// Attributes in render order. `None` values are skipped.
    pub attributes: Vec<(&'static str, Option<String>)>,
}

impl Tag {
    /// `<meta name=".." content="..">`
    pub fn meta(name: &str, content: &str) -> Self {
        Self {
            name: "meta",
            content: None,
            attributes: vec![
                ("name", Some(name.to_string())),
                ("content", Some(content.to_string())),
            ],
        }
    }

    /// `<link rel=".." href=".." sizes="..">`, `sizes` omitted when `None`.
    pub fn link(rel: &str, href: &str, sizes: Option<String>) -> Self {
        Self {
            name: "link",
            content: None,
            attributes: vec![
                ("rel", Some(rel.to_string())),
                ("href", Some(href.to_string())),
                ("sizes", sizes),
            ],
        }
    }

    /// Value of attribute `name`, if present and not `None`.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| *key == name)
            .and_then(|(_, value)| value.as_deref())
    }

    /// Render to an HTML string.
    pub fn to_html(&self) -> String {
        let mut html = String::new();
        self.render_to(&mut html);
        html
    }
}

impl Render for Tag {
    fn render_to(&self, buffer: &mut String) {
        buffer.push('<');
        buffer.push_str(self.name);
        for (key, value) in &self.attributes {
            let Some(value) = value else { continue };
            buffer.push(' ');
            buffer.push_str(key);
            buffer.push_str("=\"");
            value.render_to(buffer);
            buffer.push('"');
        }
        buffer.push('>');
        if let Some(content) = &self.content {
            content.render_to(buffer);
            buffer.push_str("</");
            buffer.push_str(self.name);
            buffer.push('>');
        }
    }
}

pub struct TagGenerator;

impl TagGenerator {
    /// All enabled tags rendered and joined with newlines.
    pub fn get_tags(config: &AppConfiguration, families: TagFamilies) -> Result<String> {
        let tags = Self::get_data(config, families)?;
        Ok(tags.iter().map(Tag::to_html).collect::<Vec<_>>().join("\n"))
    }

    /// All enabled tags, family by family.
    ///
    /// Fails with `MissingRequired` when the standard family is enabled and
    /// the configuration has no manifest URL.
    pub fn get_data(config: &AppConfiguration, families: TagFamilies) -> Result<Vec<Tag>> {
        let mut tags = Vec::new();

        if families.standard {
            tags.extend(standard_tags(config)?);
        } else {
            tracing::debug!(family = "standard", "skipping disabled tag family");
        }
        if families.legacy {
            tags.extend(legacy_tags(config));
        } else {
            tracing::debug!(family = "legacy", "skipping disabled tag family");
        }
        if families.apple {
            tags.extend(apple_tags(config));
        } else {
            tracing::debug!(family = "apple", "skipping disabled tag family");
        }
        if families.microsoft {
            tags.extend(microsoft_tags(config));
        } else {
            tracing::debug!(family = "microsoft", "skipping disabled tag family");
        }

        tracing::debug!(count = tags.len(), ?families, "generated tags");
        Ok(tags)
    }
}

fn standard_tags(config: &AppConfiguration) -> Result<Vec<Tag>> {
    Ok(vec![Tag::link("manifest", config.manifest_url()?, None)])
}

fn legacy_tags(config: &AppConfiguration) -> Vec<Tag> {
    let mut tags = Vec::new();

    if let Some(short_name) = config.short_name() {
        tags.push(Tag::meta("application-name", short_name));
    }
    if let Some(theme_color) = config.theme_color() {
        tags.push(Tag::meta("theme-color", theme_color));
    }
    tags.extend(
        config
            .icons()
            .iter()
            .filter(|icon| icon.applies_to(PLATFORM_WEB))
            .map(|icon| Tag::link("icon", icon.src(), icon.joined_sizes())),
    );

    tags
}

fn apple_tags(config: &AppConfiguration) -> Vec<Tag> {
    let mut tags = vec![Tag::meta("format-detection", "telephone=no")];

    if let Some(short_name) = config.short_name() {
        tags.push(Tag::meta("apple-mobile-web-app-title", short_name));
    }
    tags.extend(
        config
            .icons()
            .iter()
            .filter(|icon| icon.applies_to(PLATFORM_IOS))
            .map(|icon| Tag::link("apple-touch-icon", icon.src(), icon.joined_sizes())),
    );

    let status_bar = match config.display() {
        Some(DisplayMode::Fullscreen) => Some("black-translucent"),
        Some(DisplayMode::Standalone) => Some("default"),
        _ => None,
    };
    if let Some(style) = status_bar {
        tags.push(Tag::meta("apple-mobile-web-app-capable", "yes"));
        tags.push(Tag::meta("apple-mobile-web-app-status-bar-style", style));
    }

    tags
}

fn microsoft_tags(config: &AppConfiguration) -> Vec<Tag> {
    let mut tags = Vec::new();

    if let Some(start_url) = config.start_url() {
        tags.push(Tag::meta("msapplication-starturl", start_url));
    }
    if let Some(theme_color) = config.theme_color() {
        tags.push(Tag::meta("msapplication-navbutton-color", theme_color));
    }

    tags
}
