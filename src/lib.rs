//! # webapp-meta
//!
//! Describe a web application once, then render that description as both a
//! web app manifest (`manifest.json`) and the HTML `<head>` tags that older
//! browsers, iOS Safari and Windows read instead of (or alongside) it.
//!
//! # Architecture
//!
//! ```text
//!                       ┌──► ManifestGenerator ──► manifest.json
//! manifest.json ──► AppConfiguration
//!   (or setters)        └──► TagGenerator ──────► <link>/<meta> tags
//! ```
//!
//! The two generators are independent pure functions over a borrowed
//! [`AppConfiguration`]. Neither mutates it, and neither knows about the
//! other.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`app`] | `AppConfiguration`: validated setters and the manifest parser |
//! | [`image`] | `Image` resources, purpose set, `WIDTHxHEIGHT` size strings |
//! | [`types`] | serde wire types for the manifest JSON document |
//! | [`manifest`] | `ManifestGenerator`: configuration → manifest document |
//! | [`tags`] | `TagGenerator`: configuration → meta/link tags, per family |
//! | [`config`] | `webapp.toml` loading for the CLI (manifest URL, tag families) |
//! | [`output`] | CLI summary formatting |
//! | [`error`] | `WebAppError` taxonomy |
//!
//! # Example
//!
//! ```rust
//! use webapp_meta::{AppConfiguration, Image, ManifestGenerator, TagFamilies, TagGenerator};
//!
//! let mut app = AppConfiguration::new();
//! app.set_name(Some("Super Racer 3000"))
//!     .set_short_name(Some("Racer3K"))
//!     .set_manifest_url(Some("manifest.json"));
//! app.set_display(Some("fullscreen"))?
//!     .set_theme_color(Some("aliceblue"))?;
//!
//! let mut icon = Image::with_src("icon/lowres.webp");
//! icon.set_type(Some("image/webp")).add_size(64, 64);
//! app.add_icon(icon);
//!
//! let tags = TagGenerator::get_tags(&app, TagFamilies::all())?;
//! assert!(tags.contains(r#"<link rel="apple-touch-icon" href="icon/lowres.webp" sizes="64x64">"#));
//!
//! let manifest = ManifestGenerator::to_value(&app)?;
//! assert_eq!(manifest["display"], "fullscreen");
//! # Ok::<(), webapp_meta::WebAppError>(())
//! ```
//!
//! # Design Decisions
//!
//! ## Validate on Write
//!
//! Enumerated fields (`dir`, `display`, `orientation`) are stored as enums,
//! and the string setters are the only way in. An invalid value is rejected
//! the moment it is assigned, so a configuration that exists is always one
//! the generators can render.
//!
//! ## One Wire Type for Both Directions
//!
//! Parsing and generation share [`types::ManifestDocument`]. The key names
//! and the "omit unset keys" rule are written once, which is what makes
//! `generate(parse(json))` reproduce the recognized part of `json`.
//!
//! ## Structured Tags
//!
//! Tags are [`Tag`] values (element name, optional text, ordered attributes),
//! not preformatted strings. Callers can inspect or filter them before
//! rendering, and `Tag` implements `maud::Render` for use in maud templates.

pub mod app;
pub mod config;
pub mod error;
pub mod image;
pub mod manifest;
pub mod output;
pub mod tags;
pub mod types;

pub use app::{AppConfiguration, Direction, DisplayMode, Orientation};
pub use error::{Result, WebAppError};
pub use image::{Image, Purpose};
pub use manifest::ManifestGenerator;
pub use tags::{Tag, TagFamilies, TagGenerator};

#[cfg(test)]
pub(crate) mod test_helpers;
