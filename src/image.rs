//! Image resources referenced by a web app (icons and screenshots).
//!
//! An [`Image`] mirrors the manifest "image resource" object: a `src`, an
//! optional MIME `type`, a list of pixel sizes, a `purpose` set and an
//! optional target `platform`. Splash screen images may also carry a pixel
//! `density` and a `background_color`.
//!
//! ## Sizes
//!
//! In manifest JSON, sizes travel as one string of space-separated
//! `WIDTHxHEIGHT` tokens:
//!
//! ```text
//! "sizes": "64x64 128x128"   →   [(64, 64), (128, 128)]
//! ```
//!
//! [`parse_sizes`] and [`format_sizes`] are exact inverses for well-formed
//! input. Parsing is lenient: anything that doesn't match `(\d+)x(\d+)` is
//! skipped, so `"any"` parses to an empty list.
//!
//! ## Platform
//!
//! There is no closed list of platform values. `android`, `ios` and `web`
//! are the conventional ones and the only ones the tag generator looks at.
//! An image with no platform applies everywhere.

use crate::error::{Result, WebAppError};
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

pub const PLATFORM_ANDROID: &str = "android";
pub const PLATFORM_IOS: &str = "ios";
pub const PLATFORM_WEB: &str = "web";

static SIZE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)x(\d+)").expect("size pattern is valid"));

/// Intended UI role of an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Purpose {
    Any,
    Badge,
}

impl Purpose {
    pub fn as_str(self) -> &'static str {
        match self {
            Purpose::Any => "any",
            Purpose::Badge => "badge",
        }
    }
}

impl FromStr for Purpose {
    type Err = WebAppError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "any" => Ok(Purpose::Any),
            "badge" => Ok(Purpose::Badge),
            _ => Err(WebAppError::invalid("purpose", s)),
        }
    }
}

impl fmt::Display for Purpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single image resource.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Image {
    src: String,
    mime_type: Option<String>,
    sizes: Vec<(u32, u32)>,
    purpose: Vec<Purpose>,
    platform: Option<String>,
    density: Option<f64>,
    background_color: Option<String>,
}

impl Image {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shorthand for an image with only `src` set.
    pub fn with_src(src: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            ..Self::default()
        }
    }

    pub fn src(&self) -> &str {
        &self.src
    }

    pub fn set_src(&mut self, src: impl Into<String>) -> &mut Self {
        self.src = src.into();
        self
    }

    /// MIME type, e.g. `image/png`.
    pub fn mime_type(&self) -> Option<&str> {
        self.mime_type.as_deref()
    }

    pub fn set_type(&mut self, mime_type: Option<&str>) -> &mut Self {
        self.mime_type = mime_type.map(str::to_string);
        self
    }

    /// Sizes in insertion order. Duplicates are kept.
    pub fn sizes(&self) -> &[(u32, u32)] {
        &self.sizes
    }

    pub fn add_size(&mut self, width: u32, height: u32) -> &mut Self {
        self.sizes.push((width, height));
        self
    }

    /// Purposes in first-seen order, without duplicates.
    pub fn purpose(&self) -> &[Purpose] {
        &self.purpose
    }

    /// Adds a purpose. Re-adding one that is already present is a no-op.
    pub fn add_purpose(&mut self, purpose: Purpose) -> &mut Self {
        if !self.purpose.contains(&purpose) {
            self.purpose.push(purpose);
        }
        self
    }

    pub fn platform(&self) -> Option<&str> {
        self.platform.as_deref()
    }

    pub fn set_platform(&mut self, platform: Option<&str>) -> &mut Self {
        self.platform = platform.map(str::to_string);
        self
    }

    /// Device pixel ratio the image is meant for.
    pub fn density(&self) -> Option<f64> {
        self.density
    }

    /// Density must be a finite number greater than zero. `None` clears.
    pub fn set_density(&mut self, density: Option<f64>) -> Result<&mut Self> {
        if let Some(d) = density.filter(|d| !(d.is_finite() && *d > 0.0)) {
            return Err(WebAppError::invalid("density", &d.to_string()));
        }
        self.density = density;
        Ok(self)
    }

    pub fn background_color(&self) -> Option<&str> {
        self.background_color.as_deref()
    }

    pub fn set_background_color(&mut self, color: Option<&str>) -> &mut Self {
        self.background_color = color.map(str::to_string);
        self
    }

    /// True when the image has no platform or targets exactly `platform`.
    pub fn applies_to(&self, platform: &str) -> bool {
        self.platform.as_deref().is_none_or(|p| p == platform)
    }

    /// Sizes rendered as `"WxH WxH"`, or `None` when there are none.
    pub fn joined_sizes(&self) -> Option<String> {
        if self.sizes.is_empty() {
            None
        } else {
            Some(format_sizes(&self.sizes))
        }
    }
}

/// Extract every `WIDTHxHEIGHT` pair from `input`, left to right.
///
/// Tokens whose numbers don't fit in a `u32` are dropped.
pub fn parse_sizes(input: &str) -> Vec<(u32, u32)> {
    SIZE_PATTERN
        .captures_iter(input)
        .filter_map(|caps| {
            let width = caps[1].parse().ok()?;
            let height = caps[2].parse().ok()?;
            Some((width, height))
        })
        .collect()
}

/// Render sizes as space-separated `WIDTHxHEIGHT` tokens.
pub fn format_sizes(sizes: &[(u32, u32)]) -> String {
    sizes
        .iter()
        .map(|(w, h)| format!("{w}x{h}"))
        .collect::<Vec<_>>()
        .join(" ")
}
