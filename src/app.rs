//! The application configuration model.
//!
//! [`AppConfiguration`] is the single source of truth both generators read
//! from. It is built either field by field through its setters or from an
//! existing manifest with [`AppConfiguration::from_manifest`].
//!
//! ## Validation
//!
//! Validation happens on assignment, never on read:
//!
//! | Field | Rule |
//! |-------|------|
//! | `dir` | one of `ltr`, `rtl`, `auto` |
//! | `display` | one of `fullscreen`, `standalone`, `minimal-ui`, `browser` |
//! | `orientation` | one of the eight screen orientation tokens |
//! | `theme_color`, `background_color` | a value starting with `#` must be `#rgb` or `#rrggbb` |
//!
//! Enumerated values are trimmed and lower-cased before matching. A rejected
//! value leaves the configuration untouched. Passing `None` always clears
//! the field.
//!
//! Colors are stored trimmed. Colors that don't start with `#` (`aliceblue`,
//! `rgb(0 0 0)`) are otherwise accepted as-is; the manifest format allows any
//! CSS color.
//!
//! ## Parsing
//!
//! Parsing is fail-fast: the first invalid value aborts the whole parse and
//! no partially populated configuration is returned. Keys that are absent or
//! `null` leave the field unset. Unknown keys are ignored, and so are
//! `purpose` tokens other than `any` and `badge` (with a warning).

use crate::error::{Result, WebAppError};
use crate::image::{Image, parse_sizes};
use crate::types::{ImageObject, ManifestDocument};
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// Declares a closed manifest enumeration with its wire tokens.
macro_rules! manifest_enum {
    ($(#[$meta:meta])* $name:ident, $field:literal { $($variant:ident => $token:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// Every accepted value, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The token used in manifest JSON.
            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $token),+
                }
            }
        }

        impl FromStr for $name {
            type Err = WebAppError;

            fn from_str(s: &str) -> Result<Self> {
                match s.trim().to_ascii_lowercase().as_str() {
                    $($token => Ok($name::$variant),)+
                    _ => Err(WebAppError::invalid($field, s)),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

manifest_enum!(
    /// Base text direction for `name`, `short_name` and `description`.
    Direction, "dir" {
        Ltr => "ltr",
        Rtl => "rtl",
        Auto => "auto",
    }
);

manifest_enum!(
    /// Preferred display mode.
    DisplayMode, "display" {
        Fullscreen => "fullscreen",
        Standalone => "standalone",
        MinimalUi => "minimal-ui",
        Browser => "browser",
    }
);

manifest_enum!(
    /// Default screen orientation.
    Orientation, "orientation" {
        Any => "any",
        Natural => "natural",
        Landscape => "landscape",
        LandscapePrimary => "landscape-primary",
        LandscapeSecondary => "landscape-secondary",
        Portrait => "portrait",
        PortraitPrimary => "portrait-primary",
        PortraitSecondary => "portrait-secondary",
    }
);

/// All metadata of a web application.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppConfiguration {
    background_color: Option<String>,
    description: Option<String>,
    direction: Option<Direction>,
    display: Option<DisplayMode>,
    icons: Vec<Image>,
    language: Option<String>,
    name: Option<String>,
    orientation: Option<Orientation>,
    scope: Option<String>,
    screenshots: Vec<Image>,
    short_name: Option<String>,
    start_url: Option<String>,
    theme_color: Option<String>,
    manifest_url: Option<String>,
}

fn owned(value: Option<&str>) -> Option<String> {
    value.map(str::to_string)
}

fn parse_optional<T: FromStr<Err = WebAppError>>(value: Option<&str>) -> Result<Option<T>> {
    value.map(|v| v.parse::<T>()).transpose()
}

/// Trim a color and reject malformed hex. Anything not starting with `#`
/// passes.
fn checked_color(field: &'static str, value: &str) -> Result<String> {
    let color = value.trim();
    let Some(hex) = color.strip_prefix('#') else {
        return Ok(color.to_string());
    };
    let valid = matches!(hex.len(), 3 | 6) && hex.chars().all(|c| c.is_ascii_hexdigit());
    if valid {
        Ok(color.to_string())
    } else {
        Err(WebAppError::invalid(field, value))
    }
}

impl AppConfiguration {
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Manifest URL
    // =========================================================================

    /// URL the manifest is published at. Every deployed app needs one, so
    /// reading it while unset is an error rather than `None`.
    pub fn manifest_url(&self) -> Result<&str> {
        self.manifest_url
            .as_deref()
            .ok_or(WebAppError::MissingRequired("manifest_url"))
    }

    pub fn set_manifest_url(&mut self, url: Option<&str>) -> &mut Self {
        self.manifest_url = owned(url);
        self
    }

    // =========================================================================
    // Validated fields
    // =========================================================================

    pub fn direction(&self) -> Option<Direction> {
        self.direction
    }

    pub fn set_direction(&mut self, direction: Option<&str>) -> Result<&mut Self> {
        self.direction = parse_optional(direction)?;
        Ok(self)
    }

    pub fn display(&self) -> Option<DisplayMode> {
        self.display
    }

    pub fn set_display(&mut self, display: Option<&str>) -> Result<&mut Self> {
        self.display = parse_optional(display)?;
        Ok(self)
    }

    pub fn orientation(&self) -> Option<Orientation> {
        self.orientation
    }

    pub fn set_orientation(&mut self, orientation: Option<&str>) -> Result<&mut Self> {
        self.orientation = parse_optional(orientation)?;
        Ok(self)
    }

    /// Color used by browsers for the window/task switcher chrome.
    pub fn theme_color(&self) -> Option<&str> {
        self.theme_color.as_deref()
    }

    pub fn set_theme_color(&mut self, color: Option<&str>) -> Result<&mut Self> {
        self.theme_color = color
            .map(|c| checked_color("theme_color", c))
            .transpose()?;
        Ok(self)
    }

    /// Background drawn before the stylesheet loads; also used for
    /// auto-generated splash screens.
    pub fn background_color(&self) -> Option<&str> {
        self.background_color.as_deref()
    }

    pub fn set_background_color(&mut self, color: Option<&str>) -> Result<&mut Self> {
        self.background_color = color
            .map(|c| checked_color("background_color", c))
            .transpose()?;
        Ok(self)
    }

    // =========================================================================
    // Plain fields
    // =========================================================================

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn set_description(&mut self, description: Option<&str>) -> &mut Self {
        self.description = owned(description);
        self
    }

    /// Language tag (RFC 5646). Passed through without validation.
    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    pub fn set_language(&mut self, language: Option<&str>) -> &mut Self {
        self.language = owned(language);
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn set_name(&mut self, name: Option<&str>) -> &mut Self {
        self.name = owned(name);
        self
    }

    /// Navigation scope; leaving it turns the app back into a normal page.
    pub fn scope(&self) -> Option<&str> {
        self.scope.as_deref()
    }

    pub fn set_scope(&mut self, scope: Option<&str>) -> &mut Self {
        self.scope = owned(scope);
        self
    }

    pub fn short_name(&self) -> Option<&str> {
        self.short_name.as_deref()
    }

    pub fn set_short_name(&mut self, short_name: Option<&str>) -> &mut Self {
        self.short_name = owned(short_name);
        self
    }

    pub fn start_url(&self) -> Option<&str> {
        self.start_url.as_deref()
    }

    pub fn set_start_url(&mut self, start_url: Option<&str>) -> &mut Self {
        self.start_url = owned(start_url);
        self
    }

    // =========================================================================
    // Collections
    // =========================================================================

    /// Icons in insertion order.
    pub fn icons(&self) -> &[Image] {
        &self.icons
    }

    pub fn add_icon(&mut self, icon: Image) -> &mut Self {
        self.icons.push(icon);
        self
    }

    /// Screenshots in insertion order.
    pub fn screenshots(&self) -> &[Image] {
        &self.screenshots
    }

    pub fn add_screenshot(&mut self, screenshot: Image) -> &mut Self {
        self.screenshots.push(screenshot);
        self
    }

    // =========================================================================
    // Manifest parsing
    // =========================================================================

    /// Read a manifest file and parse it with [`Self::from_manifest`].
    pub fn from_manifest_file(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), "read manifest file");
        Self::from_manifest(&json)
    }

    /// Build a configuration from web app manifest JSON.
    pub fn from_manifest(json: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        if !value.is_object() {
            return Err(WebAppError::Parse(serde::de::Error::custom(
                "manifest root must be a JSON object",
            )));
        }
        let doc: ManifestDocument = serde_json::from_value(value)?;
        Self::from_document(doc)
    }

    /// Move a deserialized manifest through the validating setters.
    pub fn from_document(doc: ManifestDocument) -> Result<Self> {
        let mut app = AppConfiguration::new();

        app.set_background_color(doc.background_color.as_deref())?
            .set_direction(doc.dir.as_deref())?
            .set_display(doc.display.as_deref())?
            .set_orientation(doc.orientation.as_deref())?
            .set_theme_color(doc.theme_color.as_deref())?
            .set_description(doc.description.as_deref())
            .set_language(doc.lang.as_deref())
            .set_name(doc.name.as_deref())
            .set_scope(doc.scope.as_deref())
            .set_short_name(doc.short_name.as_deref())
            .set_start_url(doc.start_url.as_deref());

        for icon in doc.icons.unwrap_or_default() {
            app.add_icon(image_from_object(icon)?);
        }

        let screenshots = match (doc.screenshots, doc.splash_screens) {
            (Some(screenshots), _) => screenshots,
            (None, Some(splash_screens)) => {
                tracing::debug!("using legacy splash_screens key for screenshots");
                splash_screens
            }
            (None, None) => Vec::new(),
        };
        for screenshot in screenshots {
            app.add_screenshot(image_from_object(screenshot)?);
        }

        tracing::debug!(
            icons = app.icons.len(),
            screenshots = app.screenshots.len(),
            "parsed manifest"
        );
        Ok(app)
    }
}

fn image_from_object(object: ImageObject) -> Result<Image> {
    let mut image = Image::with_src(object.src);
    image
        .set_type(object.mime_type.as_deref())
        .set_platform(object.platform.as_deref())
        .set_background_color(object.background_color.as_deref());

    if let Some(density) = &object.density {
        image.set_density(density.as_f64())?;
    }

    if let Some(sizes) = &object.sizes {
        let parsed = parse_sizes(sizes);
        if parsed.is_empty() {
            tracing::warn!(src = image.src(), sizes = %sizes, "no WIDTHxHEIGHT tokens in sizes");
        }
        for (width, height) in parsed {
            image.add_size(width, height);
        }
    }

    if let Some(purpose) = &object.purpose {
        for token in purpose.split_whitespace() {
            match token.parse() {
                Ok(purpose) => {
                    image.add_purpose(purpose);
                }
                Err(_) => {
                    tracing::warn!(
                        src = image.src(),
                        purpose = token,
                        "skipping unsupported purpose"
                    );
                }
            }
        }
    }

    Ok(image)
}
