//! Shared test utilities.
//!
//! Provides the "Super Racer 3000" sample manifest (adapted from the W3C
//! manifest examples) and lookup helpers that panic with a readable message
//! on a miss.
//!
//! The sample only uses keys the crate recognizes, so it must survive a
//! parse → generate round trip unchanged.

use crate::app::AppConfiguration;
use crate::image::Image;

pub const SAMPLE_MANIFEST: &str = r#"{
  "lang": "en",
  "dir": "ltr",
  "name": "Super Racer 3000",
  "description": "The ultimate futuristic racing game from the future!",
  "short_name": "Racer3K",
  "scope": "/racer/",
  "start_url": "/racer/start.html",
  "display": "fullscreen",
  "orientation": "landscape",
  "theme_color": "aliceblue",
  "background_color": "red",
  "icons": [
    {
      "src": "icon/lowres.webp",
      "sizes": "64x64",
      "type": "image/webp"
    },
    {
      "src": "icon/lowres.png",
      "sizes": "64x64"
    },
    {
      "src": "icon/hd_hi",
      "sizes": "128x128"
    }
  ],
  "screenshots": [
    {
      "src": "screenshots/in-game-1x.jpg",
      "sizes": "640x480",
      "type": "image/jpeg",
      "platform": "web",
      "purpose": "any"
    }
  ]
}"#;

/// Parse [`SAMPLE_MANIFEST`].
pub fn sample_configuration() -> AppConfiguration {
    AppConfiguration::from_manifest(SAMPLE_MANIFEST).unwrap()
}

/// Find an icon by `src`. Panics if not found.
pub fn find_icon<'a>(app: &'a AppConfiguration, src: &str) -> &'a Image {
    app.icons()
        .iter()
        .find(|i| i.src() == src)
        .unwrap_or_else(|| {
            let srcs: Vec<&str> = app.icons().iter().map(|i| i.src()).collect();
            panic!("icon '{src}' not found. Available: {srcs:?}")
        })
}
