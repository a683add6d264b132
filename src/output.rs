//! CLI output formatting.
//!
//! Generated artifacts (manifest JSON, tag HTML) go to stdout untouched. This
//! module formats the human-readable summary printed by `check`:
//!
//! ```text
//! Super Racer 3000 (Racer3K)
//!     Start URL: /racer/start.html
//!     Display: fullscreen
//!     Theme color: aliceblue
//!
//! Icons
//! 001 icon/lowres.webp 64x64
//!     Type: image/webp
//! 002 icon/lowres.png 64x64
//! 003 icon/hd_hi 128x128
//!
//! Screenshots
//! 001 screenshots/in-game-1x.jpg 640x480
//!     Platform: web
//!
//! Tags: 15 (standard, legacy, apple, microsoft)
//! ```
//!
//! Each `format_*` function returns `Vec<String>` for testability and has a
//! `print_*` wrapper that writes to stdout. Format functions are pure.

use crate::app::AppConfiguration;
use crate::image::Image;
use crate::tags::TagFamilies;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// App title line: name, with short name in parens when both are set.
fn title_line(app: &AppConfiguration) -> String {
    match (app.name(), app.short_name()) {
        (Some(name), Some(short)) if name != short => format!("{name} ({short})"),
        (Some(name), _) => name.to_string(),
        (None, Some(short)) => short.to_string(),
        (None, None) => "(unnamed app)".to_string(),
    }
}

fn image_lines(index: usize, image: &Image) -> Vec<String> {
    let mut lines = vec![match image.joined_sizes() {
        Some(sizes) => format!("{} {} {}", format_index(index), image.src(), sizes),
        None => format!("{} {}", format_index(index), image.src()),
    }];
    if let Some(mime_type) = image.mime_type() {
        lines.push(format!("{}Type: {}", indent(1), mime_type));
    }
    if let Some(platform) = image.platform() {
        lines.push(format!("{}Platform: {}", indent(1), platform));
    }
    if !image.purpose().is_empty() {
        let purpose: Vec<&str> = image.purpose().iter().map(|p| p.as_str()).collect();
        lines.push(format!("{}Purpose: {}", indent(1), purpose.join(" ")));
    }
    lines
}

fn image_section(heading: &str, images: &[Image]) -> Vec<String> {
    if images.is_empty() {
        return Vec::new();
    }
    let mut lines = vec![String::new(), heading.to_string()];
    for (i, image) in images.iter().enumerate() {
        lines.extend(image_lines(i + 1, image));
    }
    lines
}

fn family_names(families: TagFamilies) -> Vec<&'static str> {
    [
        (families.standard, "standard"),
        (families.legacy, "legacy"),
        (families.apple, "apple"),
        (families.microsoft, "microsoft"),
    ]
    .into_iter()
    .filter_map(|(enabled, name)| enabled.then_some(name))
    .collect()
}

/// Summary of a parsed configuration, plus the number of tags it yields.
pub fn format_check_output(
    app: &AppConfiguration,
    families: TagFamilies,
    tag_count: usize,
) -> Vec<String> {
    let mut lines = vec![title_line(app)];

    let fields = [
        ("Start URL", app.start_url().map(str::to_string)),
        ("Scope", app.scope().map(str::to_string)),
        ("Language", app.language().map(str::to_string)),
        ("Direction", app.direction().map(|d| d.to_string())),
        ("Display", app.display().map(|d| d.to_string())),
        ("Orientation", app.orientation().map(|o| o.to_string())),
        ("Theme color", app.theme_color().map(str::to_string)),
        ("Background color", app.background_color().map(str::to_string)),
        ("Manifest URL", app.manifest_url().ok().map(str::to_string)),
    ];
    for (label, value) in fields {
        if let Some(value) = value {
            lines.push(format!("{}{}: {}", indent(1), label, value));
        }
    }

    lines.extend(image_section("Icons", app.icons()));
    lines.extend(image_section("Screenshots", app.screenshots()));

    lines.push(String::new());
    let names = family_names(families);
    if names.is_empty() {
        lines.push("Tags: none enabled".to_string());
    } else {
        lines.push(format!("Tags: {} ({})", tag_count, names.join(", ")));
    }
    lines
}

pub fn print_check_output(app: &AppConfiguration, families: TagFamilies, tag_count: usize) {
    for line in format_check_output(app, families, tag_count) {
        println!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;

    #[test]
    fn format_index_pads() {
        assert_eq!(format_index(1), "001");
        assert_eq!(format_index(42), "042");
    }

    #[test]
    fn title_line_variants() {
        let mut app = AppConfiguration::new();
        assert_eq!(title_line(&app), "(unnamed app)");
        app.set_short_name(Some("Racer3K"));
        assert_eq!(title_line(&app), "Racer3K");
        app.set_name(Some("Super Racer 3000"));
        assert_eq!(title_line(&app), "Super Racer 3000 (Racer3K)");
        app.set_short_name(Some("Super Racer 3000"));
        assert_eq!(title_line(&app), "Super Racer 3000");
    }

    #[test]
    fn check_output_for_sample() {
        let app = sample_configuration();
        let lines = format_check_output(&app, TagFamilies::all(), 15);

        assert_eq!(lines[0], "Super Racer 3000 (Racer3K)");
        assert!(lines.contains(&"    Start URL: /racer/start.html".to_string()));
        assert!(lines.contains(&"    Display: fullscreen".to_string()));
        assert!(lines.contains(&"Icons".to_string()));
        assert!(lines.contains(&"001 icon/lowres.webp 64x64".to_string()));
        assert!(lines.contains(&"    Type: image/webp".to_string()));
        assert!(lines.contains(&"003 icon/hd_hi 128x128".to_string()));
        assert!(lines.contains(&"Screenshots".to_string()));
        assert!(lines.contains(&"    Platform: web".to_string()));
        assert!(lines.contains(&"    Purpose: any".to_string()));
        assert_eq!(
            lines.last().unwrap(),
            "Tags: 15 (standard, legacy, apple, microsoft)"
        );
    }

    #[test]
    fn check_output_skips_empty_sections() {
        let lines = format_check_output(&AppConfiguration::new(), TagFamilies::none(), 0);
        assert_eq!(lines, vec!["(unnamed app)", "", "Tags: none enabled"]);
    }

    #[test]
    fn image_without_sizes_shows_only_src() {
        let lines = image_lines(2, &Image::with_src("vector.svg"));
        assert_eq!(lines, vec!["002 vector.svg"]);
    }
}
