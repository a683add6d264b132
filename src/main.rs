use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use webapp_meta::{AppConfiguration, ManifestGenerator, TagFamilies, TagGenerator, config, output};

/// Flags that switch off individual tag families.
#[derive(clap::Args, Clone)]
struct TagArgs {
    /// URL the manifest is served from (overrides manifest_url in the config)
    #[arg(long)]
    manifest_url: Option<String>,

    /// Skip <link rel="manifest">
    #[arg(long)]
    no_standard: bool,

    /// Skip application-name, theme-color and rel="icon" tags
    #[arg(long)]
    no_legacy: bool,

    /// Skip iOS tags (apple-mobile-web-app-*, apple-touch-icon)
    #[arg(long)]
    no_apple: bool,

    /// Skip Windows tags (msapplication-*)
    #[arg(long)]
    no_microsoft: bool,
}

impl TagArgs {
    fn families(&self, base: TagFamilies) -> TagFamilies {
        TagFamilies {
            standard: base.standard && !self.no_standard,
            legacy: base.legacy && !self.no_legacy,
            apple: base.apple && !self.no_apple,
            microsoft: base.microsoft && !self.no_microsoft,
        }
    }
}

#[derive(Parser)]
#[command(name = "webapp-meta")]
#[command(about = "Generate web app manifests and HTML meta/link tags")]
#[command(long_about = "\
Generate web app manifests and HTML meta/link tags

Reads a web app manifest (manifest.json) and renders it back out as a
normalized manifest, or as the <head> tags browsers and mobile platforms
look for:

  standard   <link rel=\"manifest\">
  legacy     application-name, theme-color, <link rel=\"icon\">
  apple      format-detection, apple-mobile-web-app-*, apple-touch-icon
  microsoft  msapplication-starturl, msapplication-navbutton-color

Settings that are not part of the manifest (the manifest URL, which tag
families to emit) live in webapp.toml. Run 'webapp-meta gen-config' to
print a documented one.

Set RUST_LOG=debug for diagnostics on stderr.")]
#[command(version)]
struct Cli {
    /// Generator config file
    #[arg(long, default_value = "webapp.toml", global = true)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Parse a manifest and print it back normalized
    Manifest {
        /// Manifest JSON file
        file: PathBuf,
    },
    /// Print the HTML meta/link tags for a manifest
    Tags {
        /// Manifest JSON file
        file: PathBuf,
        #[command(flatten)]
        tags: TagArgs,
    },
    /// Validate a manifest and print a summary
    Check {
        /// Manifest JSON file
        file: PathBuf,
        #[command(flatten)]
        tags: TagArgs,
    },
    /// Print a stock webapp.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr; stdout carries the generated artifacts.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_env_filter(filter)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Manifest { file } => {
            let app = AppConfiguration::from_manifest_file(&file)?;
            println!("{}", ManifestGenerator::to_json_pretty(&app)?);
        }
        Command::Tags { file, tags } => {
            let (app, families) = load(&cli.config, &file, &tags)?;
            println!("{}", TagGenerator::get_tags(&app, families)?);
        }
        Command::Check { file, tags } => {
            let (app, families) = load(&cli.config, &file, &tags)?;
            let count = TagGenerator::get_data(&app, families)?.len();
            output::print_check_output(&app, families, count);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Parse the manifest and apply the config file plus CLI overrides.
fn load(
    config_path: &Path,
    manifest_path: &Path,
    args: &TagArgs,
) -> Result<(AppConfiguration, TagFamilies), Box<dyn std::error::Error>> {
    let generator_config = config::load_config(config_path)?;
    let mut app = AppConfiguration::from_manifest_file(manifest_path)?;

    let manifest_url = args
        .manifest_url
        .as_deref()
        .or(generator_config.manifest_url.as_deref());
    app.set_manifest_url(manifest_url);

    Ok((app, args.families(generator_config.tags)))
}
