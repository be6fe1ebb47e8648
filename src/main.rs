use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use pwa_glyphs::{GeneratorConfig, GlyphKind};

#[derive(Parser, Debug)]
#[command(name = "pwa-glyphs", version, about = "Generate PWA icons and iOS splash screens")]
struct Cli {
    /// JSON config file; flags below override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory that `public/icons` and `public/splash` are created under
    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// Glyph drawn on icons (splash screens always use the house)
    #[arg(long, value_enum)]
    glyph: Option<GlyphKind>,

    /// Also write the web manifest `icons` array to this path
    #[arg(long)]
    manifest: Option<PathBuf>,

    /// Also write the HTML head link snippet to this path
    #[arg(long)]
    head: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, Copy)]
enum Command {
    /// Favicons, standard, maskable, and apple-touch icons
    Icons,
    /// iOS launch images
    Splash,
    /// Everything (the default)
    All,
}

fn resolve_config(cli: &Cli) -> anyhow::Result<GeneratorConfig> {
    let mut config = match &cli.config {
        Some(path) => GeneratorConfig::from_json_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => GeneratorConfig::default(),
    };
    if let Some(dir) = &cli.out_dir {
        config.out_dir = dir.clone();
    }
    if let Some(glyph) = cli.glyph {
        config.glyph = glyph;
    }
    if cli.manifest.is_some() {
        config.manifest_path = cli.manifest.clone();
    }
    if cli.head.is_some() {
        config.head_path = cli.head.clone();
    }
    Ok(config)
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = resolve_config(&cli)?;
    log::debug!("resolved config: {config:?}");

    let written = match cli.command.unwrap_or(Command::All) {
        Command::Icons => {
            let icons = pwa_glyphs::generate_icons(&config).context("generating icons")?;
            pwa_glyphs::write_fragments(&config).context("writing fragments")?;
            icons
        }
        Command::Splash => {
            let splash = pwa_glyphs::generate_splash(&config).context("generating splash screens")?;
            pwa_glyphs::write_fragments(&config).context("writing fragments")?;
            splash
        }
        Command::All => pwa_glyphs::generate_all(&config).context("generating assets")?,
    };

    log::info!("{} files written", written.len());
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run(Cli::parse()) {
        log::error!("{e:#}");
        std::process::exit(1);
    }
}
