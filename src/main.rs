//! dynam-translate - MUSE2 → Dynamic Music soundbank translator
//!
//! Run inside a mod's `MWSE/config/MS/` directory. Every recognized music
//! list in the directory is translated to a Lua soundbank module written
//! alongside it; the mod's media is expected three levels up, under
//! `music/MS/`.

use anyhow::Result;
use clap::Parser;
use tracing::info;

use dynam_translate::{Config, LoftyProber, Translator};

/// Translate the MUSE2 music lists in the current directory into Dynamic
/// Music soundbank modules.
#[derive(Parser)]
#[command(name = "dynam-translate", version, about)]
struct Args {
    /// Short mod-name token inserted into every derived file name and id.
    /// Translate one mod at a time; descriptor names can overlap across mods.
    mod_token: String,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();
    info!("dynam-translate v{}", env!("CARGO_PKG_VERSION"));

    let config = Config::from_cwd(args.mod_token)?;
    info!("List directory: {}", config.list_dir.display());
    info!("Mod token: {}", config.mod_token);

    let prober = LoftyProber;
    let summary = Translator::new(&config, &prober).run()?;
    info!(
        "Done: {} written, {} skipped, {} failed",
        summary.written, summary.skipped, summary.failed
    );
    Ok(())
}
