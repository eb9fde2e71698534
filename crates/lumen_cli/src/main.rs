//! Lumen CLI
//!
//! Inspects and switches the persisted theme mode, exports the theme's CSS
//! variables and renders the component gallery as a standalone HTML page.

mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use lumen_theme::ThemeMode;
use tracing_subscriber::EnvFilter;

use crate::commands::Session;

/// Lumen design system tools
#[derive(Parser, Debug)]
#[command(name = "lumen")]
#[command(about = "Lumen design system tools")]
#[command(version)]
struct Cli {
    /// Theme configuration file
    #[arg(short, long, global = true, default_value = "lumen.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Inspect or change the persisted theme mode
    Mode {
        #[command(subcommand)]
        action: ModeAction,
    },

    /// Print the CSS variable stylesheet for both modes
    Css,

    /// Render the component gallery as an HTML page
    Gallery {
        /// Render in this mode instead of the resolved one
        #[arg(short, long)]
        mode: Option<ThemeMode>,

        /// Write the page here instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

#[derive(Subcommand, Debug)]
enum ModeAction {
    /// Show the active mode and where it came from
    Show,

    /// Persist a mode
    Set { mode: ThemeMode },

    /// Flip the persisted mode
    Toggle,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let session = Session::open(&cli.config)?;
    tracing::debug!("using preferences at {}", session.store().path().display());

    match cli.command {
        Commands::Mode { action } => match action {
            ModeAction::Show => {
                let (mode, source) = session.resolve();
                println!("{mode} ({})", commands::describe_source(source));
            }
            ModeAction::Set { mode } => {
                session.persist(mode)?;
                println!("{mode}");
            }
            ModeAction::Toggle => {
                let mode = session.toggle()?;
                println!("{mode}");
            }
        },
        Commands::Css => print!("{}", commands::stylesheet()),
        Commands::Gallery { mode, out } => {
            let page = session.gallery_page(mode);
            match out {
                Some(path) => {
                    commands::write_page(&path, &page)?;
                    eprintln!("wrote {}", path.display());
                }
                None => print!("{page}"),
            }
        }
    }

    Ok(())
}
