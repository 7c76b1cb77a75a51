use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use cmd::{SiteContext, build_command, manual_command, render_command, write_output};
use diagnostics::log_error;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(name = "rentalsite")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Content location: a directory containing `content/`, or the site's base URL
    #[arg(short, long, global = true, default_value = ".")]
    content: String,

    /// Path to site.yaml
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render one page request to HTML
    Render {
        /// Page path with query, e.g. "/properties.html?slug=cliff-house"
        target: String,
        /// Gallery page only: select this property's tab after loading
        #[arg(long)]
        tab: Option<String>,
        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Render every page of the site into a directory
    Build {
        /// Output directory for generated files
        #[arg(short, long)]
        output: PathBuf,
    },
    /// Show where a property's house-manual button leads
    Manual {
        /// Property slug
        slug: String,
        /// Treat the visitor as signed in with this email
        #[arg(long)]
        user: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    diagnostics::init();

    let cli = Cli::parse();
    let site = SiteContext::open(&cli.content, cli.config.as_deref()).await?;

    match cli.command {
        Commands::Render { target, tab, output } => {
            let page = render_command(&site, &target, tab.as_deref()).await?;
            write_output(output.as_deref(), &page.html)?;
            if let Some(e) = page.failure {
                log_error!("Page rendered incompletely: {reason}", reason: e.to_string());
                return Err(e.into());
            }
            Ok(())
        }
        Commands::Build { output } => {
            let written = build_command(&site, &output).await?;
            let mut stdout = std::io::stdout().lock();
            for file in written {
                writeln!(stdout, "{}", file.display())?;
            }
            Ok(())
        }
        Commands::Manual { slug, user } => {
            let nav = manual_command(&site, &slug, user.as_deref()).await?;
            write_output(None, nav.href())
        }
    }
}
