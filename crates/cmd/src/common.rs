use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use diagnostics::log_debug;
use rentalsite::{ContentSource, RenderContext, SiteConfig, open_source};

/// Content source plus site configuration, shared by every command.
pub struct SiteContext {
    pub source: Box<dyn ContentSource>,
    pub config: SiteConfig,
}

impl SiteContext {
    /// Open `content` (a directory or a base URL) and read the optional
    /// `site.yaml`. Without a config file every setting takes its default.
    pub async fn open(content: &str, config_path: Option<&Path>) -> Result<Self> {
        let source = open_source(content)
            .with_context(|| format!("Failed to open content source {}", content))?;

        let config = match config_path {
            Some(path) => SiteConfig::load(path)
                .await
                .with_context(|| format!("Failed to read site config {}", path.display()))?,
            None => SiteConfig::default(),
        };

        log_debug!("Using content from {content}", content: source.describe());
        Ok(Self { source, config })
    }

    pub fn render_context(&self) -> RenderContext<'_> {
        RenderContext::new(self.source.as_ref(), &self.config)
    }
}

/// Write command output to a file, or to stdout when no path is given.
pub fn write_output(output: Option<&Path>, body: &str) -> Result<()> {
    match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
            std::fs::write(path, body)
                .with_context(|| format!("Failed to write {}", path.display()))
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(body.as_bytes())?;
            stdout.write_all(b"\n")?;
            Ok(())
        }
    }
}
