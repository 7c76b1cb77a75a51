use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use diagnostics::{log_debug, log_info};
use rentalsite::content::{PROPERTY_INDEX_PATH, PropertyIndex};
use rentalsite::fragments::property_href;
use rentalsite::{PageKind, load_json};

use super::render::render_command;
use crate::common::{SiteContext, write_output};

/// Render every page of the site into `output_dir`.
///
/// Property pages are written once per indexed slug, as
/// `properties/<slug>.html`. Any page whose required content fails to load
/// fails the build.
pub async fn build_command(site: &SiteContext, output_dir: &Path) -> Result<Vec<PathBuf>> {
    let index: PropertyIndex = load_json(site.source.as_ref(), PROPERTY_INDEX_PATH)
        .await
        .context("Failed to load the property index")?;

    let mut pages: Vec<(String, PathBuf)> = PageKind::ALL
        .iter()
        .filter(|kind| **kind != PageKind::Property)
        .map(|kind| {
            let file = kind.path().trim_start_matches('/');
            (kind.path().to_string(), output_dir.join(file))
        })
        .collect();
    for slug in &index.slugs {
        pages.push((
            property_href(slug),
            output_dir.join("properties").join(format!("{}.html", slug)),
        ));
    }

    let mut written = Vec::with_capacity(pages.len());
    for (target, file) in pages {
        log_debug!("Building {target}", target: target.as_str());
        let page = render_command(site, &target, None).await?;
        if let Some(e) = page.failure {
            return Err(e).with_context(|| format!("Failed to render {}", target));
        }
        write_output(Some(&file), &page.html)?;
        written.push(file);
    }

    log_info!("Wrote {count} pages to {dir}",
        count: written.len(),
        dir: output_dir.display().to_string());
    Ok(written)
}
