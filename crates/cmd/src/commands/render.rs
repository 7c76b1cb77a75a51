use anyhow::{Result, anyhow};
use diagnostics::{log_debug, log_info};
use rentalsite::layouts::render_page;
use rentalsite::{PageRequest, PageState, render_request};

use crate::common::SiteContext;

/// Output of rendering one page request.
pub struct RenderedPage {
    pub html: String,
    /// Why the routine stopped early, if it did. `html` then holds the
    /// partially populated page.
    pub failure: Option<rentalsite::Error>,
}

/// Render the page for `target` (e.g. `/properties.html?slug=cliff-house`).
///
/// `tab` simulates a click on that gallery tab after the page loads.
pub async fn render_command(
    site: &SiteContext,
    target: &str,
    tab: Option<&str>,
) -> Result<RenderedPage> {
    let request = PageRequest::parse(target)?;
    let ctx = site.render_context();

    let (mut doc, outcome) = render_request(&ctx, &request).await;

    let failure = match (outcome, tab) {
        (Ok(PageState::Gallery(mut view)), Some(slug)) => {
            log_debug!("Clicking gallery tab {slug}", slug: slug);
            view.on_tab_click(&ctx, &mut doc, slug).await.err()
        }
        (Ok(_), Some(_)) => {
            return Err(anyhow!("--tab only applies to the gallery page"));
        }
        (Ok(_), None) => None,
        (Err(e), _) => Some(e),
    };

    log_info!("Rendered {target}", target: target);
    Ok(RenderedPage {
        html: render_page(request.kind, &doc, &site.config),
        failure,
    })
}
