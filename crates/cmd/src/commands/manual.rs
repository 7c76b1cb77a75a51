use anyhow::{Result, anyhow};
use rentalsite::pages::init_property;
use rentalsite::{Anonymous, GuestUser, IdentityClient, Navigation, PageKind, SignedIn};

use crate::common::SiteContext;

/// Where the house-manual button on `slug`'s page sends a visitor.
///
/// With `user` the visitor is treated as signed in; otherwise as anonymous.
pub async fn manual_command(
    site: &SiteContext,
    slug: &str,
    user: Option<&str>,
) -> Result<Navigation> {
    let ctx = site.render_context();
    let mut doc = PageKind::Property.shell();
    let gate = init_property(&ctx, Some(slug), &mut doc)
        .await?
        .ok_or_else(|| anyhow!("Property '{}' has no house manual", slug))?;

    let identity: Box<dyn IdentityClient> = match user {
        Some(email) => Box::new(SignedIn(GuestUser {
            email: email.to_string(),
        })),
        None => Box::new(Anonymous),
    };

    Ok(gate.on_click(identity.as_ref(), &site.config.guest_login_path))
}
