// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! House-manual gate.
//!
//! The manual link is only followed for guests with an identity session.
//! Everyone else is sent to the guest login page, which returns them to the
//! manual afterwards via `?next=`.

use crate::fragments::encode_query_value;

/// A signed-in guest, as reported by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuestUser {
    pub email: String,
}

/// The identity provider's "who is signed in" check.
pub trait IdentityClient {
    fn current_user(&self) -> Option<GuestUser>;
}

/// No session.
#[derive(Debug, Clone, Copy, Default)]
pub struct Anonymous;

impl IdentityClient for Anonymous {
    fn current_user(&self) -> Option<GuestUser> {
        None
    }
}

/// A fixed session.
#[derive(Debug, Clone)]
pub struct SignedIn(pub GuestUser);

impl IdentityClient for SignedIn {
    fn current_user(&self) -> Option<GuestUser> {
        Some(self.0.clone())
    }
}

/// Where a click takes the browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    /// Straight to the manual
    Open(String),
    /// To the guest login page, carrying the manual URL as the return target
    Login(String),
}

impl Navigation {
    pub fn href(&self) -> &str {
        match self {
            Navigation::Open(href) | Navigation::Login(href) => href,
        }
    }
}

/// Click handler state for the `#openManual` button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManualGate {
    pub url: String,
}

impl ManualGate {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    pub fn on_click(&self, identity: &dyn IdentityClient, login_path: &str) -> Navigation {
        match identity.current_user() {
            Some(user) => {
                diagnostics::log_debug!("Opening house manual for {email}", email: user.email.as_str());
                Navigation::Open(self.url.clone())
            }
            None => Navigation::Login(format!(
                "{}?next={}",
                login_path,
                encode_query_value(&self.url)
            )),
        }
    }
}
