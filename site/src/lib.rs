//! # freeflow-site
//!
//! Server-side rendered pages for the FreeFlow landing site.
//!
//! Pages are composed from small Leptos components and rendered straight to
//! HTML strings with Leptos' SSR renderer. No reactive runtime or hydration is
//! involved.
//!
//! ## Quick Start
//!
//! ```rust
//! use freeflow_site::{render_route, Route, StaticIdentity};
//!
//! let html = render_route(Route::Dashboard, &StaticIdentity::user("user_abc123"));
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! assert!(html.contains("user_abc123"));
//! ```
//!
//! ## Architecture
//!
//! - [`types`] - Content data structures
//! - [`content`] - Compiled-in content (developer credits, navigation, plans)
//! - [`identity`] - The dashboard's view of the signed-in user
//! - [`effects`] - Opaque presentational effects (hover text, tooltips)
//! - [`components`] - Leptos UI components
//! - [`styles`] - CSS constants
//!
//! ## Leptos 0.8 SSR
//!
//! ```rust,ignore
//! use leptos::tachys::view::RenderHtml;
//!
//! let view = view! { <MyComponent /> };
//! let html: String = view.to_html();
//! ```

#![recursion_limit = "256"]

pub mod components;
pub mod content;
pub mod effects;
pub mod identity;
pub mod styles;
pub mod types;

pub use identity::{DetachedIdentity, Identity, IdentityError, IdentityLookup, StaticIdentity};

use components::{DashboardPage, LandingPage, SiteDocument};
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use tracing::debug;

/// Pages served by the site.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Route {
    Landing,
    Dashboard,
}

impl Route {
    pub const ALL: [Route; 2] = [Route::Landing, Route::Dashboard];

    /// Canonical request path.
    pub fn path(self) -> &'static str {
        match self {
            Route::Landing => "/",
            Route::Dashboard => "/page/dashboard",
        }
    }

    /// Route for a request path. A single trailing slash is ignored.
    pub fn from_path(path: &str) -> Option<Self> {
        let trimmed = match path.strip_suffix('/') {
            Some(rest) if !rest.is_empty() => rest,
            _ => path,
        };
        Self::ALL.into_iter().find(|route| route.path() == trimmed)
    }
}

/// Render the landing page as a complete HTML document.
pub fn render_landing() -> String {
    debug!(route = Route::Landing.path(), "rendering page");
    let doc = view! {
        <SiteDocument>
            <LandingPage />
        </SiteDocument>
    };
    finish(doc.to_html())
}

/// Render the dashboard for whoever `lookup` reports.
///
/// `lookup` is queried exactly once. A failing lookup renders the signed-out
/// state instead of an error page.
pub fn render_dashboard(lookup: &dyn IdentityLookup) -> String {
    let identity = Identity::resolve(lookup);
    debug!(
        route = Route::Dashboard.path(),
        signed_in = identity.user_id().is_some(),
        "rendering page"
    );
    let doc = view! {
        <SiteDocument title="Dashboard | FreeFlow">
            <DashboardPage identity=identity />
        </SiteDocument>
    };
    finish(doc.to_html())
}

/// Render `route`. Only the dashboard consults `lookup`.
pub fn render_route(route: Route, lookup: &dyn IdentityLookup) -> String {
    match route {
        Route::Landing => render_landing(),
        Route::Dashboard => render_dashboard(lookup),
    }
}

fn finish(html: String) -> String {
    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::ABSENT_PLACEHOLDER;
    use pretty_assertions::assert_eq;
    use std::cell::Cell;

    struct CountingLookup {
        calls: Cell<u32>,
        answer: Result<Option<String>, IdentityError>,
    }

    impl CountingLookup {
        fn new(answer: Result<Option<String>, IdentityError>) -> Self {
            Self { calls: Cell::new(0), answer }
        }
    }

    impl IdentityLookup for CountingLookup {
        fn current_user_id(&self) -> Result<Option<String>, IdentityError> {
            self.calls.set(self.calls.get() + 1);
            self.answer.clone()
        }
    }

    #[test]
    fn renders_landing_document() {
        let html = render_landing();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<html"));
        assert!(html.contains("FreeFlow - Peer to Peer Communication"));
        assert!(html.contains(r#"data-component="navbar""#));
        assert!(html.contains(r#"data-page="landing""#));
    }

    #[test]
    fn navbar_sits_outside_the_landing_container() {
        let html = render_landing();
        let navbar = html.find(r#"data-component="navbar""#).unwrap_or(usize::MAX);
        let landing = html.find(r#"data-page="landing""#).unwrap_or(0);

        assert!(navbar < landing);
    }

    #[test]
    fn dashboard_renders_identity_from_lookup() {
        let html = render_dashboard(&StaticIdentity::user("user_abc123"));

        assert!(html.contains(r#"<span data-role="user-id">user_abc123</span>"#));
        assert!(html.contains("Dashboard | FreeFlow"));
    }

    #[test]
    fn dashboard_queries_lookup_exactly_once() {
        let lookup = CountingLookup::new(Ok(Some("user_abc123".into())));
        render_dashboard(&lookup);

        assert_eq!(lookup.calls.get(), 1);
    }

    #[test]
    fn failing_lookup_still_renders_dashboard() {
        let lookup = CountingLookup::new(Err(IdentityError::OutsideRequestContext));
        let html = render_dashboard(&lookup);

        assert_eq!(lookup.calls.get(), 1);
        assert!(html.contains("Welcome to your Dashboard"));
        assert!(html.contains(ABSENT_PLACEHOLDER));
        assert!(!html.contains("undefined"));
    }

    #[test]
    fn blank_user_id_renders_placeholder() {
        let html = render_dashboard(&StaticIdentity::user("   "));

        assert!(html.contains(&format!(r#"<span data-role="user-id">{ABSENT_PLACEHOLDER}</span>"#)));
    }

    #[test]
    fn landing_ignores_identity() {
        let lookup = CountingLookup::new(Ok(Some("user_abc123".into())));
        let html = render_route(Route::Landing, &lookup);

        assert_eq!(lookup.calls.get(), 0);
        assert!(!html.contains("user_abc123"));
    }

    #[test]
    fn route_paths_round_trip() {
        assert_eq!(Route::from_path("/"), Some(Route::Landing));
        assert_eq!(Route::from_path("/page/dashboard"), Some(Route::Dashboard));
        assert_eq!(Route::from_path("/page/dashboard/"), Some(Route::Dashboard));
        assert_eq!(Route::from_path("/pricing"), None);
        assert_eq!(Route::from_path(""), None);
        for route in Route::ALL {
            assert_eq!(Route::from_path(route.path()), Some(route));
        }
    }
}
