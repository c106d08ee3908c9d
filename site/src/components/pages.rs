//! Page bodies selected by route.

use leptos::prelude::*;

use super::{CallToAction, Features, Footer, Hero, Pricing, Testimonials, TextHoverBanner};
use crate::identity::Identity;

/// Home view: the landing sections in narrative order.
#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class="landing" data-page="landing">
            <Hero />
            <Features />
            <Pricing />
            <Testimonials />
            <CallToAction />
            <Footer />
            <TextHoverBanner />
        </div>
    }
}

/// Dashboard view for an already-resolved identity.
#[component]
pub fn DashboardPage(identity: Identity) -> impl IntoView {
    let signed_in = identity.user_id().is_some();
    let text = identity.display_text().to_owned();
    let class = if signed_in { "dashboard-user" } else { "dashboard-user absent" };

    view! {
        <div class="dashboard" data-page="dashboard">
            <h1 class="dashboard-title">"Welcome to your Dashboard"</h1>
            <p class=class>
                "User ID: "
                <span data-role="user-id">{text}</span>
            </p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::ABSENT_PLACEHOLDER;
    use leptos::tachys::view::RenderHtml;
    use pretty_assertions::assert_eq;

    /// `data-section` markers in document order.
    fn section_markers(html: &str) -> Vec<String> {
        html.split(r#"data-section=""#)
            .skip(1)
            .filter_map(|rest| rest.split('"').next())
            .map(str::to_owned)
            .collect()
    }

    #[test]
    fn landing_sections_render_in_fixed_order() {
        let html = view! { <LandingPage /> }.to_html();

        assert_eq!(
            section_markers(&html),
            vec![
                "hero",
                "features",
                "pricing",
                "testimonials",
                "cta",
                "footer",
                "text-hover-banner",
            ]
        );
        assert_eq!(html.matches(r#"data-page="landing""#).count(), 1);
    }

    #[test]
    fn landing_footer_carries_developer_credits() {
        let html = view! { <LandingPage /> }.to_html();

        assert_eq!(html.matches("data-tooltip-id=").count(), 3);
    }

    #[test]
    fn dashboard_shows_user_id() {
        let identity = Identity::User("user_abc123".into());
        let html = view! { <DashboardPage identity=identity /> }.to_html();

        assert!(html.contains("Welcome to your Dashboard"));
        assert!(html.contains(r#"<span data-role="user-id">user_abc123</span>"#));
    }

    #[test]
    fn dashboard_shows_placeholder_when_absent() {
        let html = view! { <DashboardPage identity=Identity::Absent /> }.to_html();

        assert!(html.contains(&format!(r#"<span data-role="user-id">{ABSENT_PLACEHOLDER}</span>"#)));
        assert!(html.contains("User ID: "));
        assert!(!html.contains("undefined"));
        assert!(!html.contains("None"));
    }
}
