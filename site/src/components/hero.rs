use leptos::prelude::*;

use super::{Icon, ICON_VIDEO};
use crate::content::BANNER_TEXT;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero" data-section="hero">
            <div class="container">
                <div class="hero-grid">
                    <div class="hero-content">
                        <h1 class="hero-title">
                            <span class="hero-title-accent">{BANNER_TEXT}</span>
                            <br />
                            "Seamless Peer-to-Peer Communication"
                        </h1>
                        <p class="hero-description">
                            "Connect with anyone, anywhere through secure video calls and text chat - "
                            "no downloads, no hassle, just communication that flows freely."
                        </p>
                        <div class="hero-actions">
                            <a href="/p2p" class="btn btn-primary">"Go Private"</a>
                            <a href="/sign-in" class="btn btn-outline">
                                <Icon path=ICON_VIDEO size="20" class="btn-icon" />
                                "Video Call"
                            </a>
                            <a href="/#features" class="btn btn-outline">"Learn More"</a>
                        </div>
                        <p class="hero-fineprint">
                            "No credit card required. Free forever for personal use."
                        </p>
                    </div>
                    <ConnectionAnimation />
                </div>
            </div>
        </section>
    }
}

/// Slot for the peer-connection animation; the motion itself is client-side.
#[component]
fn ConnectionAnimation() -> impl IntoView {
    view! {
        <div class="hero-visual">
            <div class="hero-glow hero-glow-top"></div>
            <div class="hero-glow hero-glow-bottom"></div>
            <div class="connection-animation" data-effect="connection">
                <span class="peer peer-a"></span>
                <span class="peer-link"></span>
                <span class="peer peer-b"></span>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn actions_link_to_their_targets() {
        let html = view! { <Hero /> }.to_html();

        for (target, label) in [
            ("/p2p", "Go Private"),
            ("/sign-in", "Video Call"),
            ("/#features", "Learn More"),
        ] {
            let start = html
                .find(&format!(r#"href="{target}""#))
                .unwrap_or_else(|| panic!("missing action {target}"));
            let end = start + html[start..].find("</a>").unwrap_or(0);
            assert!(html[start..end].contains(label), "{target} should read {label}");
        }
        assert!(html.contains(BANNER_TEXT));
        assert!(html.contains(r#"data-effect="connection""#));
    }
}
