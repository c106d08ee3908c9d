use leptos::prelude::*;

use super::{Icon, ICON_CHECK};
use crate::content::CTA_PERKS;

#[component]
pub fn CallToAction() -> impl IntoView {
    view! {
        <section class="cta" data-section="cta">
            <div class="cta-decor" aria-hidden="true">
                <div class="cta-orb cta-orb-top"></div>
                <div class="cta-orb cta-orb-bottom"></div>
            </div>
            <div class="container">
                <h2 class="cta-title">"Ready to Transform Your Communication?"</h2>
                <p class="cta-description">
                    "Join thousands of teams who have already made the switch to seamless, "
                    "secure peer-to-peer communication."
                </p>
                <div class="cta-actions">
                    <a href="/signin" class="btn btn-secondary">"Sign In"</a>
                    <a href="/signup" class="btn btn-light">"Join Now Free"</a>
                </div>
                <ul class="cta-perks">
                    {CTA_PERKS.iter().map(|perk| view! {
                        <li class="cta-perk">
                            <Icon path=ICON_CHECK size="20" />
                            <span>{*perk}</span>
                        </li>
                    }).collect::<Vec<_>>()}
                </ul>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn lists_every_perk_and_both_actions() {
        let html = view! { <CallToAction /> }.to_html();

        assert_eq!(html.matches(r#"class="cta-perk""#).count(), CTA_PERKS.len());
        assert!(html.contains(r#"href="/signin""#));
        assert!(html.contains(r#"href="/signup""#));
    }
}
