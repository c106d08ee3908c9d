use leptos::prelude::*;

use crate::content::BANNER_TEXT;
use crate::effects::{TextEffect, STROKE_TEXT};

/// Renders `text` through a [`TextEffect`].
#[component]
pub fn TextHoverEffect(
    text: &'static str,
    /// Defaults to [`STROKE_TEXT`]
    #[prop(optional)]
    effect: Option<&'static dyn TextEffect>,
) -> impl IntoView {
    let effect = effect.unwrap_or(&STROKE_TEXT);
    view! {
        <div class="text-hover" data-effect="text-hover">
            {effect.render(text)}
        </div>
    }
}

/// Closing banner of the landing page.
#[component]
pub fn TextHoverBanner() -> impl IntoView {
    view! {
        <section class="text-hover-banner" data-section="text-hover-banner">
            <div class="text-hover-inner">
                <TextHoverEffect text=BANNER_TEXT />
            </div>
        </section>
    }
}
