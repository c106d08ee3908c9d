use leptos::prelude::*;

use super::Icon;
use crate::content::FEATURES;

#[component]
pub fn Features() -> impl IntoView {
    view! {
        <section id="features" class="features" data-section="features">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"Powerful Features For Seamless Communication"</h2>
                    <p class="section-description">
                        "Our platform is designed with simplicity and reliability in mind, "
                        "offering all the tools you need to connect effectively."
                    </p>
                </div>
                <div class="features-grid">
                    {FEATURES.iter().enumerate().map(|(idx, feature)| {
                        view! {
                            <FeatureCard
                                icon=feature.icon
                                title=feature.title
                                description=feature.description
                                delay=idx
                            />
                        }
                    }).collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn FeatureCard(
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    /// Position in the grid, drives the staggered reveal
    delay: usize,
) -> impl IntoView {
    let style = format!("transition-delay: {}ms;", delay * 100);
    view! {
        <article class="feature-card" style=style>
            <div class="feature-icon">
                <Icon path=icon />
            </div>
            <h3 class="feature-title">{title}</h3>
            <p class="feature-description">{description}</p>
        </article>
    }
}
