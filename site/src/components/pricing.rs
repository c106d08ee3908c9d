//! Pricing plans section.
//!
//! Both billing periods are rendered; the annual figure is marked active and
//! the client-side toggle swaps visibility.

use leptos::prelude::*;

use super::{Icon, ICON_ALERT, ICON_CHECK};
use crate::content::PLANS;
use crate::types::{Plan, Price};

#[component]
pub fn Pricing() -> impl IntoView {
    view! {
        <section id="pricing" class="pricing" data-section="pricing">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"Plans For Everyone"</h2>
                    <p class="section-description">
                        "Choose the plan that works best for you and your team. "
                        "All plans come with a 14-day money-back guarantee."
                    </p>
                    <div class="billing-toggle" data-billing-default="annual">
                        <span class="billing-label" data-billing="monthly">"Monthly"</span>
                        <span class="billing-switch" role="switch" aria-checked="true"></span>
                        <span class="billing-label active" data-billing="annual">"Annual"</span>
                        <span class="badge badge-save">"Save 25%"</span>
                    </div>
                </div>
                <div class="pricing-grid">
                    {PLANS.iter().map(|plan| view! { <PlanCard plan=plan /> }).collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn PlanCard(plan: &'static Plan) -> impl IntoView {
    let class = if plan.popular { "plan-card popular" } else { "plan-card" };
    let button_class = if plan.popular { "btn btn-primary" } else { "btn btn-outline" };

    view! {
        <article class=class data-plan=plan.name>
            {plan.popular.then(|| view! { <div class="popular-badge">"Most Popular"</div> })}
            <header class="plan-header">
                <h3 class="plan-name">{plan.name}</h3>
                <p class="plan-description">{plan.description}</p>
            </header>
            <div class="plan-price">
                <PriceTag price=plan.price />
            </div>
            <div class="plan-features">
                <p class="plan-list-title">"What's included:"</p>
                <ul>
                    {plan.features.iter().map(|feature| view! {
                        <li class="plan-feature">
                            <Icon path=ICON_CHECK size="16" class="icon-ok" />
                            <span>{*feature}</span>
                        </li>
                    }).collect::<Vec<_>>()}
                </ul>
            </div>
            {(!plan.limitations.is_empty()).then(|| view! {
                <div class="plan-limitations">
                    <p class="plan-list-title">"Limitations:"</p>
                    <ul>
                        {plan.limitations.iter().map(|limitation| view! {
                            <li class="plan-limitation">
                                <Icon path=ICON_ALERT size="16" class="icon-muted" />
                                <span>{*limitation}</span>
                            </li>
                        }).collect::<Vec<_>>()}
                    </ul>
                </div>
            })}
            <footer class="plan-footer">
                <a href=plan.href class=button_class>{plan.cta}</a>
            </footer>
        </article>
    }
}

#[component]
fn PriceTag(price: Price) -> impl IntoView {
    match price {
        Price::Dollars { monthly, annual } => view! {
            <span class="price" data-billing="monthly">
                <span class="price-amount">{format!("${monthly}")}</span>
                <span class="price-period">"/mo"</span>
            </span>
            <span class="price active" data-billing="annual">
                <span class="price-amount">{format!("${annual}")}</span>
                <span class="price-period">"/mo, billed annually"</span>
            </span>
        }
        .into_any(),
        Price::Custom => view! {
            <span class="price active">
                <span class="price-amount">"Custom"</span>
            </span>
        }
        .into_any(),
    }
}
