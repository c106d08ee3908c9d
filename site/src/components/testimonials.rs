use leptos::prelude::*;

use super::{Icon, ICON_QUOTE};
use crate::content::TESTIMONIALS;
use crate::types::Testimonial;

#[component]
pub fn Testimonials() -> impl IntoView {
    view! {
        <section class="testimonials" data-section="testimonials">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"What Our Users Say"</h2>
                    <p class="section-description">
                        "Thousands of teams and individuals rely on FreeFlow for their communication needs. "
                        "Here is what some of them have to say:"
                    </p>
                </div>
                // Slide rotation runs client-side; the first slide starts active
                <div class="carousel" data-effect="carousel" data-interval-ms="8000">
                    <div class="carousel-track">
                        {TESTIMONIALS.iter().enumerate().map(|(idx, testimonial)| {
                            view! { <Slide testimonial=testimonial active={idx == 0} /> }
                        }).collect::<Vec<_>>()}
                    </div>
                    <div class="carousel-controls">
                        <button class="carousel-prev" aria-label="Previous testimonial">"←"</button>
                        <div class="carousel-dots">
                            {(0..TESTIMONIALS.len()).map(|idx| {
                                let class = if idx == 0 { "carousel-dot active" } else { "carousel-dot" };
                                view! {
                                    <button
                                        class=class
                                        data-slide=idx.to_string()
                                        aria-label=format!("Go to testimonial {}", idx + 1)
                                    ></button>
                                }
                            }).collect::<Vec<_>>()}
                        </div>
                        <button class="carousel-next" aria-label="Next testimonial">"→"</button>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn Slide(testimonial: &'static Testimonial, active: bool) -> impl IntoView {
    let class = if active { "testimonial-slide active" } else { "testimonial-slide" };
    let avatar = match testimonial.avatar.src() {
        Some(src) => view! {
            <img class="testimonial-avatar" src=src alt=testimonial.name />
        }
        .into_any(),
        None => view! { <div class="testimonial-avatar placeholder"></div> }.into_any(),
    };

    view! {
        <figure class=class>
            {avatar}
            <Icon path=ICON_QUOTE size="32" class="testimonial-quote-icon" />
            <blockquote class="testimonial-quote">{testimonial.quote}</blockquote>
            <figcaption class="testimonial-author">
                <span class="testimonial-name">{testimonial.name}</span>
                <span class="testimonial-role">
                    {format!("{}, {}", testimonial.title, testimonial.company)}
                </span>
            </figcaption>
        </figure>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn renders_all_slides_with_first_active() {
        let html = view! { <Testimonials /> }.to_html();

        assert_eq!(html.matches("<figure").count(), TESTIMONIALS.len());
        assert_eq!(html.matches("testimonial-slide active").count(), 1);
        assert_eq!(html.matches("data-slide=").count(), TESTIMONIALS.len());

        let first = html.find("Sarah Johnson").unwrap_or(usize::MAX);
        let last = html.find("Jessica Winters").unwrap_or(0);
        assert!(first < last);
        assert!(html.contains("Lead Developer, Quantum Solutions"));
    }
}
