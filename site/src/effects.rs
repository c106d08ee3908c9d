//! Presentational effects behind minimal render interfaces.
//!
//! Components never depend on how a hover or tooltip effect works. They ask an
//! effect to render its subtree and place the result. The defaults below emit
//! plain markup plus class hooks for the stylesheet; any other implementation
//! can be swapped in through the component props.

use leptos::prelude::*;

/// Decorative rendering of a short piece of text.
pub trait TextEffect: Send + Sync {
    fn render(&self, text: &str) -> AnyView;
}

/// Floating label attached to an element on hover.
pub trait TooltipEffect: Send + Sync {
    fn render(&self, name: &str, designation: &str) -> AnyView;
}

/// Outlined SVG lettering with a second stroke layer revealed on hover.
#[derive(Clone, Copy, Debug, Default)]
pub struct StrokeTextEffect;

pub static STROKE_TEXT: StrokeTextEffect = StrokeTextEffect;

impl TextEffect for StrokeTextEffect {
    fn render(&self, text: &str) -> AnyView {
        let outline = text.to_owned();
        let reveal = text.to_owned();
        view! {
            <svg
                xmlns="http://www.w3.org/2000/svg"
                width="100%"
                height="100%"
                viewBox="0 0 300 100"
                class="text-hover-svg"
                role="img"
                aria-label=text.to_owned()
            >
                <text
                    x="50%"
                    y="50%"
                    text-anchor="middle"
                    dominant-baseline="middle"
                    stroke-width="0.3"
                    class="text-hover-outline"
                >
                    {outline}
                </text>
                <text
                    x="50%"
                    y="50%"
                    text-anchor="middle"
                    dominant-baseline="middle"
                    stroke-width="0.3"
                    class="text-hover-reveal"
                >
                    {reveal}
                </text>
            </svg>
        }
        .into_any()
    }
}

/// Card positioned above its anchor, shown by the stylesheet on hover/focus.
#[derive(Clone, Copy, Debug, Default)]
pub struct FloatingTooltip;

pub static FLOATING_TOOLTIP: FloatingTooltip = FloatingTooltip;

impl TooltipEffect for FloatingTooltip {
    fn render(&self, name: &str, designation: &str) -> AnyView {
        let name = name.to_owned();
        let designation = designation.to_owned();
        view! {
            <div class="tooltip-card" role="tooltip">
                <p class="tooltip-name">{name}</p>
                <p class="tooltip-designation">{designation}</p>
            </div>
        }
        .into_any()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn stroke_text_renders_both_layers() {
        let html = STROKE_TEXT.render("FREEFLOW").to_html();

        assert!(html.contains("<svg"));
        assert_eq!(html.matches(">FREEFLOW</text>").count(), 2);
        assert!(html.contains("text-hover-reveal"));
    }

    #[test]
    fn floating_tooltip_exposes_name_and_designation() {
        let html = FLOATING_TOOLTIP.render("Atharva", "Full Stack Developer").to_html();

        assert!(html.contains(r#"<p class="tooltip-name">Atharva</p>"#));
        assert!(html.contains(r#"<p class="tooltip-designation">Full Stack Developer</p>"#));
    }
}
