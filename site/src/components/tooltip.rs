//! Animated tooltip row bound to a list of entity records.

use leptos::prelude::*;

use crate::content::DEVELOPERS;
use crate::effects::{TooltipEffect, FLOATING_TOOLTIP};
use crate::types::EntityRecord;

/// One hoverable avatar per record, in list order.
///
/// An empty list renders an empty row. Records whose image cannot be used get
/// an initials placeholder instead.
#[component]
pub fn AnimatedTooltip(
    items: &'static [EntityRecord],
    /// Tooltip presentation; defaults to [`FLOATING_TOOLTIP`]
    #[prop(optional)]
    effect: Option<&'static dyn TooltipEffect>,
) -> impl IntoView {
    let effect = effect.unwrap_or(&FLOATING_TOOLTIP);

    view! {
        <div class="tooltip-row" data-count=items.len().to_string()>
            {items.iter().map(|record| {
                view! {
                    <div class="tooltip-item" data-tooltip-id=record.id.to_string() tabindex="0">
                        <div class="tooltip-popover">
                            {effect.render(record.name, record.designation)}
                        </div>
                        <Avatar record=record />
                    </div>
                }
            }).collect::<Vec<_>>()}
        </div>
    }
}

#[component]
fn Avatar(record: &'static EntityRecord) -> impl IntoView {
    match record.image.src() {
        Some(src) => view! {
            <img class="tooltip-avatar" src=src alt=record.name width="56" height="56" loading="lazy" />
        }
        .into_any(),
        None => view! {
            <span class="tooltip-avatar placeholder" data-image="missing" aria-label=record.name>
                {record.initials()}
            </span>
        }
        .into_any(),
    }
}

/// Developer credits shown in the footer.
#[component]
pub fn DeveloperTooltip() -> impl IntoView {
    view! {
        <div class="developer-tooltip">
            <AnimatedTooltip items=DEVELOPERS />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ImageRef;
    use leptos::tachys::view::RenderHtml;

    const TEAM: &[EntityRecord] = &[
        EntityRecord {
            id: 10,
            name: "Grace",
            designation: "Compiler Engineer",
            image: ImageRef::Remote("https://example.com/grace.png"),
        },
        EntityRecord {
            id: 11,
            name: "Linus Torvald",
            designation: "Kernel Maintainer",
            image: ImageRef::Asset("kernel.png"),
        },
        EntityRecord {
            id: 12,
            name: "Barbara",
            designation: "Systems Architect",
            image: ImageRef::Remote(""),
        },
        EntityRecord {
            id: 13,
            name: "Ken",
            designation: "Unix Author",
            image: ImageRef::Asset("/ken.jpg"),
        },
    ];

    fn render(items: &'static [EntityRecord]) -> String {
        view! { <AnimatedTooltip items=items /> }.to_html()
    }

    #[test]
    fn renders_one_element_per_record_in_order() {
        let html = render(TEAM);

        assert_eq!(html.matches("data-tooltip-id=").count(), TEAM.len());
        let positions: Vec<usize> = ["10", "11", "12", "13"]
            .iter()
            .map(|id| html.find(&format!(r#"data-tooltip-id="{id}""#)).unwrap_or(usize::MAX))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{positions:?}");
    }

    #[test]
    fn empty_list_renders_no_elements() {
        let html = render(&[]);

        assert!(html.contains("tooltip-row"));
        assert_eq!(html.matches("data-tooltip-id=").count(), 0);
    }

    #[test]
    fn broken_images_degrade_to_placeholders() {
        let html = render(TEAM);

        assert_eq!(html.matches(r#"data-image="missing""#).count(), 2);
        assert!(html.contains(">LT</span>"));
        assert!(html.contains(">B</span>"));
        // Records after the broken ones still render normally
        assert!(html.contains(r#"src="/ken.jpg""#));
        assert!(html.contains(">Unix Author</p>"));
    }

    #[test]
    fn developer_credits_expose_name_and_designation() {
        let html = view! { <DeveloperTooltip /> }.to_html();

        assert_eq!(html.matches("data-tooltip-id=").count(), 3);
        assert!(html.contains(">Sagar Suryakant Waghmare</p>"));
        assert!(html.contains(">Full Stack Developer</p>"));
        assert!(html.contains(">Java Backend Developer</p>"));

        let sagar = html.find("Sagar Suryakant Waghmare").unwrap_or(usize::MAX);
        let atharva = html.find("Atharva").unwrap_or(usize::MAX);
        let aakash = html.find("Aakash").unwrap_or(usize::MAX);
        assert!(sagar < atharva && atharva < aakash);
    }

    struct BadgeTooltip;

    impl TooltipEffect for BadgeTooltip {
        fn render(&self, name: &str, designation: &str) -> AnyView {
            let label = format!("{name} / {designation}");
            view! { <span class="badge-tooltip">{label}</span> }.into_any()
        }
    }

    static BADGE: BadgeTooltip = BadgeTooltip;

    #[test]
    fn tooltip_effect_is_substitutable() {
        let first: &'static [EntityRecord] = &TEAM[..1];
        let badge: &'static dyn TooltipEffect = &BADGE;
        let html = view! { <AnimatedTooltip items=first effect=badge /> }.to_html();

        assert!(html.contains(">Grace / Compiler Engineer</span>"));
        assert!(!html.contains("tooltip-card"));
    }
}
