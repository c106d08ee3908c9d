//! Inline line-art SVG icons.
//!
//! Icons are stroke-only paths drawn on a 256x256 grid, so a single `Icon`
//! component covers every glyph on the site.

use leptos::prelude::*;

/// Renders an inline SVG icon from a path data string.
///
/// # Props
///
/// * `path` - SVG path data (d attribute)
/// * `size` - Icon size in pixels (default: "24")
/// * `class` - Additional CSS classes (default: "")
///
/// # Example
///
/// ```rust,ignore
/// view! { <Icon path=ICON_CHECK size="16" /> }
/// ```
#[component]
pub fn Icon(
    /// SVG path data (the `d` attribute value)
    #[prop(into)]
    path: &'static str,
    /// Icon size in pixels
    #[prop(default = "24")]
    size: &'static str,
    /// Additional CSS class names
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width=size
            height=size
            fill="none"
            stroke="currentColor"
            stroke-width="16"
            stroke-linecap="round"
            stroke-linejoin="round"
            viewBox="0 0 256 256"
            class=class
            aria-hidden="true"
        >
            <path d=path></path>
        </svg>
    }
}

// =============================================================================
// Glyphs
// =============================================================================

pub const ICON_VIDEO: &str = "M32,72H168V184H32ZM168,112l56-32V176l-56-32";

pub const ICON_CHAT: &str = "M40,48H216V176H104L56,216V176H40Z";

pub const ICON_SHIELD: &str = "M128,24L216,56V120c0,56-40,96-88,112C80,216,40,176,40,120V56Z";

pub const ICON_DOWNLOAD: &str = "M128,32V160M80,112l48,48,48-48M40,200H216";

pub const ICON_LIGHTNING: &str = "M152,16L56,144h64l-16,96,96-128H136Z";

pub const ICON_GLOBE: &str = "M128,24a104,104,0,1,0,0,208a104,104,0,1,0,0-208ZM24,128H232M128,24c-32,32-32,176,0,208M128,24c32,32,32,176,0,208";

pub const ICON_PHONE: &str = "M72,24H184V232H72ZM112,200h32";

pub const ICON_USERS: &str = "M96,152a48,48,0,1,0,0-96a48,48,0,1,0,0,96ZM16,216c16-40,144-40,160,0M176,56a48,48,0,0,1,0,96M200,176c24,8,40,24,40,40";

/// Included-feature tick
pub const ICON_CHECK: &str = "M40,136l56,56L216,72";

/// Plan limitation marker
pub const ICON_ALERT: &str = "M128,24a104,104,0,1,0,0,208a104,104,0,1,0,0-208ZM128,80v56M128,172v4";

pub const ICON_QUOTE: &str = "M48,128H104V184H48ZM48,128c0-40,16-56,56-64M144,128H200V184H144ZM144,128c0-40,16-56,56-64";

pub const ICON_HEART: &str = "M128,216S24,160,24,96A52,52,0,0,1,128,72,52,52,0,0,1,232,96C232,160,128,216,128,216Z";

/// Source code brackets, used for the repository link
pub const ICON_CODE: &str = "M80,64L24,128l56,64M176,64l56,64-56,64";

/// Hamburger menu
pub const ICON_MENU: &str = "M40,64H216M40,128H216M40,192H216";
