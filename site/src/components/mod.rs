//! Leptos UI components for the FreeFlow site.
//!
//! Sections are parameterless components rendering fixed content. The
//! tooltip widget is the one component bound to data passed in from outside.
//!
//! # Component Hierarchy
//!
//! ```text
//! SiteDocument
//! ├── Navbar
//! └── main
//!     ├── LandingPage
//!     │   ├── Hero
//!     │   ├── Features
//!     │   ├── Pricing
//!     │   ├── Testimonials
//!     │   ├── CallToAction
//!     │   ├── Footer
//!     │   │   └── DeveloperTooltip
//!     │   │       └── AnimatedTooltip (DEVELOPERS)
//!     │   └── TextHoverBanner
//!     │       └── TextHoverEffect
//!     └── DashboardPage
//! ```
//!
//! # Usage
//!
//! Pages are normally rendered via [`crate::render_route`], but components
//! can be used directly:
//!
//! ```rust,ignore
//! use leptos::prelude::*;
//! use freeflow_site::components::AnimatedTooltip;
//! use freeflow_site::content::DEVELOPERS;
//!
//! view! { <AnimatedTooltip items=DEVELOPERS /> }
//! ```

mod cta;
mod document;
mod features;
mod footer;
mod hero;
mod icons;
mod navbar;
mod pages;
mod pricing;
mod testimonials;
mod text_hover;
mod tooltip;

pub use cta::CallToAction;
pub use document::{SiteDocument, SITE_TITLE};
pub use features::Features;
pub use footer::Footer;
pub use hero::Hero;
pub use icons::*;
pub use navbar::Navbar;
pub use pages::{DashboardPage, LandingPage};
pub use pricing::Pricing;
pub use testimonials::Testimonials;
pub use text_hover::{TextHoverBanner, TextHoverEffect};
pub use tooltip::{AnimatedTooltip, DeveloperTooltip};
