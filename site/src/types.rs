//! Data types for the site's compiled-in content.
//!
//! Everything here is built from `&'static str` so the whole content set can
//! live in `const` items (see [`crate::content`]) and be handed to components
//! by reference. Nothing is mutated after compilation.
//!
//! # Example
//!
//! ```rust
//! use freeflow_site::types::{EntityRecord, ImageRef};
//!
//! const CREDITS: &[EntityRecord] = &[EntityRecord {
//!     id: 7,
//!     name: "Ada",
//!     designation: "Maintainer",
//!     image: ImageRef::Remote("https://example.com/ada.png"),
//! }];
//!
//! assert_eq!(CREDITS[0].image.src(), Some("https://example.com/ada.png"));
//! ```

/// Reference to an image shown by a component.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageRef {
    /// Asset bundled with the site, addressed by an absolute public path.
    Asset(&'static str),
    /// Image hosted elsewhere, addressed by an `http(s)` URL.
    Remote(&'static str),
}

impl ImageRef {
    /// The `src` to emit, or `None` when the reference is unusable.
    ///
    /// Callers render a placeholder for `None` instead of a broken `<img>`.
    pub fn src(&self) -> Option<&'static str> {
        match *self {
            ImageRef::Asset(path) => {
                let path = path.trim();
                (path.len() > 1 && path.starts_with('/') && !path.contains(char::is_whitespace))
                    .then_some(path)
            }
            ImageRef::Remote(url) => {
                let url = url.trim();
                let rest = url
                    .strip_prefix("https://")
                    .or_else(|| url.strip_prefix("http://"))?;
                (!rest.is_empty() && !rest.contains(char::is_whitespace)).then_some(url)
            }
        }
    }
}

/// One subject of the developer credits tooltip.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EntityRecord {
    /// Stable identifier, unique within its list
    pub id: u32,
    pub name: &'static str,
    /// Role shown under the name
    pub designation: &'static str,
    pub image: ImageRef,
}

impl EntityRecord {
    /// Up to two uppercase initials, used when the image cannot be shown.
    pub fn initials(&self) -> String {
        let initials: String = self
            .name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect();
        if initials.is_empty() {
            "?".to_string()
        } else {
            initials
        }
    }
}

/// A navigation entry: visible label and static route target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub target: &'static str,
}

/// Feature card on the landing page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Feature {
    /// SVG path data for the card icon
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

/// Price of a plan for each billing period.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Price {
    /// Dollars per month, billed monthly or annually.
    Dollars { monthly: u32, annual: u32 },
    /// Negotiated with sales.
    Custom,
}

/// Pricing plan card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Plan {
    pub name: &'static str,
    pub price: Price,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub limitations: &'static [&'static str],
    /// Call-to-action label
    pub cta: &'static str,
    pub href: &'static str,
    /// Highlighted as "Most Popular"
    pub popular: bool,
}

/// Customer quote for the testimonials carousel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Testimonial {
    pub name: &'static str,
    pub title: &'static str,
    pub company: &'static str,
    pub quote: &'static str,
    pub avatar: ImageRef,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asset_paths_must_be_absolute() {
        assert_eq!(ImageRef::Asset("/photos/sagar.jpg").src(), Some("/photos/sagar.jpg"));
        assert_eq!(ImageRef::Asset("photos/sagar.jpg").src(), None);
        assert_eq!(ImageRef::Asset("/").src(), None);
        assert_eq!(ImageRef::Asset("").src(), None);
        assert_eq!(ImageRef::Asset("/my photo.jpg").src(), None);
    }

    #[test]
    fn remote_refs_need_http_scheme_and_host() {
        assert_eq!(
            ImageRef::Remote("https://images.example.com/a.png").src(),
            Some("https://images.example.com/a.png")
        );
        assert_eq!(ImageRef::Remote("http://x.io/a").src(), Some("http://x.io/a"));
        assert_eq!(ImageRef::Remote("https://").src(), None);
        assert_eq!(ImageRef::Remote("ftp://x.io/a").src(), None);
        assert_eq!(ImageRef::Remote("not a url").src(), None);
    }

    #[test]
    fn initials_fall_back_to_question_mark() {
        let record = EntityRecord {
            id: 1,
            name: "sagar suryakant waghmare",
            designation: "",
            image: ImageRef::Asset(""),
        };
        assert_eq!(record.initials(), "SS");

        let nameless = EntityRecord { name: "   ", ..record };
        assert_eq!(nameless.initials(), "?");
    }
}
