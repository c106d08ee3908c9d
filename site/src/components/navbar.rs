use leptos::prelude::*;

use super::{Icon, ICON_MENU};
use crate::content::{BRAND, LOGO_SRC, NAV_CTA, NAV_LINKS};

#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <nav class="navbar" data-component="navbar">
            <div class="navbar-inner">
                <a href="/" class="navbar-logo">
                    <img src=LOGO_SRC alt="FreeFlow Logo" width="50" height="50" />
                    <span class="navbar-title">{BRAND}</span>
                </a>

                // Menu state is toggled by the stylesheet/client script
                <button class="hamburger-menu" aria-label="Toggle navigation menu">
                    <Icon path=ICON_MENU />
                </button>

                <div class="navbar-links">
                    {NAV_LINKS.iter().map(|link| {
                        view! {
                            <a href=link.target class="nav-link" data-nav-link=link.label>{link.label}</a>
                        }
                    }).collect::<Vec<_>>()}
                </div>

                <a href=NAV_CTA.target class="navbar-btn" data-nav-cta=NAV_CTA.label>{NAV_CTA.label}</a>
            </div>
        </nav>
    }
}
