//! Root document component - the complete HTML page
//!
//! Every page shares this shell: head metadata, the inline stylesheet, and the
//! navigation bar above the page body.

use super::Navbar;
use crate::styles::SITE_CSS;
use leptos::prelude::*;

pub const SITE_TITLE: &str = "FreeFlow - Peer to Peer Communication";

const SITE_DESCRIPTION: &str = "A seamless, obstacle-free peer-to-peer communication platform";

const FONT_STYLESHEET: &str = "https://fonts.googleapis.com/css2?family=Bebas+Neue&display=swap";

/// The complete HTML document wrapping one page
#[component]
pub fn SiteDocument(
    /// Document title; defaults to the site title
    #[prop(default = SITE_TITLE)]
    title: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <html lang="en" class="dark">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta name="description" content=SITE_DESCRIPTION />
                <title>{title}</title>
                <link rel="stylesheet" href=FONT_STYLESHEET />
                <style>{SITE_CSS}</style>
            </head>
            <body>
                <div class="site-shell">
                    <Navbar />
                    <main class="site-main">{children()}</main>
                </div>
            </body>
        </html>
    }
}
