use leptos::prelude::*;

use super::{DeveloperTooltip, Icon, ICON_CODE, ICON_HEART};
use crate::content::{BANNER_TEXT, COPYRIGHT, FOOTER_LINKS, LOGO_SRC, REPOSITORY_URL};

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer" data-section="footer">
            <div class="container">
                <div class="footer-brand">
                    <div class="footer-logo">
                        <img src=LOGO_SRC alt="FreeFlow Logo" width="40" height="40" />
                        <span class="footer-title">{BANNER_TEXT}</span>
                    </div>
                    <p class="footer-tagline">
                        "Seamless peer-to-peer communication that flows freely. Connect with anyone, anywhere."
                    </p>
                </div>
                <div class="footer-links">
                    {FOOTER_LINKS.iter().map(|link| view! {
                        <a href=link.target class="footer-link">{link.label}</a>
                    }).collect::<Vec<_>>()}
                </div>
                <div class="footer-bottom">
                    <a href=REPOSITORY_URL class="footer-repo" aria-label="GitHub">
                        <Icon path=ICON_CODE size="20" />
                        <span>"View on GitHub"</span>
                    </a>
                    <p class="footer-copyright">{COPYRIGHT}</p>
                    <div class="footer-credits">
                        <span>"Made with"</span>
                        <Icon path=ICON_HEART size="16" class="icon-heart" />
                        <span>"by"</span>
                        <DeveloperTooltip />
                    </div>
                </div>
            </div>
        </footer>
    }
}
