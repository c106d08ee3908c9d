//! CSS styles for the site.
//!
//! One stylesheet is inlined into every page by
//! [`SiteDocument`](crate::components::SiteDocument). It also carries the
//! class hooks the presentational effects rely on (`.tooltip-popover`,
//! `.text-hover-reveal`, `.carousel`), so the markup stays effect-agnostic.
//!
//! The text is emitted inside `<style>` as escaped text, so it must not
//! contain `<`, `>` or `&`.

/// Complete CSS for the site - dark theme with the violet brand accent.
pub const SITE_CSS: &str = r#"
:root {
    --bg: #000000;
    --bg-card: #0f0f17;
    --border: #262633;
    --text: #f3f4f6;
    --text-muted: #9ca3af;
    --accent: hsl(263.4, 70%, 50.4%);
    --accent-soft: hsla(263.4, 70%, 50.4%, 0.1);
    --ok: #22c55e;
    --radius: 12px;
    --display-font: 'Bebas Neue', sans-serif;
}

* { box-sizing: border-box; }

body {
    margin: 0;
    background: var(--bg);
    color: var(--text);
    font-family: Inter, system-ui, sans-serif;
    line-height: 1.5;
}

a { color: inherit; text-decoration: none; }

.site-shell { max-width: 1620px; margin: 0 auto; min-height: 100vh; display: flex; flex-direction: column; }
.site-main { flex: 1; }
.container { max-width: 1200px; margin: 0 auto; padding: 0 24px; }

/* Navbar */
.navbar { position: sticky; top: 16px; z-index: 50; padding: 0 16px; }
.navbar-inner {
    display: flex; align-items: center; justify-content: space-between; gap: 24px;
    padding: 12px 24px; border-radius: 999px;
    background: rgba(15, 15, 23, 0.7); backdrop-filter: blur(12px);
    border: 1px solid var(--border);
}
.navbar-logo { display: flex; align-items: center; gap: 12px; }
.navbar-title { font-size: 2rem; font-family: var(--display-font); }
.navbar-links { display: flex; gap: 24px; }
.nav-link { color: var(--text-muted); }
.nav-link:hover { color: var(--accent); }
.navbar-btn { padding: 8px 20px; border-radius: 999px; background: var(--accent); color: #fff; }
.hamburger-menu { display: none; background: none; border: 0; color: var(--text); }

@media (max-width: 768px) {
    .navbar-links, .navbar-btn { display: none; }
    .hamburger-menu { display: block; }
}

/* Buttons */
.btn { display: inline-flex; align-items: center; gap: 8px; padding: 12px 28px; border-radius: 8px; font-weight: 600; }
.btn-primary { background: var(--accent); color: #fff; }
.btn-outline { border: 1px solid var(--border); }
.btn-secondary { background: var(--bg-card); color: var(--text); }
.btn-light { background: #fff; color: var(--accent); }

/* Sections */
.section-header { text-align: center; max-width: 760px; margin: 0 auto 64px; }
.section-title { font-family: var(--display-font); font-size: 2.5rem; color: var(--accent); margin: 0 0 24px; }
.section-description { font-size: 1.25rem; color: var(--text-muted); }
.features, .pricing, .testimonials, .cta { padding: 96px 0; }

/* Hero */
.hero { padding: 160px 0 96px; min-height: 100vh; }
.hero-grid { display: grid; grid-template-columns: repeat(2, minmax(0, 1fr)); gap: 48px; align-items: center; }
.hero-title { font-family: var(--display-font); font-size: 4rem; line-height: 1.1; letter-spacing: 0.02em; }
.hero-title-accent { color: var(--accent); }
.hero-description { font-size: 1.25rem; color: var(--text-muted); max-width: 36rem; }
.hero-actions { display: flex; flex-wrap: wrap; gap: 16px; padding-top: 16px; }
.hero-fineprint { padding-top: 16px; font-size: 0.875rem; color: var(--text-muted); }
.hero-visual { position: relative; display: flex; justify-content: center; }
.hero-glow { position: absolute; width: 12rem; height: 12rem; border-radius: 50%; background: var(--accent-soft); filter: blur(48px); }
.hero-glow-top { top: -4rem; right: -4rem; }
.hero-glow-bottom { bottom: -2rem; left: -2rem; }
.connection-animation { display: flex; align-items: center; gap: 16px; width: 100%; max-width: 32rem; height: 18rem; justify-content: center; }
.peer { width: 64px; height: 64px; border-radius: 50%; background: var(--accent); }
.peer-link { flex: 1; height: 2px; background: linear-gradient(90deg, var(--accent), transparent, var(--accent)); }

@media (max-width: 1024px) {
    .hero-grid { grid-template-columns: 1fr; }
}

/* Features */
.features-grid { display: grid; grid-template-columns: repeat(4, minmax(0, 1fr)); gap: 32px; }
.feature-card { background: var(--bg-card); border: 1px solid var(--border); border-radius: var(--radius); padding: 24px; transition: opacity 0.7s ease-out, transform 0.7s ease-out; }
.feature-icon { width: 48px; height: 48px; border-radius: 50%; background: var(--accent-soft); color: var(--accent); display: flex; align-items: center; justify-content: center; margin-bottom: 16px; }
.feature-title { color: var(--accent); font-size: 1.25rem; margin: 0 0 12px; }
.feature-description { color: var(--text-muted); margin: 0; }

/* Pricing */
.billing-toggle { display: flex; align-items: center; justify-content: center; gap: 16px; margin-top: 32px; }
.billing-label { color: var(--text-muted); font-size: 0.875rem; }
.billing-label.active { color: var(--text); }
.billing-switch { width: 44px; height: 24px; border-radius: 999px; background: var(--accent); }
.badge-save { color: var(--ok); border: 1px solid var(--ok); border-radius: 999px; padding: 2px 10px; font-size: 0.75rem; }
.pricing-grid { display: grid; grid-template-columns: repeat(3, minmax(0, 1fr)); gap: 32px; }
.plan-card { position: relative; overflow: hidden; background: var(--bg-card); border: 1px solid var(--border); border-radius: var(--radius); padding: 32px; display: flex; flex-direction: column; gap: 24px; }
.plan-card.popular { border-color: var(--accent); box-shadow: 0 10px 30px var(--accent-soft); }
.popular-badge { position: absolute; top: 0; right: 0; background: var(--accent); color: #fff; font-size: 0.75rem; padding: 4px 12px; border-bottom-left-radius: 8px; }
.plan-name { font-size: 1.5rem; margin: 0; }
.plan-description { color: var(--text-muted); margin: 4px 0 0; }
.price { display: none; }
.price.active { display: inline; }
.price-amount { font-size: 2.25rem; font-weight: 700; }
.price-period { color: var(--text-muted); margin-left: 4px; }
.plan-list-title { font-size: 0.875rem; font-weight: 600; }
.plan-card ul { list-style: none; padding: 0; margin: 0; display: grid; gap: 8px; }
.plan-feature, .plan-limitation { display: flex; gap: 8px; font-size: 0.875rem; }
.plan-limitation { color: var(--text-muted); }
.icon-ok { color: var(--ok); flex-shrink: 0; }
.icon-muted { color: var(--text-muted); flex-shrink: 0; }
.plan-footer { margin-top: auto; }
.plan-footer .btn { width: 100%; justify-content: center; }

/* Testimonials */
.carousel { max-width: 56rem; margin: 0 auto; }
.testimonial-slide { display: none; background: var(--bg-card); border: 1px solid var(--border); border-radius: var(--radius); padding: 40px; margin: 0; text-align: center; }
.testimonial-slide.active { display: block; }
.testimonial-avatar { width: 80px; height: 80px; border-radius: 50%; object-fit: cover; margin: 0 auto 16px; display: block; }
.testimonial-avatar.placeholder { background: var(--accent-soft); }
.testimonial-quote-icon { color: var(--accent); opacity: 0.5; }
.testimonial-quote { font-size: 1.25rem; font-style: italic; margin: 16px 0 24px; }
.testimonial-name { display: block; font-weight: 600; }
.testimonial-role { color: var(--text-muted); font-size: 0.875rem; }
.carousel-controls { display: flex; align-items: center; justify-content: center; gap: 16px; margin-top: 24px; }
.carousel-prev, .carousel-next { background: none; border: 1px solid var(--border); color: var(--text); border-radius: 50%; width: 40px; height: 40px; cursor: pointer; }
.carousel-dots { display: flex; gap: 8px; }
.carousel-dot { width: 10px; height: 10px; border-radius: 50%; border: 0; background: var(--border); cursor: pointer; }
.carousel-dot.active { background: var(--accent); }

/* Call to action */
.cta { position: relative; overflow: hidden; color: var(--accent); text-align: center; }
.cta-decor { position: absolute; inset: 0; pointer-events: none; }
.cta-orb { position: absolute; width: 20rem; height: 20rem; border-radius: 50%; }
.cta-orb-top { top: -10rem; right: -10rem; }
.cta-orb-bottom { bottom: -10rem; left: -10rem; }
.cta-title { font-family: var(--display-font); font-size: 3rem; margin: 0 0 24px; }
.cta-description { font-size: 1.25rem; color: var(--text-muted); margin-bottom: 48px; }
.cta-actions { display: flex; justify-content: center; gap: 16px; margin-bottom: 48px; }
.cta-perks { list-style: none; padding: 0; max-width: 42rem; margin: 0 auto; display: grid; grid-template-columns: repeat(2, minmax(0, 1fr)); gap: 16px 48px; text-align: left; color: var(--text); }
.cta-perk { display: flex; gap: 8px; align-items: flex-start; font-size: 0.875rem; }

/* Footer */
.footer { border-top: 1px solid var(--border); padding: 32px 0; text-align: center; }
.footer-logo { display: inline-flex; align-items: center; gap: 8px; }
.footer-logo img { border-radius: 8px; }
.footer-title { font-family: var(--display-font); font-size: 1.5rem; color: var(--accent); }
.footer-tagline { color: var(--text-muted); font-size: 0.875rem; max-width: 28rem; margin: 16px auto; }
.footer-links { display: flex; justify-content: center; gap: 24px; font-size: 0.875rem; color: var(--text-muted); }
.footer-link:hover { color: var(--accent); }
.footer-bottom { margin-top: 24px; padding-top: 16px; border-top: 1px solid var(--border); display: flex; align-items: center; justify-content: space-between; gap: 16px; flex-wrap: wrap; color: var(--text-muted); font-size: 0.875rem; }
.footer-repo { display: inline-flex; align-items: center; gap: 8px; }
.footer-credits { display: flex; align-items: center; gap: 6px; }
.icon-heart { color: #ef4444; }

/* Tooltip row */
.tooltip-row { display: flex; flex-direction: row; align-items: center; justify-content: center; }
.tooltip-item { position: relative; margin-right: -12px; outline: none; }
.tooltip-avatar { width: 56px; height: 56px; border-radius: 50%; border: 2px solid #fff; object-fit: cover; object-position: top; transition: transform 0.5s; }
.tooltip-avatar.placeholder { display: inline-flex; align-items: center; justify-content: center; background: var(--accent); color: #fff; font-weight: 700; }
.tooltip-item:hover .tooltip-avatar, .tooltip-item:focus .tooltip-avatar { transform: scale(1.05); z-index: 30; }
.tooltip-popover { position: absolute; bottom: calc(100% + 8px); left: 50%; transform: translateX(-50%) translateY(8px); opacity: 0; pointer-events: none; transition: opacity 0.2s, transform 0.2s; z-index: 50; }
.tooltip-item:hover .tooltip-popover, .tooltip-item:focus .tooltip-popover { opacity: 1; transform: translateX(-50%) translateY(0); }
.tooltip-card { background: #000; border-radius: 6px; padding: 8px 16px; white-space: nowrap; box-shadow: 0 10px 25px rgba(0, 0, 0, 0.5); }
.tooltip-name { margin: 0; font-weight: 700; color: #fff; }
.tooltip-designation { margin: 0; font-size: 0.75rem; color: #fff; }

/* Text hover banner */
.text-hover-banner { display: flex; align-items: center; justify-content: center; height: 25rem; overflow: hidden; }
.text-hover-inner { width: 100%; }
.text-hover-svg { user-select: none; font-family: Helvetica, sans-serif; font-size: 4.5rem; font-weight: 700; }
.text-hover-outline { fill: transparent; stroke: #404040; }
.text-hover-reveal { fill: transparent; stroke: var(--accent); opacity: 0; transition: opacity 0.3s; }
.text-hover:hover .text-hover-reveal { opacity: 1; }

/* Dashboard */
.dashboard { padding: 160px 24px 96px; max-width: 960px; margin: 0 auto; }
.dashboard-title { font-family: var(--display-font); font-size: 3rem; color: var(--accent); }
.dashboard-user { font-size: 1.125rem; }
.dashboard-user.absent { color: var(--text-muted); }

@media (max-width: 768px) {
    .features-grid, .pricing-grid, .cta-perks { grid-template-columns: 1fr; }
    .footer-bottom { flex-direction: column; }
}
"#;

#[cfg(test)]
mod tests {
    use super::SITE_CSS;

    #[test]
    fn stylesheet_survives_text_escaping() {
        assert!(!SITE_CSS.contains('<'));
        assert!(!SITE_CSS.contains('>'));
        assert!(!SITE_CSS.contains('&'));
    }
}
