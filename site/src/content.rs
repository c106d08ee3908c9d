//! Compiled-in site content.
//!
//! These are process-wide read-only values. Components receive them by
//! reference; nothing here is ever mutated at runtime.

use crate::components::{
    ICON_CHAT, ICON_DOWNLOAD, ICON_GLOBE, ICON_LIGHTNING, ICON_PHONE, ICON_SHIELD, ICON_USERS,
    ICON_VIDEO,
};
use crate::types::{EntityRecord, Feature, ImageRef, NavLink, Plan, Price, Testimonial};

pub const BRAND: &str = "FreeFlow";

/// Text rendered by the hover banner at the end of the landing page.
pub const BANNER_TEXT: &str = "FREEFLOW";

pub const LOGO_SRC: &str = "/1.png";

pub const REPOSITORY_URL: &str = "https://github.com/SagarSuryakantWaghmare/FreeFlow";

pub const COPYRIGHT: &str = "© 2025 FreeFlow. All rights reserved.";

/// People credited in the footer tooltip, in display order.
pub const DEVELOPERS: &[EntityRecord] = &[
    EntityRecord {
        id: 1,
        name: "Sagar Suryakant Waghmare",
        designation: "Full Stack Developer",
        image: ImageRef::Asset("/Photos/sagar.jpg"),
    },
    EntityRecord {
        id: 2,
        name: "Atharva",
        designation: "Full Stack Developer",
        image: ImageRef::Remote(
            "https://images.unsplash.com/photo-1535713875002-d1d0cf377fde?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=60",
        ),
    },
    EntityRecord {
        id: 3,
        name: "Aakash",
        designation: "Java Backend Developer",
        image: ImageRef::Remote(
            "https://images.unsplash.com/photo-1580489944761-15a19d654956?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=60",
        ),
    },
];

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { label: "About", target: "/about" },
    NavLink { label: "Features", target: "/features" },
    NavLink { label: "Pricing", target: "/pricing" },
    NavLink { label: "FAQs", target: "/faq" },
];

pub const NAV_CTA: NavLink = NavLink { label: "Get Started", target: "/get-started" };

pub const FOOTER_LINKS: &[NavLink] = &[
    NavLink { label: "About", target: "/about" },
    NavLink { label: "Terms & Conditions", target: "/terms" },
    NavLink { label: "Privacy Policy", target: "/privacy" },
];

pub const FEATURES: &[Feature] = &[
    Feature {
        icon: ICON_VIDEO,
        title: "Video Calls",
        description: "Crystal clear HD video calls with up to 50 participants. Perfect for team meetings or catching up with friends.",
    },
    Feature {
        icon: ICON_CHAT,
        title: "Text Chat",
        description: "Real-time messaging with rich text formatting, file sharing, and emoji support integrated with your calls.",
    },
    Feature {
        icon: ICON_SHIELD,
        title: "End-to-End Encryption",
        description: "Your conversations stay private with enterprise-grade security and end-to-end encryption on all communications.",
    },
    Feature {
        icon: ICON_DOWNLOAD,
        title: "No Downloads",
        description: "Works directly in your browser with WebRTC technology - no apps, plugins, or extensions required.",
    },
    Feature {
        icon: ICON_LIGHTNING,
        title: "Low Latency",
        description: "Engineered for real-time communication with minimal lag, even on slower connections.",
    },
    Feature {
        icon: ICON_GLOBE,
        title: "Global Infrastructure",
        description: "Servers worldwide ensure the lowest possible latency regardless of your location.",
    },
    Feature {
        icon: ICON_PHONE,
        title: "Mobile Ready",
        description: "Fully responsive design works seamlessly across desktop, tablet, and mobile devices.",
    },
    Feature {
        icon: ICON_USERS,
        title: "Screen Sharing",
        description: "Share your screen, applications, or specific windows during calls with a single click.",
    },
];

pub const PLANS: &[Plan] = &[
    Plan {
        name: "Free",
        price: Price::Dollars { monthly: 0, annual: 0 },
        description: "For personal use and small projects",
        features: &[
            "1-on-1 video calls",
            "Text chat during calls",
            "Screen sharing",
            "45-minute call limit",
            "Basic quality (720p)",
        ],
        limitations: &[
            "No recording",
            "No multi-participant rooms",
            "Limited customer support",
        ],
        cta: "Get Started Free",
        href: "/signup",
        popular: false,
    },
    Plan {
        name: "Premium",
        price: Price::Dollars { monthly: 12, annual: 9 },
        description: "For professionals and teams",
        features: &[
            "Unlimited call duration",
            "Up to 50 participants",
            "HD quality (1080p)",
            "Call recording",
            "Screen sharing with annotation",
            "Custom backgrounds",
            "Priority support",
            "Analytics dashboard",
            "Admin controls",
        ],
        limitations: &[],
        cta: "Start 14-day Free Trial",
        href: "/signup?plan=premium",
        popular: true,
    },
    Plan {
        name: "Enterprise",
        price: Price::Custom,
        description: "For large organizations with custom needs",
        features: &[
            "Everything in Premium",
            "Dedicated account manager",
            "Custom branding",
            "API access",
            "SSO integration",
            "Advanced analytics",
            "99.9% uptime SLA",
            "Unlimited storage",
            "Compliance & regulatory support",
        ],
        limitations: &[],
        cta: "Contact Sales",
        href: "/contact",
        popular: false,
    },
];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Sarah Johnson",
        title: "Marketing Director",
        company: "TechGlobe Inc.",
        quote: "FreeFlow has transformed how our remote team collaborates. The video quality is exceptional, and the fact that there's no download makes onboarding new team members incredibly easy.",
        avatar: ImageRef::Remote("https://images.pexels.com/photos/415829/pexels-photo-415829.jpeg?auto=compress&cs=tinysrgb&w=150"),
    },
    Testimonial {
        name: "Michael Chen",
        title: "Lead Developer",
        company: "Quantum Solutions",
        quote: "As a developer, I appreciate how robust and reliable FreeFlow is. The API access in the enterprise plan has allowed us to integrate it seamlessly into our existing workflow tools.",
        avatar: ImageRef::Remote("https://images.pexels.com/photos/614810/pexels-photo-614810.jpeg?auto=compress&cs=tinysrgb&w=150"),
    },
    Testimonial {
        name: "Emily Rodriguez",
        title: "Remote Learning Coordinator",
        company: "Global Education Alliance",
        quote: "Teaching students remotely requires a platform that's both reliable and simple to use. FreeFlow checks both boxes, and the screen-sharing annotation feature is a game-changer for interactive lessons.",
        avatar: ImageRef::Remote("https://images.pexels.com/photos/774909/pexels-photo-774909.jpeg?auto=compress&cs=tinysrgb&w=150"),
    },
    Testimonial {
        name: "David Park",
        title: "CEO",
        company: "Startup Ventures",
        quote: "We've tried numerous video conferencing solutions, but FreeFlow stands out for its crystal clear quality and intuitive interface. It's become essential to our day-to-day operations.",
        avatar: ImageRef::Remote("https://images.pexels.com/photos/220453/pexels-photo-220453.jpeg?auto=compress&cs=tinysrgb&w=150"),
    },
    Testimonial {
        name: "Jessica Winters",
        title: "Telemedicine Specialist",
        company: "HealthFirst Services",
        quote: "The security and reliability of FreeFlow make it perfect for our telehealth consultations. Patients love how easy it is to join calls, and doctors appreciate the professional quality.",
        avatar: ImageRef::Remote("https://images.pexels.com/photos/1239291/pexels-photo-1239291.jpeg?auto=compress&cs=tinysrgb&w=150"),
    },
];

pub const CTA_PERKS: &[&str] = &[
    "No credit card required",
    "Free plan available forever",
    "No downloads needed",
    "Works on all modern browsers",
    "End-to-end encryption",
    "14-day money-back guarantee",
];
