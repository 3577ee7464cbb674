//! Site footer: social links, quick links, service list, contact details,
//! and legal strings.
//!
//! The source bypasses the translation lookup for everything in this
//! section, including quick-link labels and the service list that duplicate
//! copy available under `nav.*` and `services.*`. Those literals are kept
//! as-is and flagged for review.

use crate::i18n::LocaleView;
use crate::page::html::escape_html;

const SOCIAL_LINKS: &[(&str, &str)] = &[
    ("Instagram", "#"),
    ("LinkedIn", "#"),
    ("Twitter", "#"),
    ("YouTube", "#"),
];

const QUICK_LINKS: &[(&str, &str)] = &[
    ("About Us", "#about"),
    ("Services", "#services"),
    ("Portfolio", "#portfolio"),
    ("Team", "#team"),
    ("Contact", "#contact"),
];

const SERVICES: &[&str] = &[
    "Photography",
    "Videography",
    "Editing & Montage",
    "Branding",
    "Social Media Marketing",
    "Design",
];

pub(super) const UNTRANSLATED: &[&str] = &[
    "Instagram",
    "LinkedIn",
    "Twitter",
    "YouTube",
    "About Us",
    "Services",
    "Portfolio",
    "Team",
    "Contact",
    "Photography",
    "Videography",
    "Editing & Montage",
    "Branding",
    "Social Media Marketing",
    "Design",
    "hello@reeloagency.com",
    "+1 (555) 123-4567",
    "New York, NY",
    "© 2024 Reelo Agency. All rights reserved.",
    "Privacy Policy",
    "Terms of Service",
];

pub fn render(view: &impl LocaleView) -> String {
    let mut socials = String::new();
    for (label, href) in SOCIAL_LINKS {
        socials.push_str(&format!(
            "      <a href=\"{href}\" aria-label=\"{label}\">{label}</a>\n",
            label = escape_html(label),
        ));
    }

    let mut quick_links = String::new();
    for (label, href) in QUICK_LINKS {
        quick_links.push_str(&format!(
            "      <li><a href=\"{href}\">{}</a></li>\n",
            escape_html(label)
        ));
    }

    let mut services = String::new();
    for service in SERVICES {
        services.push_str(&format!("      <li>{}</li>\n", escape_html(service)));
    }

    format!(
        "<footer dir=\"{dir}\">\n  \
         <div class=\"container\">\n    \
         <div class=\"social-links\">\n{socials}    </div>\n    \
         <ul class=\"quick-links\">\n{quick_links}    </ul>\n    \
         <ul class=\"service-list\">\n{services}    </ul>\n    \
         <div class=\"contact-info\">\n      \
         <span>hello@reeloagency.com</span>\n      \
         <span>+1 (555) 123-4567</span>\n      \
         <span>New York, NY</span>\n    \
         </div>\n    \
         <div class=\"bottom\">\n      \
         <p>© 2024 Reelo Agency. All rights reserved.</p>\n      \
         <a href=\"#\">Privacy Policy</a>\n      \
         <a href=\"#\">Terms of Service</a>\n    \
         </div>\n  \
         </div>\n\
         </footer>\n",
        dir = view.direction().as_attr(),
    )
}
