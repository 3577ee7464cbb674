//! Clients strip.
//!
//! The source renders a literal uppercase eyebrow ("TRUSTED BY") next to the
//! translated `clients.title` heading, and never consumes `clients.subtitle`
//! even though both tables carry it. Both quirks are preserved and the
//! literal is flagged for review.

use crate::i18n::LocaleView;
use crate::page::html::escape_html;

const CLIENTS: &[&str] = &[
    "TechCorp",
    "Creative Studio",
    "MediaFlow",
    "BrandX",
    "NextGen",
    "Visionary",
    "InnovateLab",
    "FutureWorks",
];

pub(super) const UNTRANSLATED: &[&str] = &[
    "TRUSTED BY",
    "TechCorp",
    "Creative Studio",
    "MediaFlow",
    "BrandX",
    "NextGen",
    "Visionary",
    "InnovateLab",
    "FutureWorks",
];

pub fn render(view: &impl LocaleView) -> String {
    let mut logos = String::new();
    for client in CLIENTS {
        logos.push_str(&format!(
            "      <div class=\"client\">{}</div>\n",
            escape_html(client)
        ));
    }

    format!(
        "<section class=\"clients\" dir=\"{dir}\">\n  \
         <div class=\"container\">\n    \
         <p class=\"eyebrow\">TRUSTED BY</p>\n    \
         <h2>{title}</h2>\n    \
         <div class=\"client-grid\">\n{logos}    </div>\n  \
         </div>\n\
         </section>\n",
        dir = view.direction().as_attr(),
        title = escape_html(&view.translate("clients.title")),
    )
}
