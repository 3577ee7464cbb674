//! Portfolio gallery.
//!
//! Item titles are untranslated literals carried over from the source
//! content; they are flagged for review rather than routed through the
//! lookup or silently localized.

use crate::i18n::LocaleView;
use crate::page::html::escape_html;

struct PortfolioItem {
    title: &'static str,
    category: &'static str,
    image: &'static str,
    kind: &'static str,
}

const ITEMS: &[PortfolioItem] = &[
    PortfolioItem {
        title: "Brand Campaign 2024",
        category: "Photography",
        image: "assets/portfolio/brand-campaign.jpg",
        kind: "image",
    },
    PortfolioItem {
        title: "Product Launch Video",
        category: "Videography",
        image: "assets/portfolio/product-launch.jpg",
        kind: "video",
    },
    PortfolioItem {
        title: "Creative Studio Session",
        category: "Photography",
        image: "assets/portfolio/studio-session.jpg",
        kind: "image",
    },
    PortfolioItem {
        title: "Corporate Identity",
        category: "Branding",
        image: "assets/portfolio/corporate-identity.jpg",
        kind: "image",
    },
    PortfolioItem {
        title: "Documentary Film",
        category: "Videography",
        image: "assets/portfolio/documentary.jpg",
        kind: "video",
    },
    PortfolioItem {
        title: "Event Coverage",
        category: "Photography",
        image: "assets/portfolio/event-coverage.jpg",
        kind: "image",
    },
];

pub(super) const UNTRANSLATED: &[&str] = &[
    "Brand Campaign 2024",
    "Product Launch Video",
    "Creative Studio Session",
    "Corporate Identity",
    "Documentary Film",
    "Event Coverage",
];

pub fn render(view: &impl LocaleView) -> String {
    let mut cards = String::new();
    for item in ITEMS {
        cards.push_str(&format!(
            "      <figure class=\"portfolio-item {kind}\">\n        \
             <img src=\"{image}\" alt=\"{title}\">\n        \
             <figcaption>{title}<span class=\"category\">{category}</span></figcaption>\n      \
             </figure>\n",
            kind = item.kind,
            image = item.image,
            title = escape_html(item.title),
            category = escape_html(item.category),
        ));
    }

    format!(
        "<section id=\"portfolio\" class=\"portfolio\" dir=\"{dir}\">\n  \
         <div class=\"container\">\n    \
         <p class=\"eyebrow\">{subtitle}</p>\n    \
         <h2>{title}</h2>\n    \
         <div class=\"portfolio-grid\">\n{cards}    </div>\n  \
         </div>\n\
         </section>\n",
        dir = view.direction().as_attr(),
        subtitle = escape_html(&view.translate("portfolio.subtitle")),
        title = escape_html(&view.translate("portfolio.title")),
    )
}
