//! Services grid. Each card's label resolves through the `services.*`
//! namespace, so the card list itself carries keys rather than copy.

use crate::i18n::LocaleView;
use crate::page::html::escape_html;

const SERVICE_KEYS: &[&str] = &[
    "photography",
    "videography",
    "editing",
    "branding",
    "marketing",
    "design",
];

pub(super) const UNTRANSLATED: &[&str] = &[];

pub fn render(view: &impl LocaleView) -> String {
    let mut cards = String::new();
    for key in SERVICE_KEYS {
        cards.push_str(&format!(
            "      <div class=\"service-card\">{}</div>\n",
            escape_html(&view.translate(&format!("services.{key}")))
        ));
    }

    format!(
        "<section id=\"services\" class=\"services\" dir=\"{dir}\">\n  \
         <div class=\"container\">\n    \
         <p class=\"eyebrow\">{subtitle}</p>\n    \
         <h2>{title}</h2>\n    \
         <div class=\"service-grid\">\n{cards}    </div>\n  \
         </div>\n\
         </section>\n",
        dir = view.direction().as_attr(),
        subtitle = escape_html(&view.translate("services.subtitle")),
        title = escape_html(&view.translate("services.title")),
    )
}
