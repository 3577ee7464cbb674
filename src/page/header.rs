//! Fixed top navigation bar with anchor links and the language toggle.

use crate::i18n::{LocaleRegistry, LocaleView};
use crate::page::html::escape_html;

const NAV_ITEMS: &[(&str, &str)] = &[
    ("nav.home", "#home"),
    ("nav.about", "#about"),
    ("nav.services", "#services"),
    ("nav.portfolio", "#portfolio"),
    ("nav.team", "#team"),
    ("nav.contact", "#contact"),
];

/// User-facing literals in this section that bypass the translation lookup.
pub(super) const UNTRANSLATED: &[&str] = &["Reelo Agency"];

/// The label shown on the language toggle: the native name of the next
/// enabled locale after the active one, cycling in registration order.
fn toggle_label(view: &impl LocaleView) -> &'static str {
    let enabled = LocaleRegistry::get().list_enabled();
    let position = enabled
        .iter()
        .position(|config| config.code == view.locale().code())
        .unwrap_or(0);
    enabled[(position + 1) % enabled.len()].native_name
}

pub fn render(view: &impl LocaleView) -> String {
    let mut nav_links = String::new();
    for (key, href) in NAV_ITEMS {
        nav_links.push_str(&format!(
            "      <a href=\"{href}\">{}</a>\n",
            escape_html(&view.translate(key))
        ));
    }

    format!(
        "<header dir=\"{dir}\">\n  \
         <div class=\"container\">\n    \
         <a class=\"logo\" href=\"#home\"><img src=\"assets/reelo-logo.png\" alt=\"Reelo Agency\"></a>\n    \
         <nav>\n{nav_links}    </nav>\n    \
         <button class=\"language-toggle\" type=\"button\">{toggle}</button>\n  \
         </div>\n\
         </header>\n",
        dir = view.direction().as_attr(),
        toggle = escape_html(toggle_label(view)),
    )
}
