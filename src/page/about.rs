//! About section.

use crate::i18n::LocaleView;
use crate::page::html::escape_html;

pub(super) const UNTRANSLATED: &[&str] = &[];

pub fn render(view: &impl LocaleView) -> String {
    format!(
        "<section id=\"about\" class=\"about\" dir=\"{dir}\">\n  \
         <div class=\"container\">\n    \
         <p class=\"eyebrow\">{subtitle}</p>\n    \
         <h2>{title}</h2>\n    \
         <p class=\"description\">{description}</p>\n  \
         </div>\n\
         </section>\n",
        dir = view.direction().as_attr(),
        subtitle = escape_html(&view.translate("about.subtitle")),
        title = escape_html(&view.translate("about.title")),
        description = escape_html(&view.translate("about.description")),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{Locale, LocalizationProvider};

    #[test]
    fn test_render_uses_about_table_entries() {
        let provider = LocalizationProvider::new(Locale::ENGLISH).unwrap();
        let html = render(&provider);

        assert!(html.contains("Who We Are"));
        assert!(html.contains("Crafting Visual Excellence"));
        assert!(html.contains("Reelo Agency"));
    }

    #[test]
    fn test_render_arabic_description() {
        let provider = LocalizationProvider::new(Locale::ARABIC).unwrap();
        let html = render(&provider);

        assert!(html.contains("dir=\"rtl\""));
        assert!(html.contains("صناعة التميز البصري"));
    }
}
