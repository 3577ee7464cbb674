//! Hero banner: headline, tagline, and the two calls to action.

use crate::i18n::LocaleView;
use crate::page::html::escape_html;

pub(super) const UNTRANSLATED: &[&str] = &[];

pub fn render(view: &impl LocaleView) -> String {
    format!(
        "<section id=\"home\" class=\"hero\" dir=\"{dir}\">\n  \
         <div class=\"container\">\n    \
         <p class=\"eyebrow\">{subtitle}</p>\n    \
         <h1>{title}</h1>\n    \
         <p class=\"description\">{description}</p>\n    \
         <div class=\"cta-group\">\n      \
         <a class=\"cta primary\" href=\"#portfolio\">{cta1}</a>\n      \
         <a class=\"cta secondary\" href=\"#contact\">{cta2}</a>\n    \
         </div>\n  \
         </div>\n\
         </section>\n",
        dir = view.direction().as_attr(),
        subtitle = escape_html(&view.translate("hero.subtitle")),
        title = escape_html(&view.translate("hero.title")),
        description = escape_html(&view.translate("hero.description")),
        cta1 = escape_html(&view.translate("hero.cta1")),
        cta2 = escape_html(&view.translate("hero.cta2")),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{Locale, LocalizationProvider};

    #[test]
    fn test_render_english_headline_and_ctas() {
        let provider = LocalizationProvider::new(Locale::ENGLISH).unwrap();
        let html = render(&provider);

        assert!(html.contains("We Create Visual Stories That Move People"));
        assert!(html.contains("Your Story, In Motion"));
        assert!(html.contains("href=\"#portfolio\""));
        assert!(html.contains("href=\"#contact\""));
        assert!(html.contains("dir=\"ltr\""));
    }

    #[test]
    fn test_render_arabic_is_rtl() {
        let provider = LocalizationProvider::new(Locale::ARABIC).unwrap();
        let html = render(&provider);

        assert!(html.contains("dir=\"rtl\""));
        assert!(html.contains("قصتك، في حركة"));
    }
}
