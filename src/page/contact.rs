//! Contact section: contact details and an inert enquiry form.
//!
//! The form has no submission target. Field placeholders and the contact
//! details are untranslated literals from the source, flagged for review.

use crate::i18n::LocaleView;
use crate::page::html::escape_html;

const CONTACT_DETAILS: &[(&str, &str)] = &[
    ("Email", "hello@reeloagency.com"),
    ("Phone", "+1 (555) 123-4567"),
    ("Location", "New York, NY"),
];

pub(super) const UNTRANSLATED: &[&str] = &[
    "Email",
    "Phone",
    "Location",
    "hello@reeloagency.com",
    "+1 (555) 123-4567",
    "New York, NY",
    "Your name",
    "your@email.com",
    "Tell us about your project...",
];

pub fn render(view: &impl LocaleView) -> String {
    let mut details = String::new();
    for (label, value) in CONTACT_DETAILS {
        details.push_str(&format!(
            "      <div class=\"contact-detail\"><span class=\"label\">{label}</span><span>{value}</span></div>\n",
            label = escape_html(label),
            value = escape_html(value),
        ));
    }

    format!(
        "<section id=\"contact\" class=\"contact\" dir=\"{dir}\">\n  \
         <div class=\"container\">\n    \
         <p class=\"eyebrow\">{subtitle}</p>\n    \
         <h2>{title}</h2>\n    \
         <div class=\"contact-details\">\n{details}    </div>\n    \
         <form class=\"contact-form\">\n      \
         <label>{name}<input type=\"text\" name=\"name\" placeholder=\"Your name\"></label>\n      \
         <label>{email}<input type=\"email\" name=\"email\" placeholder=\"your@email.com\"></label>\n      \
         <label>{message}<textarea name=\"message\" placeholder=\"Tell us about your project...\"></textarea></label>\n      \
         <button type=\"submit\">{send}</button>\n    \
         </form>\n  \
         </div>\n\
         </section>\n",
        dir = view.direction().as_attr(),
        subtitle = escape_html(&view.translate("contact.subtitle")),
        title = escape_html(&view.translate("contact.title")),
        name = escape_html(&view.translate("contact.name")),
        email = escape_html(&view.translate("contact.email")),
        message = escape_html(&view.translate("contact.message")),
        send = escape_html(&view.translate("contact.send")),
    )
}
