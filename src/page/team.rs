//! Team section. Member names, roles, and quotes are untranslated literals
//! from the source content, flagged for review.

use crate::i18n::LocaleView;
use crate::page::html::escape_html;

struct TeamMember {
    name: &'static str,
    role: &'static str,
    image: &'static str,
    quote: &'static str,
}

const MEMBERS: &[TeamMember] = &[
    TeamMember {
        name: "Ahmed Al-Mahmoud",
        role: "Creative Director",
        image: "assets/team/ahmed.jpg",
        quote: "Creativity is intelligence having fun.",
    },
    TeamMember {
        name: "Sarah Johnson",
        role: "Lead Photographer",
        image: "assets/team/sarah.jpg",
        quote: "Every picture tells a story.",
    },
    TeamMember {
        name: "Marcus Chen",
        role: "Video Producer",
        image: "assets/team/marcus.jpg",
        quote: "Motion creates emotion.",
    },
    TeamMember {
        name: "Layla Hassan",
        role: "Brand Designer",
        image: "assets/team/layla.jpg",
        quote: "Design is thinking made visual.",
    },
];

pub(super) const UNTRANSLATED: &[&str] = &[
    "Ahmed Al-Mahmoud",
    "Creative Director",
    "Sarah Johnson",
    "Lead Photographer",
    "Marcus Chen",
    "Video Producer",
    "Layla Hassan",
    "Brand Designer",
    "Creativity is intelligence having fun.",
    "Every picture tells a story.",
    "Motion creates emotion.",
    "Design is thinking made visual.",
];

pub fn render(view: &impl LocaleView) -> String {
    let mut cards = String::new();
    for member in MEMBERS {
        cards.push_str(&format!(
            "      <div class=\"team-card\">\n        \
             <img src=\"{image}\" alt=\"{name}\">\n        \
             <h3>{name}</h3>\n        \
             <p class=\"role\">{role}</p>\n        \
             <blockquote>{quote}</blockquote>\n      \
             </div>\n",
            image = member.image,
            name = escape_html(member.name),
            role = escape_html(member.role),
            quote = escape_html(member.quote),
        ));
    }

    format!(
        "<section id=\"team\" class=\"team\" dir=\"{dir}\">\n  \
         <div class=\"container\">\n    \
         <p class=\"eyebrow\">{subtitle}</p>\n    \
         <h2>{title}</h2>\n    \
         <div class=\"team-grid\">\n{cards}    </div>\n  \
         </div>\n\
         </section>\n",
        dir = view.direction().as_attr(),
        subtitle = escape_html(&view.translate("team.subtitle")),
        title = escape_html(&view.translate("team.title")),
    )
}
