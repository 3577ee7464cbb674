//! Arabic translation table.

/// Arabic display strings, keyed by dot-namespaced translation key.
///
/// The key set must stay in lockstep with the English table; the startup
/// completeness check rejects any divergence.
pub(super) const ENTRIES: &[(&str, &str)] = &[
    // Navigation
    ("nav.home", "الرئيسية"),
    ("nav.about", "من نحن"),
    ("nav.services", "خدماتنا"),
    ("nav.portfolio", "أعمالنا"),
    ("nav.team", "فريقنا"),
    ("nav.contact", "تواصل معنا"),
    // Hero section
    ("hero.title", "نحن نبدع القصص المرئية التي تحرك المشاعر"),
    ("hero.subtitle", "قصتك، في حركة"),
    (
        "hero.description",
        "حلول احترافية للتصوير والمونتاج والتسويق الإبداعي التي تحول رؤيتك إلى واقع.",
    ),
    ("hero.cta1", "أعمالنا"),
    ("hero.cta2", "تواصل معنا"),
    // About section
    ("about.title", "من نحن"),
    ("about.subtitle", "صناعة التميز البصري"),
    (
        "about.description",
        "نحن وكالة ريلو، استوديو إبداعي مُكرس لتحويل الأفكار إلى قصص بصرية مقنعة. شغفنا يكمن في إنشاء قصص أصيلة تتردد مع الجماهير وتحفز الروابط المعنوية.",
    ),
    // Services section
    ("services.title", "خدماتنا"),
    ("services.subtitle", "حلول إبداعية شاملة"),
    ("services.photography", "التصوير الفوتوغرافي"),
    ("services.videography", "التصوير المرئي"),
    ("services.editing", "المونتاج والتحرير"),
    ("services.branding", "الهوية التجارية"),
    ("services.marketing", "التسويق عبر وسائل التواصل"),
    ("services.design", "التصميم"),
    // Portfolio section
    ("portfolio.title", "أعمالنا"),
    ("portfolio.subtitle", "التميز الإبداعي في الحركة"),
    // Team section
    ("team.title", "فريقنا"),
    ("team.subtitle", "العقول المبدعة وراء السحر"),
    // Clients section
    ("clients.title", "يثقون بنا"),
    ("clients.subtitle", "بالتعاون مع علامات تجارية مذهلة"),
    // Contact section
    ("contact.title", "لنبدع معاً"),
    ("contact.subtitle", "مستعد لتحويل رؤيتك إلى واقع؟"),
    ("contact.name", "الاسم"),
    ("contact.email", "البريد الإلكتروني"),
    ("contact.message", "الرسالة"),
    ("contact.send", "إرسال الرسالة"),
    // Why-us section
    ("why.title", "لماذا ريلو"),
    ("why.subtitle", "ما يجعلنا مختلفين"),
    (
        "why.description",
        "نحن نجمع بين الحساسيات التصميمية الأوروبية والتكنولوجيا المتطورة لتقديم تجارب بصرية تأسر وتلهم. التزامنا بالتميز يضمن أن كل مشروع يتجاوز التوقعات.",
    ),
];
