//! English translation table (default locale).

/// English display strings, keyed by dot-namespaced translation key.
pub(super) const ENTRIES: &[(&str, &str)] = &[
    // Navigation
    ("nav.home", "Home"),
    ("nav.about", "About Us"),
    ("nav.services", "Services"),
    ("nav.portfolio", "Our Work"),
    ("nav.team", "Our Team"),
    ("nav.contact", "Contact"),
    // Hero section
    ("hero.title", "We Create Visual Stories That Move People"),
    ("hero.subtitle", "Your Story, In Motion"),
    (
        "hero.description",
        "Professional photography, videography, editing, and creative marketing solutions that bring your vision to life.",
    ),
    ("hero.cta1", "Our Work"),
    ("hero.cta2", "Contact Us"),
    // About section
    ("about.title", "Who We Are"),
    ("about.subtitle", "Crafting Visual Excellence"),
    (
        "about.description",
        "We are Reelo Agency, a creative studio dedicated to transforming ideas into compelling visual narratives. Our passion lies in creating authentic stories that resonate with audiences and drive meaningful connections.",
    ),
    // Services section
    ("services.title", "Our Services"),
    ("services.subtitle", "Complete Creative Solutions"),
    ("services.photography", "Photography"),
    ("services.videography", "Videography"),
    ("services.editing", "Editing & Montage"),
    ("services.branding", "Branding"),
    ("services.marketing", "Social Media Marketing"),
    ("services.design", "Design"),
    // Portfolio section
    ("portfolio.title", "Our Work"),
    ("portfolio.subtitle", "Creative Excellence in Motion"),
    // Team section
    ("team.title", "Our Team"),
    ("team.subtitle", "Creative Minds Behind the Magic"),
    // Clients section
    ("clients.title", "Trusted By"),
    ("clients.subtitle", "In Collaboration With Amazing Brands"),
    // Contact section
    ("contact.title", "Let's Create Together"),
    ("contact.subtitle", "Ready to bring your vision to life?"),
    ("contact.name", "Name"),
    ("contact.email", "Email"),
    ("contact.message", "Message"),
    ("contact.send", "Send Message"),
    // Why-us section
    ("why.title", "Why Reelo"),
    ("why.subtitle", "What Makes Us Different"),
    (
        "why.description",
        "We combine European design sensibilities with cutting-edge technology to deliver visual experiences that captivate and inspire. Our commitment to excellence ensures every project exceeds expectations.",
    ),
];
