//! Static page content.

pub const OWNER: &str = "Mg Phoe Chit";
pub const BRAND: &str = "MPC";

pub struct Hero {
    pub monogram: &'static str,
    pub name: &'static str,
    pub roles: [&'static str; 3],
    pub stats: [(&'static str, &'static str); 2],
}

pub const HERO: Hero = Hero {
    monogram: "MP",
    name: "MG PHOE CHIT",
    roles: ["Developer", "Phone Master", "Tech Advocate"],
    stats: [
        ("Current Project", "Music Hub"),
        ("Certified Since", "May 2025 - EPI"),
    ],
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub kind: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub status: &'static str,
}

pub const COMPLETED_PROJECTS: [Project; 2] = [
    Project {
        title: "TMHD7",
        kind: "Mobile Application",
        description: "A comprehensive mobile app designed for tech enthusiasts and power users.",
        tags: &["Android", "APK", "Mobile"],
        status: "Completed",
    },
    Project {
        title: "The Master of The Phone",
        kind: "E-Book",
        description: "An in-depth guide covering advanced phone repair techniques and troubleshooting.",
        tags: &["E-Book", "Education", "Tech"],
        status: "Published",
    },
];

pub const FUTURE_PROJECTS: [Project; 2] = [
    Project {
        title: "လူငယ်နဲ့ နည်းပညာ",
        kind: "E-Book",
        description: "Upcoming e-book focused on technology education for the youth.",
        tags: &[],
        status: "Coming Soon",
    },
    Project {
        title: "Music Hub App",
        kind: "Mobile Application",
        description: "Revolutionary music streaming and discovery platform.",
        tags: &[],
        status: "In Development",
    },
];

/// Completed cards first, then future ones; the position is the card's
/// reveal index.
pub fn project_cards() -> impl Iterator<Item = &'static Project> {
    COMPLETED_PROJECTS.iter().chain(FUTURE_PROJECTS.iter())
}

pub const PROJECT_CARD_COUNT: usize = COMPLETED_PROJECTS.len() + FUTURE_PROJECTS.len();

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub title: &'static str,
    pub description: &'static str,
    /// Percent, 0..=100.
    pub level: u8,
}

pub const SKILLS: [Skill; 4] = [
    Skill {
        title: "Hardware/Software Phone Repair",
        description: "EPI Certified professional phone technician with expertise in both hardware diagnostics and software troubleshooting.",
        level: 95,
    },
    Skill {
        title: "HTML/CSS/JS Development",
        description: "Full-stack web development capabilities with modern frameworks and responsive design principles.",
        level: 85,
    },
    Skill {
        title: "APK Creation",
        description: "Custom Android application development from concept to deployment on the Play Store.",
        level: 80,
    },
    Skill {
        title: "Logo/Photo/Video Editing",
        description: "Creative design and multimedia editing for branding, marketing, and content creation.",
        level: 88,
    },
];

pub struct Certificate {
    pub heading: &'static str,
    pub summary: &'static str,
    pub card: [&'static str; 3],
    pub full: [&'static str; 4],
}

pub const CERTIFICATE: Certificate = Certificate {
    heading: "EPI Certification",
    summary: "Professional Phone Repair Certificate - May 2025",
    card: ["EPI Certificate", "Phone Repair Professional", "Certified: May 2025"],
    full: [
        "Certificate of Completion",
        OWNER,
        "Professional Phone Repair Technician",
        "Issued by EPI - May 2025",
    ],
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
    pub price: &'static str,
    pub features: [&'static str; 4],
}

pub const SERVICES: [Service; 3] = [
    Service {
        title: "Website Development",
        description: "Custom responsive websites with modern design and optimal performance.",
        price: "Starting from $200",
        features: ["Responsive Design", "SEO Optimized", "Fast Loading", "Custom Animations"],
    },
    Service {
        title: "Phone Consulting",
        description: "Expert advice on phone repairs, purchases, and technical issues.",
        price: "Starting from $25/hr",
        features: [
            "Hardware Diagnosis",
            "Software Troubleshooting",
            "Purchase Advice",
            "Repair Guidance",
        ],
    },
    Service {
        title: "Tech Support",
        description: "General technology support and consultation for businesses and individuals.",
        price: "Starting from $20/hr",
        features: [
            "Remote Support",
            "Setup Assistance",
            "Training Sessions",
            "Ongoing Maintenance",
        ],
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQS: [Faq; 5] = [
    Faq {
        question: "How do I get started with a project?",
        answer: "Simply reach out through the contact form or any of my social channels. We'll schedule a consultation to discuss your needs, timeline, and budget.",
    },
    Faq {
        question: "What is your typical turnaround time?",
        answer: "Turnaround varies by project complexity. Simple websites take 1-2 weeks, while more complex applications may take 4-8 weeks. I'll provide an accurate estimate during our initial consultation.",
    },
    Faq {
        question: "Do you offer ongoing maintenance?",
        answer: "Yes! I offer monthly maintenance packages to keep your website or application running smoothly with regular updates, security patches, and performance optimization.",
    },
    Faq {
        question: "What payment methods do you accept?",
        answer: "I accept bank transfers, mobile payments (KBZ Pay, Wave Pay), and various international payment methods. A 50% deposit is required to start, with the remainder due upon completion.",
    },
    Faq {
        question: "Can you work with my existing website?",
        answer: "Absolutely! I can help improve, redesign, or add features to your existing website. I'll review your current setup and provide recommendations during our consultation.",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resource {
    pub name: &'static str,
    pub description: &'static str,
    pub url: &'static str,
    pub category: &'static str,
}

pub const RESOURCES: [Resource; 10] = [
    Resource {
        name: "MDN Web Docs",
        description: "Comprehensive documentation for web technologies",
        url: "https://developer.mozilla.org",
        category: "Documentation",
    },
    Resource {
        name: "GitHub",
        description: "World's largest code hosting platform",
        url: "https://github.com",
        category: "Development",
    },
    Resource {
        name: "Stack Overflow",
        description: "Q&A community for developers",
        url: "https://stackoverflow.com",
        category: "Community",
    },
    Resource {
        name: "freeCodeCamp",
        description: "Free coding bootcamp and certifications",
        url: "https://freecodecamp.org",
        category: "Learning",
    },
    Resource {
        name: "Codecademy",
        description: "Interactive coding courses",
        url: "https://codecademy.com",
        category: "Learning",
    },
    Resource {
        name: "CSS-Tricks",
        description: "Daily articles about CSS and web design",
        url: "https://css-tricks.com",
        category: "Design",
    },
    Resource {
        name: "W3Schools",
        description: "Web development tutorials and references",
        url: "https://w3schools.com",
        category: "Learning",
    },
    Resource {
        name: "Dev.to",
        description: "Community of software developers",
        url: "https://dev.to",
        category: "Community",
    },
    Resource {
        name: "Smashing Magazine",
        description: "Web design and development articles",
        url: "https://smashingmagazine.com",
        category: "Design",
    },
    Resource {
        name: "Frontend Mentor",
        description: "Real-world frontend challenges",
        url: "https://frontendmentor.io",
        category: "Practice",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactChannel {
    pub label: &'static str,
    pub value: &'static str,
    pub href: &'static str,
}

pub const CONTACT_CHANNELS: [ContactChannel; 6] = [
    ContactChannel {
        label: "Email",
        value: "mgphoechit770@gmail.com",
        href: "mailto:mgphoechit770@gmail.com",
    },
    ContactChannel {
        label: "WhatsApp",
        value: "+959670503500",
        href: "https://wa.me/959670503500",
    },
    ContactChannel {
        label: "Telegram",
        value: "@Axcoc7",
        href: "https://t.me/Axcoc7",
    },
    ContactChannel {
        label: "Facebook",
        value: "Mg Phoe Chit",
        href: "https://facebook.com",
    },
    ContactChannel {
        label: "Phone",
        value: "09670503500",
        href: "tel:09670503500",
    },
    ContactChannel {
        label: "Viber",
        value: "+09667746550",
        href: "viber://chat?number=+09667746550",
    },
];

pub const FOOTER_TAGLINE: &str = "Crafted with passion for technology and innovation";

#[must_use]
pub fn footer_notice() -> String {
    format!("© 2025 {OWNER}")
}

/// Text placed on the clipboard when a project is shared.
#[must_use]
pub fn share_text(title: &str, url: &str) -> String {
    format!("Check out {title} by {OWNER} - {url}")
}

#[cfg(test)]
mod tests {
    use super::{PROJECT_CARD_COUNT, SKILLS, footer_notice, project_cards, share_text};

    #[test]
    fn cards_are_completed_then_future() {
        let titles: Vec<_> = project_cards().map(|p| p.title).collect();
        assert_eq!(titles.len(), PROJECT_CARD_COUNT);
        assert_eq!(titles[0], "TMHD7");
        assert_eq!(titles[3], "Music Hub App");
    }

    #[test]
    fn skill_levels_are_percentages() {
        assert!(SKILLS.iter().all(|skill| skill.level <= 100));
    }

    #[test]
    fn share_and_footer_text() {
        assert_eq!(
            share_text("TMHD7", "https://mgphoechit.dev"),
            "Check out TMHD7 by Mg Phoe Chit - https://mgphoechit.dev"
        );
        assert_eq!(footer_notice(), "© 2025 Mg Phoe Chit");
    }
}
