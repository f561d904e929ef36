use std::fmt;

use folio_types::Threshold;

/// Page sections in scroll order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SectionId {
    Hero,
    Projects,
    Skills,
    Services,
    Resources,
    Contact,
    Footer,
}

/// How a section becomes visible.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RevealPolicy {
    /// Shown as soon as it mounts.
    Immediate,
    /// One latch for the whole section.
    Section(Threshold),
    /// One latch per card, indexed in display order.
    Cards(Threshold),
    /// Never hidden and never observed.
    Static,
}

impl SectionId {
    pub const ALL: [Self; 7] = [
        Self::Hero,
        Self::Projects,
        Self::Skills,
        Self::Services,
        Self::Resources,
        Self::Contact,
        Self::Footer,
    ];

    /// Header navigation entries, bound to keys `1`..`6`.
    pub const NAV: [Self; 6] = [
        Self::Hero,
        Self::Projects,
        Self::Skills,
        Self::Services,
        Self::Resources,
        Self::Contact,
    ];

    #[must_use]
    pub const fn nav_label(self) -> &'static str {
        match self {
            Self::Hero => "Home",
            Self::Projects => "Projects",
            Self::Skills => "Skills",
            Self::Services => "Services",
            Self::Resources => "Resources",
            Self::Contact => "Contact",
            Self::Footer => "Top",
        }
    }

    #[must_use]
    pub const fn heading(self) -> &'static str {
        match self {
            Self::Hero => "MG PHOE CHIT",
            Self::Projects => "Projects & Portfolio",
            Self::Skills => "Skills & Expertise",
            Self::Services => "Services & Pricing",
            Self::Resources => "Recommended Resources",
            Self::Contact => "Get In Touch",
            Self::Footer => "",
        }
    }

    /// The monospace kicker above the heading.
    #[must_use]
    pub const fn tagline(self) -> Option<&'static str> {
        match self {
            Self::Projects => Some("// DATA_STREAM"),
            Self::Skills => Some("// EXPERTISE_MATRIX"),
            Self::Services => Some("// SERVICES_MATRIX"),
            Self::Resources => Some("// TECH_ESSENTIALS"),
            Self::Contact => Some("// GOLD_GREEN_HUB"),
            Self::Hero | Self::Footer => None,
        }
    }

    #[must_use]
    pub const fn subtitle(self) -> Option<&'static str> {
        match self {
            Self::Resources => Some(
                "Curated collection of essential websites for developers and tech enthusiasts",
            ),
            Self::Contact => Some(
                "Ready to start a project or have questions? Reach out through any of these channels",
            ),
            _ => None,
        }
    }

    #[must_use]
    pub fn reveal_policy(self) -> RevealPolicy {
        match self {
            Self::Hero => RevealPolicy::Immediate,
            Self::Projects => RevealPolicy::Cards(Threshold::SECTION),
            Self::Skills | Self::Services | Self::Resources => {
                RevealPolicy::Section(Threshold::SECTION)
            }
            Self::Contact => RevealPolicy::Section(Threshold::DEFAULT),
            Self::Footer => RevealPolicy::Static,
        }
    }

    /// Section for a `1`-based nav key.
    #[must_use]
    pub fn from_nav_digit(digit: char) -> Option<Self> {
        let index = digit.to_digit(10)?.checked_sub(1)?;
        Self::NAV.get(usize::try_from(index).ok()?).copied()
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.nav_label())
    }
}

#[cfg(test)]
mod tests {
    use super::{RevealPolicy, SectionId};
    use folio_types::Threshold;

    #[test]
    fn nav_digits_map_in_order() {
        assert_eq!(SectionId::from_nav_digit('1'), Some(SectionId::Hero));
        assert_eq!(SectionId::from_nav_digit('6'), Some(SectionId::Contact));
        assert_eq!(SectionId::from_nav_digit('0'), None);
        assert_eq!(SectionId::from_nav_digit('7'), None);
        assert_eq!(SectionId::from_nav_digit('x'), None);
    }

    #[test]
    fn contact_uses_the_default_threshold() {
        assert_eq!(
            SectionId::Contact.reveal_policy(),
            RevealPolicy::Section(Threshold::DEFAULT)
        );
        assert_eq!(
            SectionId::Projects.reveal_policy(),
            RevealPolicy::Cards(Threshold::SECTION)
        );
    }
}
