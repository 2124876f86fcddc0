use std::{fmt, str::FromStr};

use super::NavError;

/// The page's sections, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SectionId {
    Hero,
    About,
    Education,
    Projects,
    Skills,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 6] = [
        Self::Hero,
        Self::About,
        Self::Education,
        Self::Projects,
        Self::Skills,
        Self::Contact,
    ];

    /// The element id the section is rendered under.
    pub fn anchor(self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::About => "about",
            Self::Education => "education",
            Self::Projects => "projects",
            Self::Skills => "skills",
            Self::Contact => "contact",
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.anchor())
    }
}

impl FromStr for SectionId {
    type Err = NavError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|id| id.anchor() == s)
            .ok_or_else(|| NavError::MissingAnchor(s.to_string()))
    }
}

/// Vertical extent of an element's bounding box, relative to the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub top: f64,
    pub bottom: f64,
}

impl Rect {
    pub fn spans(&self, line: f64) -> bool {
        self.top <= line && self.bottom >= line
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub section: SectionId,
}

pub static NAV_ITEMS: [NavItem; 6] = [
    NavItem {
        label: "Home",
        section: SectionId::Hero,
    },
    NavItem {
        label: "About",
        section: SectionId::About,
    },
    NavItem {
        label: "Education",
        section: SectionId::Education,
    },
    NavItem {
        label: "Projects",
        section: SectionId::Projects,
    },
    NavItem {
        label: "Skills",
        section: SectionId::Skills,
    },
    NavItem {
        label: "Contact",
        section: SectionId::Contact,
    },
];

/// The footer skips Home; it has its own back-to-top button.
pub fn footer_links() -> &'static [NavItem] {
    &NAV_ITEMS[1..]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_round_trip() {
        for id in SectionId::ALL {
            assert_eq!(id.anchor().parse::<SectionId>(), Ok(id));
        }
        assert_eq!(
            "doesNotExist".parse::<SectionId>(),
            Err(NavError::MissingAnchor("doesNotExist".to_string()))
        );
        // anchors are case sensitive, like element ids
        assert!("Projects".parse::<SectionId>().is_err());
    }

    #[test]
    fn test_declared_order() {
        let mut sorted = SectionId::ALL;
        sorted.sort();
        assert_eq!(sorted, SectionId::ALL);
        assert_eq!(
            NAV_ITEMS.map(|item| item.section),
            SectionId::ALL,
            "nav lists every section in page order"
        );
        assert!(footer_links().iter().all(|l| l.section != SectionId::Hero));
        assert_eq!(footer_links().len(), NAV_ITEMS.len() - 1);
    }

    #[test]
    fn test_rect_spans_inclusive() {
        let rect = Rect {
            top: 100.0,
            bottom: 100.0,
        };
        assert!(rect.spans(100.0));
        assert!(!rect.spans(100.5));
        assert!(Rect {
            top: -50.0,
            bottom: 400.0
        }
        .spans(100.0));
    }
}
