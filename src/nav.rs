/// Scroll offset (px) above which the navigation bar switches to its compact look.
pub const COMPACT_THRESHOLD: f64 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Home,
    About,
    Work,
    Contact,
}

impl SectionId {
    /// Page order, top to bottom.
    pub const ALL: [SectionId; 4] = [Self::Home, Self::About, Self::Work, Self::Contact];

    /// The DOM id of the section element.
    pub fn dom_id(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Work => "work",
            Self::Contact => "contact",
        }
    }

    pub fn from_dom_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.dom_id() == id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationItem {
    pub label: &'static str,
    pub target: SectionId,
    pub icon: &'static str,
}

impl NavigationItem {
    pub fn href(&self) -> String {
        format!("#{}", self.target.dom_id())
    }

    pub fn is_active(&self, active: Option<SectionId>) -> bool {
        active == Some(self.target)
    }
}

pub static NAV_ITEMS: [NavigationItem; 4] = [
    NavigationItem {
        label: "Home",
        target: SectionId::Home,
        icon: "⌂",
    },
    NavigationItem {
        label: "About",
        target: SectionId::About,
        icon: "☺",
    },
    NavigationItem {
        label: "Work",
        target: SectionId::Work,
        icon: "▣",
    },
    NavigationItem {
        label: "Contact",
        target: SectionId::Contact,
        icon: "✉",
    },
];

/// Visual density of the navigation bar, driven by the scroll offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Density {
    #[default]
    Expanded,
    Compact,
}

impl Density {
    pub fn from_offset(offset: f64) -> Self {
        if offset > COMPACT_THRESHOLD {
            Self::Compact
        } else {
            Self::Expanded
        }
    }

    pub fn is_compact(self) -> bool {
        matches!(self, Self::Compact)
    }
}
