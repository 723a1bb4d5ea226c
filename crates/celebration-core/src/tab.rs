//! Dashboard tab selection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown tab id: '{0}'")]
pub struct UnknownTab(pub String);

/// Sections of the airborne dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActiveTab {
    #[default]
    Metrics,
    Perks,
    Comms,
}

impl ActiveTab {
    /// All tabs in sidebar order.
    pub const ALL: [ActiveTab; 3] = [Self::Metrics, Self::Perks, Self::Comms];

    pub const fn id(self) -> &'static str {
        match self {
            Self::Metrics => "metrics",
            Self::Perks => "perks",
            Self::Comms => "comms",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Metrics => "Flight Metrics",
            Self::Perks => "First Class Perks",
            Self::Comms => "Crew Comms",
        }
    }
}

impl fmt::Display for ActiveTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ActiveTab {
    type Err = UnknownTab;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tab| tab.id() == s)
            .ok_or_else(|| UnknownTab(s.to_string()))
    }
}

/// Currently selected tab.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TabSelection {
    current: ActiveTab,
}

impl TabSelection {
    pub fn current(self) -> ActiveTab {
        self.current
    }

    /// Selects `tab`. Returns whether the selection changed.
    pub fn select(&mut self, tab: ActiveTab) -> bool {
        if self.current == tab {
            return false;
        }
        self.current = tab;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_metrics() {
        assert_eq!(TabSelection::default().current(), ActiveTab::Metrics);
    }

    #[test]
    fn test_last_selection_wins() {
        let mut tabs = TabSelection::default();
        assert!(tabs.select(ActiveTab::Perks));
        assert!(tabs.select(ActiveTab::Metrics));
        assert_eq!(tabs.current(), ActiveTab::Metrics);
    }

    #[test]
    fn test_reselect_is_idempotent() {
        let mut tabs = TabSelection::default();
        tabs.select(ActiveTab::Comms);
        let before = tabs;

        assert!(!tabs.select(ActiveTab::Comms));
        assert_eq!(tabs, before);
    }

    #[test]
    fn test_parse_ids() {
        assert_eq!("perks".parse::<ActiveTab>(), Ok(ActiveTab::Perks));
        assert_eq!(
            "cockpit".parse::<ActiveTab>(),
            Err(UnknownTab("cockpit".to_string()))
        );
        for tab in ActiveTab::ALL {
            assert_eq!(tab.to_string().parse::<ActiveTab>(), Ok(tab));
        }
    }
}
