//! Section identifiers and the shell that tracks which one is shown.

use serde::Serialize;
use std::fmt;

/// One of the eight top-level views reachable from the navigation rail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Strategy,
    #[default]
    Dashboard,
    Creator,
    BrandKit,
    Simulations,
    Agents,
    Performance,
    Admin,
}

impl Section {
    /// Navigation rail order.
    pub const ALL: [Section; 8] = [
        Section::Strategy,
        Section::Dashboard,
        Section::Creator,
        Section::BrandKit,
        Section::Simulations,
        Section::Agents,
        Section::Performance,
        Section::Admin,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Section::Strategy => "strategy",
            Section::Dashboard => "dashboard",
            Section::Creator => "creator",
            Section::BrandKit => "brandkit",
            Section::Simulations => "simulations",
            Section::Agents => "agents",
            Section::Performance => "performance",
            Section::Admin => "admin",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Strategy => "Strategy Studio",
            Section::Dashboard => "Dashboard",
            Section::Creator => "Creator Studio",
            Section::BrandKit => "Brand Kit",
            Section::Simulations => "Simulations",
            Section::Agents => "Agents",
            Section::Performance => "Performance Cockpit",
            Section::Admin => "Admin Controls",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Section::Strategy => "◎",
            Section::Dashboard => "▤",
            Section::Creator => "✦",
            Section::BrandKit => "◆",
            Section::Simulations => "≋",
            Section::Agents => "☺",
            Section::Performance => "↗",
            Section::Admin => "⛨",
        }
    }

    /// Exact identifier lookup; `None` for anything unrecognized.
    pub fn from_id(id: &str) -> Option<Section> {
        Self::ALL.into_iter().find(|section| section.id() == id)
    }

    /// Identifier lookup with the navigation fallback: unknown ids resolve to
    /// [`Section::Dashboard`].
    pub fn from_id_or_default(id: &str) -> Section {
        Self::from_id(id).unwrap_or_else(|| {
            log::debug!("Unknown section '{id}', falling back to dashboard");
            Section::default()
        })
    }

    /// Position in [`Section::ALL`].
    pub fn index(self) -> usize {
        Self::ALL
            .iter()
            .position(|section| *section == self)
            .unwrap_or(0)
    }

    pub fn from_index(index: usize) -> Option<Section> {
        Self::ALL.get(index).copied()
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Owns the active section. Starts on the dashboard; nothing persists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewShell {
    active: Section,
}

impl ViewShell {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select by identifier. Never fails: unknown ids show the dashboard.
    pub fn select_section(&mut self, id: &str) {
        self.select(Section::from_id_or_default(id));
    }

    pub fn select(&mut self, section: Section) {
        if self.active != section {
            log::info!("Section changed: {} -> {}", self.active, section);
        }
        self.active = section;
    }

    pub fn active_section(&self) -> Section {
        self.active
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::{assert_none, assert_some_eq};

    #[test]
    fn test_initial_section_is_dashboard() {
        assert_eq!(ViewShell::new().active_section(), Section::Dashboard);
    }

    #[test]
    fn test_select_known_section() {
        let mut shell = ViewShell::new();
        shell.select_section("agents");
        assert_eq!(shell.active_section(), Section::Agents);
        shell.select_section("dashboard");
        assert_eq!(shell.active_section(), Section::Dashboard);
    }

    #[test]
    fn test_unknown_section_falls_back_to_dashboard() {
        let mut shell = ViewShell::new();
        shell.select(Section::Admin);
        shell.select_section("not-a-real-section");
        assert_eq!(shell.active_section(), Section::Dashboard);
    }

    #[test]
    fn test_ids_are_case_sensitive() {
        assert_none!(Section::from_id("Dashboard"));
        assert_none!(Section::from_id("brand-kit"));
        assert_some_eq!(Section::from_id("brandkit"), Section::BrandKit);
    }

    #[test]
    fn test_index_round_trip() {
        for (i, section) in Section::ALL.into_iter().enumerate() {
            assert_eq!(section.index(), i);
            assert_some_eq!(Section::from_index(i), section);
        }
        assert_none!(Section::from_index(Section::ALL.len()));
    }

    #[test]
    fn test_rail_order_matches_identifiers() {
        let ids: Vec<&str> = Section::ALL.iter().map(|s| s.id()).collect();
        assert_eq!(
            ids,
            vec![
                "strategy",
                "dashboard",
                "creator",
                "brandkit",
                "simulations",
                "agents",
                "performance",
                "admin"
            ]
        );
    }
}
