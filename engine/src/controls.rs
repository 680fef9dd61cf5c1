//! # View Controls
//!
//! Interactive state owned by individual sections: the performance chart's
//! range and metric, the admin tab, the expanded agent card and the creator
//! studio's type, tool and brand kit panel.
//!
//! Every section reacts to the same three generic actions ([`ViewAction`]);
//! [`ViewControls::apply`] decides what each one means for the active section.
//! Like the active section, none of this survives a restart.

use crate::Section;
use crate::catalog::agents::AGENTS;
use crate::catalog::creator::{CreativeKind, TOOLS};
use std::fmt;

/// Section-local action bound to a key. Sections without interactive
/// controls ignore all of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewAction {
    /// Step the primary control
    Next,
    /// Step the secondary control
    NextAlt,
    /// Flip the section's toggle
    Toggle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeRange {
    Week,
    #[default]
    Month,
    Quarter,
    Year,
}

impl TimeRange {
    pub const ALL: [TimeRange; 4] = [
        TimeRange::Week,
        TimeRange::Month,
        TimeRange::Quarter,
        TimeRange::Year,
    ];

    pub fn label(self) -> &'static str {
        match self {
            TimeRange::Week => "7d",
            TimeRange::Month => "30d",
            TimeRange::Quarter => "90d",
            TimeRange::Year => "1y",
        }
    }

    pub fn next(self) -> Self {
        match self {
            TimeRange::Week => TimeRange::Month,
            TimeRange::Month => TimeRange::Quarter,
            TimeRange::Quarter => TimeRange::Year,
            TimeRange::Year => TimeRange::Week,
        }
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChartMetric {
    #[default]
    Impressions,
    Clicks,
    Conversions,
    Spend,
}

impl ChartMetric {
    pub const ALL: [ChartMetric; 4] = [
        ChartMetric::Impressions,
        ChartMetric::Clicks,
        ChartMetric::Conversions,
        ChartMetric::Spend,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ChartMetric::Impressions => "impressions",
            ChartMetric::Clicks => "clicks",
            ChartMetric::Conversions => "conversions",
            ChartMetric::Spend => "spend",
        }
    }

    pub fn next(self) -> Self {
        match self {
            ChartMetric::Impressions => ChartMetric::Clicks,
            ChartMetric::Clicks => ChartMetric::Conversions,
            ChartMetric::Conversions => ChartMetric::Spend,
            ChartMetric::Spend => ChartMetric::Impressions,
        }
    }
}

impl fmt::Display for ChartMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AdminTab {
    #[default]
    Overview,
    Users,
    Security,
    System,
}

impl AdminTab {
    pub const ALL: [AdminTab; 4] = [
        AdminTab::Overview,
        AdminTab::Users,
        AdminTab::Security,
        AdminTab::System,
    ];

    pub fn label(self) -> &'static str {
        match self {
            AdminTab::Overview => "Overview",
            AdminTab::Users => "User Management",
            AdminTab::Security => "Security",
            AdminTab::System => "System Settings",
        }
    }

    pub fn next(self) -> Self {
        match self {
            AdminTab::Overview => AdminTab::Users,
            AdminTab::Users => AdminTab::Security,
            AdminTab::Security => AdminTab::System,
            AdminTab::System => AdminTab::Overview,
        }
    }
}

/// Performance cockpit chart selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PerformanceControls {
    pub range: TimeRange,
    pub metric: ChartMetric,
}

impl PerformanceControls {
    pub fn chart_caption(&self) -> String {
        format!("Displaying {} for {}", self.metric, self.range)
    }
}

/// Agent list cursor and the one card that may be expanded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AgentControls {
    cursor: usize,
    expanded: Option<usize>,
}

impl AgentControls {
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn expanded(&self) -> Option<usize> {
        self.expanded
    }

    /// Move the cursor down the agent list, wrapping at the end.
    pub fn next_agent(&mut self) {
        self.cursor = (self.cursor + 1) % AGENTS.len();
    }

    /// Expand the agent under the cursor, or collapse it when it is already
    /// expanded. Expanding one card collapses any other.
    pub fn toggle(&mut self) {
        self.expanded = if self.expanded == Some(self.cursor) {
            None
        } else {
            Some(self.cursor)
        };
    }
}

/// Creator studio workspace selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreatorControls {
    pub kind: CreativeKind,
    tool: usize,
    pub show_brand_kit: bool,
}

impl Default for CreatorControls {
    fn default() -> Self {
        Self {
            kind: CreativeKind::Image,
            tool: 0,
            show_brand_kit: false,
        }
    }
}

impl CreatorControls {
    pub fn tool(&self) -> &'static str {
        TOOLS[self.tool]
    }

    pub fn tool_index(&self) -> usize {
        self.tool
    }

    pub fn next_kind(&mut self) {
        let index = CreativeKind::ALL
            .iter()
            .position(|k| *k == self.kind)
            .unwrap_or(0);
        self.kind = CreativeKind::ALL[(index + 1) % CreativeKind::ALL.len()];
    }

    pub fn next_tool(&mut self) {
        self.tool = (self.tool + 1) % TOOLS.len();
    }
}

/// All section-local controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewControls {
    pub performance: PerformanceControls,
    pub admin_tab: AdminTab,
    pub agents: AgentControls,
    pub creator: CreatorControls,
}

impl ViewControls {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply `action` to the controls of `section`. Returns `true` when
    /// something changed.
    pub fn apply(&mut self, section: Section, action: ViewAction) -> bool {
        match (section, action) {
            (Section::Performance, ViewAction::Next) => {
                self.performance.range = self.performance.range.next();
            }
            (Section::Performance, ViewAction::NextAlt) => {
                self.performance.metric = self.performance.metric.next();
            }
            (Section::Admin, ViewAction::Next) => {
                self.admin_tab = self.admin_tab.next();
            }
            (Section::Agents, ViewAction::Next) => self.agents.next_agent(),
            (Section::Agents, ViewAction::Toggle) => self.agents.toggle(),
            (Section::Creator, ViewAction::Next) => self.creator.next_kind(),
            (Section::Creator, ViewAction::NextAlt) => self.creator.next_tool(),
            (Section::Creator, ViewAction::Toggle) => {
                self.creator.show_brand_kit = !self.creator.show_brand_kit;
            }
            _ => {
                log::debug!("{action:?} has no effect in {section}");
                return false;
            }
        }
        log::debug!("{action:?} applied in {section}");
        true
    }
}
