use super::{Metric, Tone};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Health {
    Healthy,
    Warning,
    Error,
}

impl Health {
    pub fn label(self) -> &'static str {
        match self {
            Health::Healthy => "healthy",
            Health::Warning => "warning",
            Health::Error => "error",
        }
    }

    pub fn tone(self) -> Tone {
        match self {
            Health::Healthy => Tone::Positive,
            Health::Warning => Tone::Caution,
            Health::Error => Tone::Negative,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityKind {
    Security,
    System,
    Workflow,
}

impl ActivityKind {
    pub fn label(self) -> &'static str {
        match self {
            ActivityKind::Security => "security",
            ActivityKind::System => "system",
            ActivityKind::Workflow => "workflow",
        }
    }

    pub fn tone(self) -> Tone {
        match self {
            ActivityKind::Security => Tone::Negative,
            ActivityKind::System => Tone::Info,
            ActivityKind::Workflow => Tone::Neutral,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Subsystem {
    pub name: &'static str,
    pub health: Health,
}

#[derive(Debug, Clone, Copy)]
pub struct Activity {
    pub action: &'static str,
    pub user: &'static str,
    pub when: &'static str,
    pub kind: ActivityKind,
}

#[derive(Debug, Clone, Copy)]
pub struct ResourceUsage {
    pub name: &'static str,
    pub percent: u16,
}

pub const SYSTEM_HEALTH: [Subsystem; 4] = [
    Subsystem {
        name: "database",
        health: Health::Healthy,
    },
    Subsystem {
        name: "apis",
        health: Health::Healthy,
    },
    Subsystem {
        name: "agents",
        health: Health::Warning,
    },
    Subsystem {
        name: "storage",
        health: Health::Healthy,
    },
];

pub const RECENT_ACTIVITY: [Activity; 4] = [
    Activity {
        action: "Agent permissions updated",
        user: "Admin",
        when: "2 hours ago",
        kind: ActivityKind::Security,
    },
    Activity {
        action: "New knowledge graph node created",
        user: "System",
        when: "4 hours ago",
        kind: ActivityKind::System,
    },
    Activity {
        action: "Campaign approval workflow modified",
        user: "Manager",
        when: "6 hours ago",
        kind: ActivityKind::Workflow,
    },
    Activity {
        action: "Database backup completed",
        user: "System",
        when: "12 hours ago",
        kind: ActivityKind::System,
    },
];

pub const RESOURCE_USAGE: [ResourceUsage; 3] = [
    ResourceUsage {
        name: "CPU",
        percent: 45,
    },
    ResourceUsage {
        name: "Memory",
        percent: 62,
    },
    ResourceUsage {
        name: "Storage",
        percent: 38,
    },
];

/// Knowledge graph counters on the overview tab.
pub const GRAPH_STATS: [Metric; 3] = [
    Metric {
        title: "Total Nodes",
        value: "2,847",
        change: "+127 this week",
    },
    Metric {
        title: "Connections",
        value: "8,932",
        change: "+445 this week",
    },
    Metric {
        title: "Insights Generated",
        value: "156",
        change: "+23 this week",
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Stat {
    pub title: &'static str,
    pub value: &'static str,
    pub note: &'static str,
}

pub const USER_STATS: [Stat; 3] = [
    Stat {
        title: "Total Users",
        value: "24",
        note: "+3 this month",
    },
    Stat {
        title: "Active Sessions",
        value: "18",
        note: "75% online",
    },
    Stat {
        title: "Pending Approvals",
        value: "5",
        note: "Role assignments",
    },
];

#[derive(Debug, Clone, Copy)]
pub struct RoleCount {
    pub role: &'static str,
    pub users: u16,
}

pub const ROLES: [RoleCount; 4] = [
    RoleCount {
        role: "Admin",
        users: 3,
    },
    RoleCount {
        role: "Manager",
        users: 8,
    },
    RoleCount {
        role: "Analyst",
        users: 10,
    },
    RoleCount {
        role: "Viewer",
        users: 3,
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Safeguard {
    pub name: &'static str,
    pub detail: &'static str,
}

pub const SECURITY_SETTINGS: [Safeguard; 3] = [
    Safeguard {
        name: "Two-Factor Authentication",
        detail: "Enabled for all admin accounts",
    },
    Safeguard {
        name: "API Security",
        detail: "Rate limiting and authentication active",
    },
    Safeguard {
        name: "Data Encryption",
        detail: "AES-256 encryption for sensitive data",
    },
];

pub const SECURITY_MONITORING: [Stat; 2] = [
    Stat {
        title: "Failed Login Attempts",
        value: "12",
        note: "Last 24 hours",
    },
    Stat {
        title: "Active Sessions",
        value: "18",
        note: "Currently online",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingState {
    Enabled,
    Disabled,
    Configurable,
}

impl SettingState {
    pub fn label(self) -> &'static str {
        match self {
            SettingState::Enabled => "Enabled",
            SettingState::Disabled => "Disabled",
            SettingState::Configurable => "Configure",
        }
    }

    pub fn tone(self) -> Tone {
        match self {
            SettingState::Enabled => Tone::Positive,
            SettingState::Disabled => Tone::Neutral,
            SettingState::Configurable => Tone::Info,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SystemSetting {
    pub name: &'static str,
    pub detail: &'static str,
    pub state: SettingState,
}

pub const SYSTEM_SETTINGS: [SystemSetting; 3] = [
    SystemSetting {
        name: "Auto-scaling",
        detail: "Automatically scale resources based on demand",
        state: SettingState::Enabled,
    },
    SystemSetting {
        name: "Backup Schedule",
        detail: "Daily backups at 2:00 AM UTC",
        state: SettingState::Configurable,
    },
    SystemSetting {
        name: "Maintenance Mode",
        detail: "Temporarily disable public access",
        state: SettingState::Disabled,
    },
];

/// Worst health across all subsystems.
pub fn overall_health() -> Health {
    SYSTEM_HEALTH
        .iter()
        .map(|s| s.health)
        .max_by_key(|h| match h {
            Health::Healthy => 0,
            Health::Warning => 1,
            Health::Error => 2,
        })
        .unwrap_or(Health::Healthy)
}
