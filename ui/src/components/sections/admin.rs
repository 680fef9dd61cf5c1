use super::{badge, header, list_card, metric_cards, muted, plain, progress_bar, selector};
use crate::theme::Palette;
use engine::catalog::Tone;
use engine::catalog::admin::{
    GRAPH_STATS, Health, RECENT_ACTIVITY, RESOURCE_USAGE, ROLES, SECURITY_MONITORING,
    SECURITY_SETTINGS, SYSTEM_HEALTH, SYSTEM_SETTINGS, Stat, USER_STATS, overall_health,
};
use engine::controls::AdminTab;
use tuirealm::props::Style;
use tuirealm::ratatui::Frame;
use tuirealm::ratatui::layout::{Constraint, Layout, Rect};
use tuirealm::ratatui::text::{Line, Span};

const BAR_WIDTH: usize = 20;

pub fn render(frame: &mut Frame, area: Rect, palette: &Palette, tab: AdminTab) {
    let body = header(
        frame,
        area,
        "Admin Controls",
        "System health, users, security and settings",
        palette,
    );

    let [tabs, content] =
        Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(body);

    list_card(frame, tabs, "Sections", tab_lines(tab, palette), palette);
    match tab {
        AdminTab::Overview => render_overview(frame, content, palette),
        AdminTab::Users => render_users(frame, content, palette),
        AdminTab::Security => render_security(frame, content, palette),
        AdminTab::System => render_system(frame, content, palette),
    }
}

fn tab_lines(tab: AdminTab, palette: &Palette) -> Vec<Line<'static>> {
    vec![Line::from(selector(
        AdminTab::ALL.map(AdminTab::label),
        tab.label(),
        palette,
    ))]
}

fn render_overview(frame: &mut Frame, area: Rect, palette: &Palette) {
    let [top, graph, activity] = Layout::vertical([
        Constraint::Length(7),
        Constraint::Length(4),
        Constraint::Min(6),
    ])
    .areas(area);
    let [health, resources] =
        Layout::horizontal([Constraint::Percentage(45), Constraint::Percentage(55)]).areas(top);

    list_card(frame, health, "System Health", health_lines(palette), palette);
    list_card(
        frame,
        resources,
        "Resource Usage",
        resource_lines(palette),
        palette,
    );
    metric_cards(frame, graph, &GRAPH_STATS, palette);
    list_card(
        frame,
        activity,
        "Recent Activity",
        activity_lines(palette),
        palette,
    );
}

fn render_users(frame: &mut Frame, area: Rect, palette: &Palette) {
    let [stats, roles] =
        Layout::vertical([Constraint::Length(5), Constraint::Min(6)]).areas(area);
    list_card(frame, stats, "Users", stat_lines(&USER_STATS, palette), palette);

    let lines = ROLES
        .iter()
        .map(|role| {
            Line::from(vec![
                plain(format!("{:<10}", role.role), palette),
                muted(format!("{} users", role.users), palette),
            ])
        })
        .collect();
    list_card(frame, roles, "Role-Based Access Control", lines, palette);
}

fn render_security(frame: &mut Frame, area: Rect, palette: &Palette) {
    let [settings, monitoring] =
        Layout::vertical([Constraint::Length(5), Constraint::Min(4)]).areas(area);

    let lines = SECURITY_SETTINGS
        .iter()
        .map(|safeguard| {
            Line::from(vec![
                badge("on", Tone::Positive, palette),
                Span::raw(" "),
                plain(format!("{:<28}", safeguard.name), palette),
                muted(safeguard.detail, palette),
            ])
        })
        .collect();
    list_card(frame, settings, "Security Settings", lines, palette);
    list_card(
        frame,
        monitoring,
        "Security Monitoring",
        stat_lines(&SECURITY_MONITORING, palette),
        palette,
    );
}

fn render_system(frame: &mut Frame, area: Rect, palette: &Palette) {
    let [settings, resources] =
        Layout::vertical([Constraint::Length(5), Constraint::Min(5)]).areas(area);

    let lines = SYSTEM_SETTINGS
        .iter()
        .map(|setting| {
            Line::from(vec![
                badge(setting.state.label(), setting.state.tone(), palette),
                Span::raw(" "),
                plain(format!("{:<18}", setting.name), palette),
                muted(setting.detail, palette),
            ])
        })
        .collect();
    list_card(frame, settings, "System Configuration", lines, palette);
    list_card(
        frame,
        resources,
        "Resource Usage",
        resource_lines(palette),
        palette,
    );
}

fn stat_lines(stats: &[Stat], palette: &Palette) -> Vec<Line<'static>> {
    stats
        .iter()
        .map(|stat| {
            Line::from(vec![
                plain(format!("{:<24}", stat.title), palette),
                plain(format!("{:>4}  ", stat.value), palette),
                muted(stat.note, palette),
            ])
        })
        .collect()
}

fn health_lines(palette: &Palette) -> Vec<Line<'static>> {
    let overall = overall_health();
    let mut lines = vec![Line::from(vec![
        plain("Overall ", palette),
        badge(overall.label(), overall.tone(), palette),
    ])];
    lines.extend(SYSTEM_HEALTH.iter().map(|subsystem| {
        let dot = if subsystem.health == Health::Healthy {
            "●"
        } else {
            "▲"
        };
        Line::from(vec![
            Span::styled(
                format!("{dot} "),
                Style::default().fg(palette.tone(subsystem.health.tone())),
            ),
            plain(format!("{:<10}", subsystem.name), palette),
            badge(subsystem.health.label(), subsystem.health.tone(), palette),
        ])
    }));
    lines
}

fn usage_tone(percent: u16) -> Tone {
    match percent {
        0..60 => Tone::Positive,
        60..85 => Tone::Caution,
        _ => Tone::Negative,
    }
}

fn resource_lines(palette: &Palette) -> Vec<Line<'static>> {
    RESOURCE_USAGE
        .iter()
        .map(|usage| {
            Line::from(vec![
                plain(format!("{:<8}", usage.name), palette),
                Span::styled(
                    progress_bar(usage.percent, BAR_WIDTH),
                    Style::default().fg(palette.tone(usage_tone(usage.percent))),
                ),
                muted(format!(" {:>3}%", usage.percent), palette),
            ])
        })
        .collect()
}

fn activity_lines(palette: &Palette) -> Vec<Line<'static>> {
    RECENT_ACTIVITY
        .iter()
        .map(|activity| {
            Line::from(vec![
                badge(activity.kind.label(), activity.kind.tone(), palette),
                Span::raw(" "),
                plain(activity.action, palette),
                muted(format!(" · {} · {}", activity.user, activity.when), palette),
            ])
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::sections::test_support::render_to_text;
    use engine::Theme;

    #[test]
    fn test_usage_tone_thresholds() {
        assert_eq!(usage_tone(45), Tone::Positive);
        assert_eq!(usage_tone(62), Tone::Caution);
        assert_eq!(usage_tone(90), Tone::Negative);
    }

    #[test]
    fn test_renders_health_and_activity() {
        let palette = Palette::for_theme(Theme::Dark);
        let text = render_to_text(120, 34, |f| {
            render(f, f.area(), &palette, AdminTab::Overview)
        });
        assert!(text.contains("System Health"));
        assert!(text.contains("[warning]"));
        assert!(text.contains("62%"));
        assert!(text.contains("2,847"));
        assert!(text.contains("Database backup completed"));
    }

    #[test]
    fn test_each_tab_shows_its_own_content() {
        let palette = Palette::for_theme(Theme::Light);
        let cases = [
            (AdminTab::Users, "Role-Based Access Control", "Analyst"),
            (AdminTab::Security, "Two-Factor Authentication", "Failed Login Attempts"),
            (AdminTab::System, "Maintenance Mode", "[Disabled]"),
        ];
        for (tab, first, second) in cases {
            let text = render_to_text(120, 34, |f| render(f, f.area(), &palette, tab));
            assert!(text.contains(first), "{tab:?} should show {first}");
            assert!(text.contains(second), "{tab:?} should show {second}");
            assert!(!text.contains("Recent Activity"), "{tab:?} shows overview");
        }
    }
}
