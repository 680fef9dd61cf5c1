use super::{badge, header, list_card, muted, plain};
use crate::theme::Palette;
use engine::catalog::agents::{AGENTS, PENDING_APPROVALS, active_count};
use engine::controls::AgentControls;
use tuirealm::props::{Style, TextModifiers};
use tuirealm::ratatui::Frame;
use tuirealm::ratatui::layout::{Constraint, Layout, Rect};
use tuirealm::ratatui::text::{Line, Span};

pub fn render(frame: &mut Frame, area: Rect, palette: &Palette, controls: &AgentControls) {
    let body = header(
        frame,
        area,
        "Agents",
        &format!(
            "{} of {} agents active · {} approvals waiting",
            active_count(),
            AGENTS.len(),
            PENDING_APPROVALS.len()
        ),
        palette,
    );

    let [agents, approvals] =
        Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)]).areas(body);

    list_card(frame, agents, "AI Agents", agent_lines(controls, palette), palette);
    list_card(
        frame,
        approvals,
        "Pending Approvals",
        approval_lines(palette),
        palette,
    );
}

fn agent_lines(controls: &AgentControls, palette: &Palette) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (index, agent) in AGENTS.iter().enumerate() {
        let expanded = controls.expanded() == Some(index);
        let marker = if expanded {
            "▾ "
        } else if index == controls.cursor() {
            "▸ "
        } else {
            "  "
        };
        let name_style = if index == controls.cursor() {
            Style::default()
                .fg(palette.accent)
                .add_modifier(TextModifiers::BOLD)
        } else {
            Style::default().fg(palette.text)
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{marker}{}", agent.name), name_style),
            Span::raw(" "),
            badge(agent.status.label(), agent.status.tone(), palette),
        ]));
        lines.push(Line::from(vec![
            muted(format!("    {} · ", agent.role), palette),
            badge(agent.performance.label(), agent.performance.tone(), palette),
            muted(
                format!(
                    " · {} tasks · {}",
                    agent.tasks_completed, agent.last_active
                ),
                palette,
            ),
        ]));
        if expanded {
            lines.push(Line::from(plain("    Permissions:", palette)));
            lines.extend(
                agent
                    .permissions
                    .iter()
                    .map(|permission| Line::from(muted(format!("      • {permission}"), palette))),
            );
        }
    }
    lines
}

fn approval_lines(palette: &Palette) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for approval in &PENDING_APPROVALS {
        lines.push(Line::from(vec![
            badge(approval.priority.label(), approval.priority.tone(), palette),
            Span::raw(" "),
            plain(approval.action, palette),
        ]));
        lines.push(Line::from(muted(
            format!(
                "  {} · {} · {}",
                approval.campaign, approval.agent, approval.requested
            ),
            palette,
        )));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::sections::test_support::render_to_text;
    use engine::Theme;

    #[test]
    fn test_renders_agents_and_approvals() {
        let palette = Palette::for_theme(Theme::Light);
        let controls = AgentControls::default();
        let text = render_to_text(160, 30, |f| render(f, f.area(), &palette, &controls));
        assert!(text.contains("2 of 4 agents active"));
        assert!(text.contains("Quality Assurance Bot"));
        assert!(text.contains("[inactive]"));
        assert!(text.contains("Adjust budget allocation"));
        assert!(!text.contains("Permissions:"));
    }

    #[test]
    fn test_expanded_agent_lists_permissions() {
        let palette = Palette::for_theme(Theme::Dark);
        let mut controls = AgentControls::default();
        controls.next_agent();
        controls.toggle();
        let text = render_to_text(160, 36, |f| render(f, f.area(), &palette, &controls));
        assert!(text.contains("Permissions:"));
        for permission in AGENTS[1].permissions {
            assert!(text.contains(permission), "missing {permission}");
        }
    }
}
