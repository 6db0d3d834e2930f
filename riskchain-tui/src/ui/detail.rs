//! Detail view — header with the computed average score, then the ordered
//! step chain.
//!
//! The chain is rendered by one data-driven step renderer invoked with a
//! layout direction: a horizontal row of cards with "→" connectors when the
//! terminal is wide enough, otherwise a vertical stack with "↓" connectors.
//! Same data, same semantics, pure layout variation.
//!
//! This view deliberately does not consult `selected_process`: the source
//! system ships exactly one chain and shows it for every selection.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use riskchain_core::{display_score, ProcessStep, ScoreBand};

use crate::app::AppState;
use crate::theme;

/// Card width in the horizontal layout, borders included.
const CARD_WIDTH: u16 = 26;
/// Connector column width between horizontal cards.
const ARROW_WIDTH: u16 = 3;
/// Card height in the vertical layout, borders included.
const CARD_HEIGHT: u16 = 8;

/// Layout direction for the step chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowDirection {
    Horizontal,
    Vertical,
}

/// Pick the chain layout from the available width.
pub fn flow_direction(width: u16, step_count: usize) -> FlowDirection {
    if step_count == 0 {
        return FlowDirection::Vertical;
    }
    let n = step_count as u16;
    let needed = n * CARD_WIDTH + (n - 1) * ARROW_WIDTH;
    if width >= needed {
        FlowDirection::Horizontal
    } else {
        FlowDirection::Vertical
    }
}

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(1)])
        .split(area);

    render_header(f, chunks[0], app);

    let steps = app.catalog.steps();
    match flow_direction(chunks[1].width, steps.len()) {
        FlowDirection::Horizontal => render_chain_horizontal(f, chunks[1], steps),
        FlowDirection::Vertical => render_chain_vertical(f, chunks[1], steps),
    }
}

fn render_header(f: &mut Frame, area: Rect, app: &AppState) {
    let avg = app.catalog.average_step_score();
    let avg_style = theme::score_style(ScoreBand::of(avg));
    let completed = app.catalog.completed_step_count();
    let total = app.catalog.steps().len();

    let lines = vec![
        Line::from(vec![
            Span::styled("← [Esc] Back to Dashboard", theme::muted()),
        ]),
        Line::from(vec![
            Span::styled("Raw Material Sourcing", theme::accent_bold()),
            Span::styled("  —  Procurement of raw materials from global suppliers", theme::muted()),
        ]),
        Line::from(vec![
            Span::styled("Average Risk Score: ", theme::muted()),
            Span::styled(display_score(avg), avg_style.add_modifier(Modifier::BOLD)),
            Span::styled(
                format!("   {completed}/{total} steps completed"),
                theme::muted(),
            ),
        ]),
    ];
    f.render_widget(Paragraph::new(lines), area);
}

/// The one step-card body, shared by both layout directions.
fn step_card_lines(step: &ProcessStep) -> Vec<Line<'_>> {
    let band = ScoreBand::of(step.risk_score);
    vec![
        Line::from(vec![
            Span::styled(theme::icon_glyph(step.icon), theme::score_style(band)),
            Span::raw(" "),
            Span::styled(step.title, theme::accent_bold()),
            Span::raw("  "),
            Span::styled(
                theme::icon_glyph(step.status.icon()),
                theme::status_style(step.status),
            ),
        ]),
        Line::from(Span::styled(step.description, theme::muted())),
        Line::from(vec![
            Span::styled("Risk Score ", theme::muted()),
            Span::styled(
                format!(" {} ", display_score(step.risk_score)),
                theme::score_badge_style(band),
            ),
        ]),
        Line::from(Span::styled(
            step.risk_explanation,
            theme::inert().add_modifier(Modifier::ITALIC),
        )),
    ]
}

fn step_card(f: &mut Frame, area: Rect, step: &ProcessStep) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(false));
    let para = Paragraph::new(step_card_lines(step))
        .block(block)
        .wrap(Wrap { trim: true });
    f.render_widget(para, area);
}

fn render_chain_horizontal(f: &mut Frame, area: Rect, steps: &[ProcessStep]) {
    let mut constraints: Vec<Constraint> = Vec::new();
    for i in 0..steps.len() {
        constraints.push(Constraint::Length(CARD_WIDTH));
        if i + 1 < steps.len() {
            constraints.push(Constraint::Length(ARROW_WIDTH));
        }
    }
    constraints.push(Constraint::Min(0));

    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (i, step) in steps.iter().enumerate() {
        step_card(f, cells[i * 2], step);
        if i + 1 < steps.len() {
            connector(f, cells[i * 2 + 1], "→");
        }
    }
}

fn render_chain_vertical(f: &mut Frame, area: Rect, steps: &[ProcessStep]) {
    let mut constraints: Vec<Constraint> = Vec::new();
    for i in 0..steps.len() {
        constraints.push(Constraint::Length(CARD_HEIGHT));
        if i + 1 < steps.len() {
            constraints.push(Constraint::Length(1));
        }
    }
    constraints.push(Constraint::Min(0));

    let cells = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (i, step) in steps.iter().enumerate() {
        step_card(f, cells[i * 2], step);
        if i + 1 < steps.len() {
            connector(f, cells[i * 2 + 1], "↓");
        }
    }
}

fn connector(f: &mut Frame, area: Rect, glyph: &str) {
    // Center the arrow in its cell.
    let pad_y = area.height / 2;
    let pad_x = area.width.saturating_sub(1) / 2;
    let mut text: Vec<Line> = (0..pad_y).map(|_| Line::from("")).collect();
    text.push(Line::from(vec![
        Span::raw(" ".repeat(pad_x as usize)),
        Span::styled(glyph.to_string(), theme::inert()),
    ]));
    f.render_widget(Paragraph::new(text), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wide_terminal_flows_horizontally() {
        // 6 cards: 6*26 + 5*3 = 171 columns needed.
        assert_eq!(flow_direction(171, 6), FlowDirection::Horizontal);
        assert_eq!(flow_direction(200, 6), FlowDirection::Horizontal);
    }

    #[test]
    fn narrow_terminal_stacks_vertically() {
        assert_eq!(flow_direction(170, 6), FlowDirection::Vertical);
        assert_eq!(flow_direction(80, 6), FlowDirection::Vertical);
    }

    #[test]
    fn empty_chain_defaults_vertical() {
        assert_eq!(flow_direction(200, 0), FlowDirection::Vertical);
    }

    #[test]
    fn card_lines_carry_score_and_status() {
        let catalog = riskchain_core::Catalog::builtin();
        let step = &catalog.steps()[0];
        let lines = step_card_lines(step);
        assert_eq!(lines.len(), 4);

        let flat: String = lines
            .iter()
            .flat_map(|l| l.spans.iter().map(|s| s.content.as_ref()))
            .collect();
        assert!(flat.contains("Raw Material Sourcing – Baotou, China"));
        assert!(flat.contains("8.9"));
        // Completed step carries the check glyph.
        assert!(flat.contains(theme::icon_glyph(riskchain_core::Icon::CheckCircle)));
    }
}
