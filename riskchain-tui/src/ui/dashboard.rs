//! List view — stats header plus one card per process summary.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::AppState;
use crate::theme;

/// Literal display constants, not computed from the catalogue.
const ACTIVE_SUPPLIERS: &str = "247";
const AGGREGATE_RISK_SCORE: &str = "7.2";

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Min(1),
        ])
        .split(area);

    render_header(f, chunks[0]);
    render_stats(f, chunks[1], app);
    render_cards(f, chunks[2], app);
}

fn render_header(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled("Supply Chain Overview", theme::accent_bold())),
        Line::from(Span::styled(
            "Monitor and analyze risks across your supply chain processes",
            theme::muted(),
        )),
    ];
    f.render_widget(Paragraph::new(lines), area);
}

fn render_stats(f: &mut Frame, area: Rect, app: &AppState) {
    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 4),
            Constraint::Ratio(1, 4),
            Constraint::Ratio(1, 4),
            Constraint::Ratio(1, 4),
        ])
        .split(area);

    let total = app.catalog.total().to_string();
    let high = app.catalog.high_risk_count().to_string();

    stat_cell(f, cells[0], "Total Processes", &total, theme::accent());
    stat_cell(f, cells[1], "High Risk", &high, theme::score_style(riskchain_core::ScoreBand::High));
    stat_cell(f, cells[2], "Active Suppliers", ACTIVE_SUPPLIERS, theme::neutral());
    stat_cell(f, cells[3], "Risk Score", AGGREGATE_RISK_SCORE, theme::warning());
}

fn stat_cell(f: &mut Frame, area: Rect, label: &str, value: &str, value_style: ratatui::style::Style) {
    let lines = vec![Line::from(vec![
        Span::styled(format!("{label}: "), theme::muted()),
        Span::styled(value.to_string(), value_style.add_modifier(Modifier::BOLD)),
    ])];
    let block = Block::default().borders(Borders::ALL).border_style(theme::panel_border(false));
    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_cards(f: &mut Frame, area: Rect, app: &AppState) {
    let mut lines: Vec<Line> = Vec::new();

    for (i, summary) in app.catalog.summaries().iter().enumerate() {
        let is_cursor = i == app.dashboard.cursor;

        let title_style = if is_cursor {
            theme::accent().add_modifier(Modifier::REVERSED)
        } else {
            theme::accent()
        };
        let marker = if is_cursor { "▸ " } else { "  " };

        lines.push(Line::from(vec![
            Span::styled(marker, theme::accent()),
            Span::styled(theme::icon_glyph(summary.icon), theme::risk_level_style(summary.risk_level)),
            Span::raw(" "),
            Span::styled(summary.title, title_style),
            Span::raw("  "),
            Span::styled(
                format!(" {} ", summary.risk_level.label()),
                theme::risk_badge_style(summary.risk_level),
            ),
            Span::styled(format!("  {} steps", summary.step_count), theme::muted()),
        ]));
        lines.push(Line::from(vec![
            Span::raw("    "),
            Span::styled(summary.description, theme::muted()),
        ]));
        if is_cursor {
            lines.push(Line::from(vec![
                Span::raw("    "),
                Span::styled("View Details → [Enter]", theme::neutral()),
            ]));
        }
        lines.push(Line::from(""));
    }

    f.render_widget(Paragraph::new(lines), area);
}
