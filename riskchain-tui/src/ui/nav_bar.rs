//! Top navigation bar — brand, the one wired Dashboard control, and inert
//! placeholder chrome (Analytics/Reports tabs, search, notifications,
//! settings, avatar). Only the Dashboard control has behavior.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::{AppState, View};
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let dashboard_style = if app.view == View::Dashboard {
        theme::accent_bold()
    } else {
        theme::muted()
    };

    let mut spans = vec![
        Span::styled(" ⛨ RiskChain", theme::accent_bold()),
        Span::raw("   "),
        Span::styled("[d]ashboard", dashboard_style),
        Span::raw("  "),
        Span::styled("Analytics", theme::inert()),
        Span::raw("  "),
        Span::styled("Reports", theme::inert()),
    ];

    // Right-hand chrome, padded out to the edge.
    let right = "⌕  ◉  ⚙  (JD) John Doe ";
    let used: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let pad = (area.width as usize)
        .saturating_sub(used + right.chars().count());
    spans.push(Span::raw(" ".repeat(pad)));
    spans.push(Span::styled(right, theme::inert()));

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
