//! Overlay widgets — the help popup.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::theme;
use crate::ui::centered_rect;

/// Keyboard shortcuts overlay. Any key dismisses it.
pub fn render_help(f: &mut Frame, area: Rect) {
    let popup = centered_rect(50, 60, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::accent())
        .title(" Keyboard Shortcuts ")
        .title_style(theme::accent_bold());

    let mut lines: Vec<Line> = Vec::new();
    section(&mut lines, "Global");
    key(&mut lines, "q / Ctrl+C", "Quit");
    key(&mut lines, "d / 1", "Jump to dashboard");
    key(&mut lines, "?", "This overlay");
    lines.push(Line::from(""));

    section(&mut lines, "Dashboard");
    key(&mut lines, "j / k, ↓ / ↑", "Move between process cards");
    key(&mut lines, "Enter", "View process details");
    lines.push(Line::from(""));

    section(&mut lines, "Process Detail");
    key(&mut lines, "Esc / Backspace / b", "Back to dashboard");
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(
        "Press any key to dismiss...",
        theme::neutral(),
    )));

    let para = Paragraph::new(lines).block(block);
    f.render_widget(para, popup);
}

fn section<'a>(lines: &mut Vec<Line<'a>>, title: &str) {
    lines.push(Line::from(Span::styled(
        title.to_string(),
        theme::accent_bold(),
    )));
}

fn key<'a>(lines: &mut Vec<Line<'a>>, keys: &str, desc: &str) {
    lines.push(Line::from(vec![
        Span::styled(format!("  {keys:>20}  "), theme::accent()),
        Span::styled(desc.to_string(), theme::muted()),
    ]));
}
