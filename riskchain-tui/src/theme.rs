//! Style tokens and the risk color tables.
//!
//! The three risk tiers map onto the terminal palette once, here:
//! Red → high, Amber → medium, Green → low. Everything else is chrome.

use ratatui::style::{Color, Modifier, Style};

use riskchain_core::{BandColor, Icon, RiskLevel, ScoreBand};

const ACCENT: Color = Color::Rgb(0, 255, 255);
const RED: Color = Color::Rgb(255, 70, 70);
const AMBER: Color = Color::Rgb(255, 180, 0);
const GREEN: Color = Color::Rgb(0, 220, 120);
const PURPLE: Color = Color::Rgb(147, 112, 219);
const STEEL: Color = Color::Rgb(100, 149, 237);
const GRAY: Color = Color::Rgb(150, 150, 150);

/// Focus and highlight color.
pub fn accent() -> Style {
    Style::default().fg(ACCENT)
}

pub fn accent_bold() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

/// Secondary text, hints, disabled chrome.
pub fn muted() -> Style {
    Style::default().fg(STEEL)
}

pub fn neutral() -> Style {
    Style::default().fg(PURPLE)
}

pub fn warning() -> Style {
    Style::default().fg(AMBER)
}

pub fn positive() -> Style {
    Style::default().fg(GREEN)
}

/// Inert placeholder chrome (decorative nav controls).
pub fn inert() -> Style {
    Style::default().fg(GRAY)
}

pub fn panel_border(active: bool) -> Style {
    if active {
        Style::default().fg(ACCENT)
    } else {
        Style::default().fg(GRAY)
    }
}

pub fn panel_title(active: bool) -> Style {
    if active {
        accent_bold()
    } else {
        Style::default().fg(GRAY)
    }
}

fn band_fg(color: BandColor) -> Color {
    match color {
        BandColor::Red => RED,
        BandColor::Amber => AMBER,
        BandColor::Green => GREEN,
    }
}

/// Text style for a process-level risk badge.
pub fn risk_level_style(level: RiskLevel) -> Style {
    Style::default().fg(band_fg(level.color()))
}

/// Badge style for a process-level risk badge (reversed, reads as a filled chip).
pub fn risk_badge_style(level: RiskLevel) -> Style {
    risk_level_style(level).add_modifier(Modifier::REVERSED | Modifier::BOLD)
}

/// Text style for a numeric step score.
pub fn score_style(band: ScoreBand) -> Style {
    Style::default().fg(band_fg(band.color()))
}

/// Badge style for a numeric step score.
pub fn score_badge_style(band: ScoreBand) -> Style {
    score_style(band).add_modifier(Modifier::REVERSED | Modifier::BOLD)
}

/// Style for a step's status marker: check green, clock amber, warning gray.
pub fn status_style(status: riskchain_core::StepStatus) -> Style {
    use riskchain_core::StepStatus;
    match status {
        StepStatus::Completed => positive(),
        StepStatus::Active => warning(),
        StepStatus::Pending => inert(),
    }
}

/// Glyph lookup for the closed icon enumeration.
pub fn icon_glyph(icon: Icon) -> &'static str {
    match icon {
        Icon::Factory => "⚒",
        Icon::Package => "▣",
        Icon::Ship => "⛴",
        Icon::Truck => "⛟",
        Icon::Plane => "✈",
        Icon::MapPin => "⚑",
        Icon::CheckCircle => "✔",
        Icon::Clock => "◴",
        Icon::AlertTriangle => "⚠",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn risk_badge_uses_band_table() {
        assert_eq!(risk_level_style(RiskLevel::High).fg, Some(RED));
        assert_eq!(risk_level_style(RiskLevel::Medium).fg, Some(AMBER));
        assert_eq!(risk_level_style(RiskLevel::Low).fg, Some(GREEN));
    }

    #[test]
    fn score_style_matches_band() {
        assert_eq!(score_style(ScoreBand::of(8.9)).fg, Some(RED));
        assert_eq!(score_style(ScoreBand::of(5.7)).fg, Some(AMBER));
        assert_eq!(score_style(ScoreBand::of(3.0)).fg, Some(GREEN));
    }

    #[test]
    fn every_icon_has_a_glyph() {
        let icons = [
            Icon::Factory,
            Icon::Package,
            Icon::Ship,
            Icon::Truck,
            Icon::Plane,
            Icon::MapPin,
            Icon::CheckCircle,
            Icon::Clock,
            Icon::AlertTriangle,
        ];
        for icon in icons {
            assert!(!icon_glyph(icon).is_empty());
        }
    }
}
