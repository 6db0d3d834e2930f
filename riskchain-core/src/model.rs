//! Record shapes for the process catalogue.
//!
//! Both record types are built once at startup and never mutated. Icons are a
//! closed enumeration resolved to glyphs by the renderer, never arbitrary
//! references embedded in the data.

use serde::{Deserialize, Serialize};

/// Severity tier of a whole process, as shown on its list-view badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    High,
    Medium,
    Low,
}

impl RiskLevel {
    pub fn label(self) -> &'static str {
        match self {
            RiskLevel::High => "High",
            RiskLevel::Medium => "Medium",
            RiskLevel::Low => "Low",
        }
    }
}

/// Progress state of a single step within a process chain.
///
/// The data carries no ordering invariant; a pending step may precede a
/// completed one and the renderer displays whatever it is given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StepStatus {
    Completed,
    Active,
    Pending,
}

/// Decorative icon identifiers used by summaries, steps, and status markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Icon {
    Factory,
    Package,
    Ship,
    Truck,
    Plane,
    MapPin,
    CheckCircle,
    Clock,
    AlertTriangle,
}

impl StepStatus {
    /// Status marker icon: completed → check, active → clock, pending → warning.
    pub fn icon(self) -> Icon {
        match self {
            StepStatus::Completed => Icon::CheckCircle,
            StepStatus::Active => Icon::Clock,
            StepStatus::Pending => Icon::AlertTriangle,
        }
    }
}

/// One catalogue entry on the list view.
#[derive(Debug, Clone, Serialize)]
pub struct ProcessSummary {
    /// Unique within the catalogue.
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub risk_level: RiskLevel,
    /// Display-only; not cross-checked against any step chain.
    pub step_count: u32,
    pub icon: Icon,
}

/// One stage in a process's detailed chain.
#[derive(Debug, Clone, Serialize)]
pub struct ProcessStep {
    /// Unique within the chain; array order is chain order.
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// Observed range ~3–9.4; no declared bound.
    pub risk_score: f64,
    pub risk_explanation: &'static str,
    pub icon: Icon,
    pub status: StepStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn risk_level_labels() {
        assert_eq!(RiskLevel::High.label(), "High");
        assert_eq!(RiskLevel::Medium.label(), "Medium");
        assert_eq!(RiskLevel::Low.label(), "Low");
    }

    #[test]
    fn status_icon_mapping() {
        assert_eq!(StepStatus::Completed.icon(), Icon::CheckCircle);
        assert_eq!(StepStatus::Active.icon(), Icon::Clock);
        assert_eq!(StepStatus::Pending.icon(), Icon::AlertTriangle);
    }
}
