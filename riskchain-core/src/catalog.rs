//! The built-in process catalogue.
//!
//! Six process summaries for the list view plus one fixed step chain for the
//! detail view. The chain belongs to the semiconductor procurement scenario
//! and is rendered for every selection — the source data has no per-process
//! chains, and this crate does not invent them.
//!
//! Derived values (totals, high-risk count, average score) are recomputed on
//! each call; the catalogue is small and immutable, so nothing is cached.

use thiserror::Error;

use crate::model::{Icon, ProcessStep, ProcessSummary, RiskLevel, StepStatus};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("unknown process id: {0}")]
    UnknownProcess(String),
}

/// The fixed catalogue: summaries and the detail chain.
#[derive(Debug, Clone)]
pub struct Catalog {
    summaries: Vec<ProcessSummary>,
    steps: Vec<ProcessStep>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Catalog {
    /// The compiled-in data set.
    pub fn builtin() -> Self {
        Self {
            summaries: builtin_summaries(),
            steps: builtin_steps(),
        }
    }

    /// Summaries in list-view order.
    pub fn summaries(&self) -> &[ProcessSummary] {
        &self.summaries
    }

    /// The detail chain, in render order.
    pub fn steps(&self) -> &[ProcessStep] {
        &self.steps
    }

    /// Look up a summary by id.
    pub fn summary(&self, id: &str) -> Result<&ProcessSummary, CatalogError> {
        self.summaries
            .iter()
            .find(|s| s.id == id)
            .ok_or_else(|| CatalogError::UnknownProcess(id.to_string()))
    }

    pub fn total(&self) -> usize {
        self.summaries.len()
    }

    /// Count of summaries tagged High.
    pub fn high_risk_count(&self) -> usize {
        self.summaries
            .iter()
            .filter(|s| s.risk_level == RiskLevel::High)
            .count()
    }

    /// Arithmetic mean of the chain's step scores. Zero for an empty chain.
    pub fn average_step_score(&self) -> f64 {
        if self.steps.is_empty() {
            return 0.0;
        }
        let sum: f64 = self.steps.iter().map(|s| s.risk_score).sum();
        sum / self.steps.len() as f64
    }

    /// Count of steps whose status is Completed.
    pub fn completed_step_count(&self) -> usize {
        self.steps
            .iter()
            .filter(|s| s.status == StepStatus::Completed)
            .count()
    }
}

/// Format a score for display, one decimal place.
pub fn display_score(score: f64) -> String {
    format!("{score:.1}")
}

fn builtin_summaries() -> Vec<ProcessSummary> {
    vec![
        ProcessSummary {
            id: "1",
            title: "Raw Material Sourcing",
            description: "Procurement of raw materials from global suppliers",
            risk_level: RiskLevel::High,
            step_count: 8,
            icon: Icon::Factory,
        },
        ProcessSummary {
            id: "2",
            title: "Manufacturing Process",
            description: "Production and quality control in manufacturing facilities",
            risk_level: RiskLevel::Medium,
            step_count: 12,
            icon: Icon::Package,
        },
        ProcessSummary {
            id: "3",
            title: "Logistics & Transportation",
            description: "Global shipping and distribution network management",
            risk_level: RiskLevel::High,
            step_count: 6,
            icon: Icon::Truck,
        },
        ProcessSummary {
            id: "4",
            title: "Warehouse Operations",
            description: "Storage and inventory management across facilities",
            risk_level: RiskLevel::Low,
            step_count: 5,
            icon: Icon::Package,
        },
        ProcessSummary {
            id: "5",
            title: "Maritime Shipping",
            description: "Ocean freight and port operations management",
            risk_level: RiskLevel::High,
            step_count: 9,
            icon: Icon::Ship,
        },
        ProcessSummary {
            id: "6",
            title: "Air Cargo Operations",
            description: "Express delivery and air freight coordination",
            risk_level: RiskLevel::Medium,
            step_count: 7,
            icon: Icon::Plane,
        },
    ]
}

fn builtin_steps() -> Vec<ProcessStep> {
    vec![
        ProcessStep {
            id: "1",
            title: "Raw Material Sourcing – Baotou, China",
            description: "Rare earth elements and silicon mined and processed in Inner Mongolia",
            risk_score: 8.9,
            risk_explanation: "Export restrictions by Chinese government, high environmental \
                regulation risk, dependency on a single region for rare earths, and high \
                energy consumption in processing.",
            icon: Icon::Factory,
            status: StepStatus::Completed,
        },
        ProcessStep {
            id: "2",
            title: "Land Transport to Port – Tianjin, China",
            description: "Transport of processed materials via rail and truck to Tianjin port",
            risk_score: 6.2,
            risk_explanation: "Delays due to overburdened freight rail lines, industrial \
                pollution protests affecting routes, and risks of regional COVID-19 shutdowns.",
            icon: Icon::Truck,
            status: StepStatus::Completed,
        },
        ProcessStep {
            id: "3",
            title: "Shipping to Taiwan – Port of Taichung",
            description: "Container ship transport from Tianjin to Taichung, Taiwan",
            risk_score: 7.3,
            risk_explanation: "Risk of port congestion, South China Sea geopolitical tensions, \
                and potential naval exercises disrupting shipping routes.",
            icon: Icon::Ship,
            status: StepStatus::Completed,
        },
        ProcessStep {
            id: "4",
            title: "Semiconductor Fabrication – Hsinchu Science Park, Taiwan",
            description: "Processing of materials and chip manufacturing by TSMC in Hsinchu",
            risk_score: 9.4,
            risk_explanation: "Extreme dependence on a single foundry (TSMC), high earthquake \
                risk, water scarcity due to droughts, and threat of Chinese military escalation.",
            icon: Icon::Package,
            status: StepStatus::Active,
        },
        ProcessStep {
            id: "5",
            title: "Export to Europe – Port of Hamburg",
            description: "Shipping of finished wafers from Taiwan to Hamburg, Germany",
            risk_score: 6.8,
            risk_explanation: "Maritime bottlenecks (e.g. Suez Canal), long transit time \
                (30+ days), fuel price volatility, and container shortages impacting \
                outbound logistics.",
            icon: Icon::Ship,
            status: StepStatus::Pending,
        },
        ProcessStep {
            id: "6",
            title: "Final Delivery – Ingolstadt, Germany",
            description: "Truck delivery of chips to a production site in Bavaria \
                (e.g., Audi electronics hub)",
            risk_score: 5.7,
            risk_explanation: "Driver shortage in Europe, diesel cost volatility, and local \
                infrastructure works causing delays.",
            icon: Icon::MapPin,
            status: StepStatus::Pending,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::band::ScoreBand;

    #[test]
    fn builtin_has_six_summaries_three_high() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.total(), 6);
        assert_eq!(catalog.high_risk_count(), 3);
    }

    #[test]
    fn summary_ids_are_unique_and_ordered() {
        let catalog = Catalog::builtin();
        let ids: Vec<&str> = catalog.summaries().iter().map(|s| s.id).collect();
        assert_eq!(ids, ["1", "2", "3", "4", "5", "6"]);
    }

    #[test]
    fn lookup_by_id() {
        let catalog = Catalog::builtin();
        let summary = catalog.summary("3").unwrap();
        assert_eq!(summary.title, "Logistics & Transportation");
        assert!(matches!(
            catalog.summary("99"),
            Err(CatalogError::UnknownProcess(_))
        ));
    }

    #[test]
    fn step_chain_order_and_endpoints() {
        let catalog = Catalog::builtin();
        let steps = catalog.steps();
        assert_eq!(steps.len(), 6);
        let ids: Vec<&str> = steps.iter().map(|s| s.id).collect();
        assert_eq!(ids, ["1", "2", "3", "4", "5", "6"]);

        let first = &steps[0];
        assert_eq!(first.title, "Raw Material Sourcing – Baotou, China");
        assert_eq!(first.risk_score, 8.9);
        assert_eq!(ScoreBand::of(first.risk_score), ScoreBand::High);
        assert_eq!(first.status.icon(), Icon::CheckCircle);

        let last = &steps[5];
        assert_eq!(last.title, "Final Delivery – Ingolstadt, Germany");
        assert_eq!(last.risk_score, 5.7);
        assert_eq!(ScoreBand::of(last.risk_score), ScoreBand::Medium);
        assert_eq!(last.status.icon(), Icon::AlertTriangle);
    }

    #[test]
    fn average_step_score_displays_as_7_4() {
        let catalog = Catalog::builtin();
        let avg = catalog.average_step_score();
        assert!((avg - 7.3833333).abs() < 1e-6);
        assert_eq!(display_score(avg), "7.4");
    }

    #[test]
    fn completed_step_count() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.completed_step_count(), 3);
    }

    #[test]
    fn empty_catalog_derives_zeroes() {
        let catalog = Catalog {
            summaries: Vec::new(),
            steps: Vec::new(),
        };
        assert_eq!(catalog.total(), 0);
        assert_eq!(catalog.high_risk_count(), 0);
        assert_eq!(catalog.average_step_score(), 0.0);
    }
}
