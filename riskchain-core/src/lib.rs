//! RiskChain core — domain types for the supply-chain risk dashboard.
//!
//! Everything here is UI-free: the fixed process catalogue, the risk-band
//! tables, and the derived display values (high-risk count, average step
//! score). The TUI crate renders these; nothing mutates them at runtime.

pub mod band;
pub mod catalog;
pub mod model;

pub use band::{BandColor, ScoreBand};
pub use catalog::{display_score, Catalog, CatalogError};
pub use model::{Icon, ProcessStep, ProcessSummary, RiskLevel, StepStatus};
