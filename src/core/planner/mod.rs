//! Degree planning: selections, semester plans and pathway presets

pub mod ledger;
pub mod pathway;
pub mod plan;

pub use ledger::SelectionLedger;
pub use pathway::{Pathway, PathwayTerm, COMPUTER_SCIENCE_BS};
pub use plan::{DegreePlan, PlanError, PlannedCourse, TransferRow};
