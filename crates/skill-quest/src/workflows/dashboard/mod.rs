//! Progress metrics, badges, next actions, and history export.

pub mod badges;
pub mod export;
pub mod router;
pub mod service;

pub use badges::{Badge, BadgeKind};
pub use export::{assessments_to_csv, ExportError};
pub use router::dashboard_router;
pub use service::{DashboardError, DashboardService, DashboardSummary, STALE_ASSESSMENT_DAYS};
