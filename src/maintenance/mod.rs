pub mod allowlist;
pub mod hook;
pub mod service;

pub use hook::{use_maintenance, UseMaintenanceHandle};
pub use service::{MaintenanceService, STATUS_CACHE_TTL_MS};
