//! Logging facilities for Horizon Assess.
//!
//! Horizon Assess uses the `tracing` crate for instrumentation. To see logs,
//! install a tracing subscriber in your application:
//!
//! ```ignore
//! fn main() {
//!     tracing_subscriber::fmt()
//!         .with_env_filter("horizon_assess=debug")
//!         .init();
//!
//!     // Your application code...
//! }
//! ```

/// Span names used throughout Horizon Assess for tracing.
///
/// These constants can be used to filter traces for specific subsystems.
pub mod span_names {
    /// Applying an update to the result list.
    pub const APPLY_UPDATE: &str = "horizon_assess::apply_update";
    /// Populating the result list from a source.
    pub const POPULATE: &str = "horizon_assess::populate";
}

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Signal/slot system target.
    pub const SIGNAL: &str = "horizon_assess_core::signal";
    /// Edit ledger target.
    pub const EDITS: &str = "horizon_assess::edits";
    /// Result list controller target.
    pub const RESULTS_VIEW: &str = "horizon_assess::results_view";
    /// Configuration loading target.
    pub const CONFIG: &str = "horizon_assess::config";
}
