//! Horizon Assess - result lists for search-quality assessment.
//!
//! This crate tracks an assessor's edits to a ranked result list and keeps a
//! list of result rows in step with them:
//!
//! - [`EditLedger`] records which results are deleted and produces [`Update`]s
//! - [`ResultListController`] owns the rows and applies those updates
//! - [`ResultSource`] and [`RowRenderer`] connect it to data and presentation
//!
//! # Example
//!
//! ```
//! use horizon_assess::prelude::*;
//!
//! let sample = Sample::new(vec!["Cafe", "Bakery", "Hotel"])
//!     .with_entry(EditEntry::new(2, true));
//!
//! let mut view = ResultListController::new(|name: &&str| format!("> {name}"));
//! view.populate(&sample);
//! let mut ledger = EditLedger::from_source(&sample);
//!
//! // Assessor restores the hotel and removes the cafe
//! view.apply(ledger.mark_resurrected(2)?)?;
//! view.apply(ledger.mark_deleted(0)?)?;
//!
//! let visible: Vec<bool> = view.rows().map(|row| row.is_visible()).collect();
//! assert_eq!(visible, vec![false, true, true]);
//! assert!(ledger.has_changes());
//! # Ok::<(), horizon_assess::AssessError>(())
//! ```

pub use horizon_assess_core::*;

mod config;
mod edits;
mod error;
pub mod prelude;
mod results_view;
mod row;
mod source;

pub use config::ResultsViewConfig;
pub use edits::{EditEntry, EditLedger, Update, UpdateKind};
pub use error::{AssessError, Result};
pub use results_view::ResultListController;
pub use row::{RowHandle, RowRenderer};
pub use source::{ResultSource, Sample};
