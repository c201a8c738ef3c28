//! Prelude module for Horizon Assess.
//!
//! ```ignore
//! use horizon_assess::prelude::*;
//! ```

pub use crate::signal::{ConnectionId, Signal};

pub use crate::{
    AssessError, EditEntry, EditLedger, ResultListController, ResultSource, ResultsViewConfig,
    RowHandle, RowRenderer, Sample, Update, UpdateKind,
};
