//! Display formatting for models and operation results.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]).
//! Wrapper types add context: a list of plans knows which completion class it
//! shows, a creation result announces the new id before the resource.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Wrapper Types   │    │    Markdown     │
//! │ (PlanView, ...) │───▶│ (CreateResult,  │───▶│     Output      │
//! │                 │    │  PlanProgress-  │    │   (terminal)    │
//! │                 │    │  List, ...)     │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`collections`]: [`TemplateSummaries`] and [`PlanProgressList`]
//! - [`results`]: [`CreateResult`], [`UpdateResult`], [`DeleteResult`]
//! - [`status`]: [`OperationStatus`] confirmations
//! - [`datetime`]: UTC timestamp formatting
//! - [`models`]: Display implementations for domain models
//!
//! ## Usage
//!
//! ```rust
//! use cadence_core::display::OperationStatus;
//!
//! let status = OperationStatus::success("Task marked as completed");
//! assert_eq!(status.to_string(), "Success: Task marked as completed\n");
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;

pub use collections::{PlanProgressList, TemplateSummaries};
pub use datetime::UtcDateTime;
pub use results::{CreateResult, DeleteResult, UpdateResult};
pub use status::OperationStatus;
