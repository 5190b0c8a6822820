//! The scheduling core.
//!
//! Plan generation runs leaves first: the [`distribution`] solver decides how
//! many tasks land on each day, the [`days`] and [`weeks`] builders turn that
//! allocation into records, and the [`assembler`] validates the request and
//! drives the builders. The [`view`] composer rebuilds read views from a
//! persisted plan on every read.
//!
//! Every function in this module is pure apart from id generation.

pub mod assembler;
pub mod calendar;
pub mod days;
pub mod distribution;
pub mod view;
pub mod weeks;

pub use assembler::{PlanDraft, assemble_plan};
pub use days::build_days;
pub use distribution::solve;
pub use view::{compose_plan_view, list_progress, locate_task};
pub use weeks::{DAYS_PER_WEEK, build_weeks};
