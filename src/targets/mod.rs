//! Monthly target overrides and their resolution.
//!
//! Built-in default targets come from the department roster; this module
//! holds everything that can replace them month by month: the typed
//! [`Month`] key, the year-scoped [`TargetOverrideTable`] with its
//! tolerant storage codec, the [`TargetStore`] persistence seam, and the
//! resolver functions that pick the effective target for a department.

mod month;
mod resolver;
mod store;
mod table;

pub use month::Month;
pub use resolver::{
    load_overrides, parse_override_input, resolve_from_table, resolve_monthly_target,
    save_monthly_target, year_key,
};
pub use store::{InMemoryTargetStore, TargetStore};
pub use table::TargetOverrideTable;
