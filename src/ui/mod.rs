//! Terminal output helpers
//!
//! Uses `cliclack` styling on interactive terminals and falls back to plain
//! bracketed markers in pipes and CI.

mod context;
mod output;

pub use context::UiContext;
pub use output::{key_value, remark, step_info, step_ok_detail, step_warn_hint};
