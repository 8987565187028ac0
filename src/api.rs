//! Public API surface for the library.
//!
//! Consolidates the identifier newtypes and re-exports the record model
//! and resolver output types consumed by the binary and by tests.

pub use crate::models::{
    Assignment, AssignmentGroup, CanvasDuration, CanvasTime, DurationParseError, Entry,
    GradingRules, TimeParseError,
};
pub use crate::services::defaults::{Resolution, ResolveError};

use crate::define_id_type;

define_id_type!(i64, CourseId);
define_id_type!(i64, AssignmentId);
define_id_type!(i64, GroupId);

impl CourseId {
    /// Whether a running course ID has been established yet.
    pub fn is_set(&self) -> bool {
        self.0 != 0
    }
}

impl GroupId {
    /// Whether a running group ID has been established yet.
    pub fn is_set(&self) -> bool {
        self.0 != 0
    }
}
