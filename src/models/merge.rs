//! Zero-value detection for the structural merge.
//!
//! The defaults resolver copies a template field into a record iff the
//! record field equals its type's zero/empty value. `ZeroField` defines
//! that predicate per field type; the same predicate doubles as the
//! serde `skip_serializing_if` test so that "absent on the wire" and
//! "eligible for merge" stay the same notion. An `Option` nested object
//! is copied whole when `None`; there is no recursion into its fields.

/// A field value that can be tested against its type's zero/empty value.
pub trait ZeroField {
    fn is_zero_field(&self) -> bool;
}

impl ZeroField for bool {
    fn is_zero_field(&self) -> bool {
        !*self
    }
}

impl ZeroField for i64 {
    fn is_zero_field(&self) -> bool {
        *self == 0
    }
}

impl ZeroField for f64 {
    fn is_zero_field(&self) -> bool {
        *self == 0.0
    }
}

impl ZeroField for String {
    fn is_zero_field(&self) -> bool {
        self.is_empty()
    }
}

impl<T> ZeroField for Vec<T> {
    fn is_zero_field(&self) -> bool {
        self.is_empty()
    }
}

impl<T> ZeroField for Option<T> {
    fn is_zero_field(&self) -> bool {
        self.is_none()
    }
}
