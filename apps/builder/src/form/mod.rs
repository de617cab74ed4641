// The form boundary: a key→value read surface standing in for the input
// widgets, plus collection into a Document snapshot and best-effort
// per-field validation.

pub mod collect;
pub mod snapshot;
pub mod validation;

pub use collect::collect;
pub use snapshot::{DynamicItem, FieldValue, FormSnapshot};
pub use validation::{rules_for, validate_field, FieldError, FieldErrorKind, FieldRule};
