//! Shared database types.

mod constraint;

pub use constraint::{ConstraintCategory, ConstraintViolation, UserConstraints};
