//! HTTP request extractors with improved error handling.
//!
//! Custom Axum extractors that translate extraction failures into the
//! service's error envelope instead of axum's default plain-text rejections.

mod json;

pub use crate::extract::json::Json;
