//! Axum extractors for request data.
//!
//! - [`FormFields`] - Extract submitted form fields

mod form_fields;

pub use form_fields::FormFields;
