//! Review forms and submitted reviews.
//!
//! - [`form::ReviewForm`] — the aggregate reviews are submitted against
//! - [`entities::Review`] — one member's submitted answers
//! - [`value_objects::FormCode`] — the form's public lookup code

pub mod entities;
pub mod form;
pub mod value_objects;
