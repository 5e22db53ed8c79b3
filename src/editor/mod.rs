//! Record editor logic: phone masking, backspace handling and validation.
//!
//! Everything here is pure; the form only decides what to dispatch to the store.

mod form;
mod phone;
mod validation;

pub use form::*;
pub use phone::*;
pub use validation::*;
