//! Contact form validation

mod error;
mod rules;
mod validator;

pub use error::*;
pub use rules::*;
pub use validator::*;
