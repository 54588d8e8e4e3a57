//! Domain models with validation at construction
//!
//! All user input is validated when creating these types.
//! Invalid input returns ValidationError, not panic.

pub mod cari;
pub mod validation;

pub use cari::{CariKod, CreateCariRequest, NewCari};
pub use validation::ValidationError;
