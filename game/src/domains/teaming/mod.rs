pub use commands::*;
pub use domain::*;
pub use objects::*;
pub use queries::*;

mod commands;
mod domain;
mod instantiation;
mod objects;
mod persistence;
mod queries;
