pub use commands::*;
pub use domain::*;
pub use persistence::*;
pub use queries::*;

mod commands;
mod domain;
mod persistence;
mod queries;
