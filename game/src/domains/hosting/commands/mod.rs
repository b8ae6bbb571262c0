pub use create_host::*;
pub use destroy_host::*;

mod create_host;
mod destroy_host;
