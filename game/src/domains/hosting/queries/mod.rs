pub use get_host::*;

mod get_host;
