pub use json::*;
pub use prefix::*;
pub use storage::*;
pub use store::*;
pub use value::*;

mod json;
mod prefix;
mod storage;
mod store;
mod value;
