pub mod error;
pub mod filesystem;
pub mod localize;
pub mod result;
pub mod visitor;

pub use error::*;
pub use filesystem::*;
pub use localize::*;
pub use result::*;
pub use visitor::*;
