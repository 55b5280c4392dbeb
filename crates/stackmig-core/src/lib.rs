pub mod error;
pub mod filter;
pub mod key;
pub mod model;
pub mod summary;

pub use error::*;
pub use filter::*;
pub use key::*;
pub use model::*;
pub use summary::*;
