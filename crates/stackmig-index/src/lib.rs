pub mod facade;
pub mod index;
pub mod repository;
pub mod source;

pub use facade::*;
pub use index::*;
pub use repository::*;
pub use source::*;
