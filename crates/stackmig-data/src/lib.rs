pub mod bundled;
pub mod catalog;
pub mod check;
pub mod dataset;
pub mod digest;

pub use catalog::*;
pub use check::*;
pub use dataset::*;
pub use digest::*;
