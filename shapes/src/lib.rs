mod catalog;
mod error;
mod notation;
mod shape;

pub use catalog::Catalog;
pub use error::ShapeError;
pub use shape::*;
