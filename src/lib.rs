pub mod error;
pub mod generator;
pub mod ignore;
pub mod naming;
pub mod pipeline;
pub mod render;
pub mod resolve;
pub mod xsd;

pub use error::Error;
pub use ignore::IgnoreSet;
pub use resolve::{resolve, Cardinality, Kind, ResolvedNode};
