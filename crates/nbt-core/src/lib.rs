pub mod config;
pub mod tag;
pub mod tree;
pub mod verdict;

pub use config::*;
pub use tag::*;
pub use tree::*;
pub use verdict::*;
