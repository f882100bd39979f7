//! Text scene descriptions.
//!
//! Reading (`parse_scene`, `load_scene`) and writing (`Display` for `Scene`)
//! the block-structured `.scene` format.

mod loader;
mod parser;
mod writer;

pub use loader::*;
pub use parser::*;
