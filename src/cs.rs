pub mod compression;

pub use compression::*;
