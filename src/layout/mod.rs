pub mod tiling;

pub use tiling::*;
