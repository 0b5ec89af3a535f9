pub mod structs3d;

pub use structs3d::*;
