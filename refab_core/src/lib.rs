pub mod components;
pub mod nodes;
pub mod prefab;
pub mod structs;

pub use components::*;
pub use nodes::*;
pub use prefab::{PREFAB_EXT, PrefabData};
pub use structs::*;
