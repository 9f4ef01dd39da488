pub mod size;
pub mod watcher;

pub use size::{query_geometry, Geometry, TerminalSize};
pub use watcher::spawn_resize_watcher;
