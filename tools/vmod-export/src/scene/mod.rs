//! Scene model and OBJ loading

mod obj;
mod types;

// Re-export public API
pub use obj::{DEFAULT_MATERIAL, load_obj};
pub use types::{Material, Mesh, Scene};
