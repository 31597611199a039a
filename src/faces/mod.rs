//! Triangle faces derived from the edge set.
//!
//! Faces are a pure view over topology: they are enumerated from scratch
//! whenever geometry is captured and are never stored on the model.

mod triangles;

pub use triangles::{EdgeLookup, Face, find_triangles, triangle_count};
