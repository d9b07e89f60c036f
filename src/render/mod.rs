//! 2D output for the rendering collaborator
//!
//! Converts the simulated world into screen-space triangles and HUD text.
//! No graphics backend lives here; vertices are `Pod` so any backend can
//! upload them directly.

pub mod frame;
pub mod shapes;
pub mod vertex;

pub use frame::{Frame, HudAnchor, HudLine, build_frame};
pub use vertex::{Vertex, colors};
