//! Circlet Core Library
//!
//! Toolkit-agnostic shape model, storage and selection policy for the
//! Circlet drawing surface. The host owns the window and the pixels; this
//! crate owns the shapes, their z-order and what a click means.

pub mod geometry;
pub mod input;
pub mod render;
pub mod shapes;
pub mod store;

pub use geometry::Point;
pub use input::{apply, InputEvent};
pub use render::DrawContext;
pub use shapes::{Circle, Rgba8, Shape, ShapeStyle, ShapeTrait};
pub use store::{ClickOutcome, ShapeStore, StoreError};
