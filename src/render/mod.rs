//! Drawing the captured geometry.
//!
//! `style` holds presentation settings shared by every renderer; `canvas2d`
//! draws to an HTML canvas through its 2D context.

pub mod canvas2d;
mod style;

pub use canvas2d::Canvas2DRenderer;
pub use style::RenderStyle;
