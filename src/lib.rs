//! A declarative 2D diagram composition layer.
//!
//! Diagrams are built from primitive shapes carrying lazily-composed
//! affine transforms and explicit paint styles, combined with an
//! associative overlay operator, and rendered through a two-pass
//! geometry-then-paint pipeline onto a raster surface.
//!
//! ```
//! # fn main() -> Result<(), croquis::RenderError> {
//! use croquis::{Color, Diagram, Primitive};
//!
//! let backdrop = Primitive::rectangle(0.9, 0.9).set_fill_color(Color::WHITE);
//! let disc = Primitive::circle(0.3).set_fill_color(Color::RED);
//! let diagram = Diagram::from(backdrop) + Diagram::from(disc).translate(0.1, 0.1);
//!
//! let pixmap = diagram.rasterize(256, 256)?;
//! assert_eq!((pixmap.width(), pixmap.height()), (256, 256));
//! # Ok(())
//! # }
//! ```
//!
//! [`Diagram::render`] does the same onto the default 512x512 surface and
//! writes a PNG file.

mod canvas;
mod color;
mod diagram;
mod errors;
mod log;
mod primitive;
mod raster;
mod transform;

pub use canvas::Canvas;
pub use color::Color;
pub use diagram::{Diagram, SURFACE_HEIGHT, SURFACE_WIDTH};
pub use errors::RenderError;
pub use primitive::{Primitive, Shape, Style};
pub use raster::PixmapCanvas;
pub use transform::{Matrix, Transform};

// Re-exported so callers can inspect rasterize() results without naming
// tiny-skia themselves.
pub use tiny_skia::Pixmap;
