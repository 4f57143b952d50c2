//! Diagrams: ordered sequences of primitives with monoid composition.
//!
//! Sequence order is paint order: first-to-last is bottom-to-top, with no
//! depth sorting beyond it. Concatenation appends sequences, so it is
//! associative with [`Diagram::empty`] as the identity. Diagrams are
//! immutable values; [`Diagram::add_primitive`] is the one documented
//! in-place exception.

use std::iter::Sum;
use std::ops::Add;
use std::path::Path;

use glam::{DAffine2, dvec2};
use tiny_skia::Pixmap;

use crate::canvas::Canvas;
use crate::errors::RenderError;
use crate::primitive::Primitive;
use crate::raster::PixmapCanvas;

/// Default raster surface width in pixels.
pub const SURFACE_WIDTH: u32 = 512;
/// Default raster surface height in pixels.
pub const SURFACE_HEIGHT: u32 = 512;

/// An ordered collection of primitives, the unit of user-facing
/// composition.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Diagram {
    primitives: Vec<Primitive>,
}

impl Diagram {
    /// The zero-primitive diagram, identity for `+`.
    pub fn empty() -> Diagram {
        Diagram {
            primitives: Vec::new(),
        }
    }

    /// A diagram over an explicit primitive sequence, in paint order.
    pub fn new(primitives: Vec<Primitive>) -> Diagram {
        Diagram { primitives }
    }

    /// Left-to-right concatenation of any number of diagrams. An empty
    /// iterator yields [`Diagram::empty`].
    pub fn concat(diagrams: impl IntoIterator<Item = Diagram>) -> Diagram {
        diagrams.into_iter().sum()
    }

    /// Append one primitive in place.
    ///
    /// This is the one mutating operation on `Diagram`; everything else
    /// returns new values. Callers must not rely on aliasing beyond "the
    /// receiver now also contains `primitive`".
    pub fn add_primitive(&mut self, primitive: Primitive) -> &mut Diagram {
        self.primitives.push(primitive);
        self
    }

    /// Move every primitive by `(dx, dy)`: the whole diagram shifts as a
    /// rigid unit.
    pub fn translate(&self, dx: f64, dy: f64) -> Diagram {
        self.fmap(|p| p.translate(dx, dy))
    }

    /// A new diagram with `f` applied to (a clone of) every primitive,
    /// in sequence order.
    pub fn fmap(&self, f: impl FnMut(Primitive) -> Primitive) -> Diagram {
        Diagram {
            primitives: self.primitives.iter().cloned().map(f).collect(),
        }
    }

    /// The primitive sequence, in paint order.
    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    /// Render onto a fresh `width` x `height` surface and return it.
    ///
    /// The base transform puts the logical origin at the surface center
    /// and maps the logical unit square to the full surface, so a unit of
    /// logical distance is `width` (or `height`) device pixels. The
    /// surface starts fully transparent.
    pub fn rasterize(&self, width: u32, height: u32) -> Result<Pixmap, RenderError> {
        let mut canvas = PixmapCanvas::new(width, height)?;

        let (w, h) = (f64::from(width), f64::from(height));
        let base =
            DAffine2::from_translation(dvec2(w / 2.0, h / 2.0)) * DAffine2::from_scale(dvec2(w, h));
        canvas.transform(base);

        crate::log::debug!(
            "rasterizing {} primitives onto {}x{} surface",
            self.primitives.len(),
            width,
            height
        );
        for primitive in &self.primitives {
            primitive.render(&mut canvas);
        }
        Ok(canvas.into_pixmap())
    }

    /// Render at the default 512x512 surface size and write a PNG file.
    pub fn render(&self, path: impl AsRef<Path>) -> Result<(), RenderError> {
        let pixmap = self.rasterize(SURFACE_WIDTH, SURFACE_HEIGHT)?;
        pixmap
            .save_png(path)
            .map_err(|e| RenderError::EncodePng {
                message: e.to_string(),
            })
    }
}

impl From<Primitive> for Diagram {
    fn from(primitive: Primitive) -> Diagram {
        Diagram::new(vec![primitive])
    }
}

impl Add for Diagram {
    type Output = Diagram;

    fn add(mut self, other: Diagram) -> Diagram {
        self.primitives.extend(other.primitives);
        self
    }
}

impl Sum for Diagram {
    fn sum<I: Iterator<Item = Diagram>>(iter: I) -> Diagram {
        iter.fold(Diagram::empty(), |acc, d| acc + d)
    }
}
