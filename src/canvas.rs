//! The drawing-context seam.
//!
//! [`Canvas`] is the narrow interface the renderer draws through: scoped
//! state, path construction (arcs and rectangles), and fill/stroke
//! painting. The raster backend implements it over tiny-skia; tests use a
//! recording double to assert call order.

use glam::DVec2;

use crate::transform::Matrix;

/// A stateful 2D drawing context.
///
/// State handled by `save`/`restore` is the current transform, source
/// color, and line width. The current path is not part of the saved state:
/// it accumulates across `save`/`restore` and is cleared by `stroke`.
/// All operations are infallible; backend failures surface when the canvas
/// is created or when its output is written out.
pub trait Canvas {
    /// Push a copy of the current graphics state.
    fn save(&mut self);

    /// Pop the most recently saved graphics state. No-op if nothing was
    /// saved.
    fn restore(&mut self);

    /// Compose `m` onto the current transform: subsequent coordinates are
    /// interpreted in the frame `m` maps into the previous one.
    fn transform(&mut self, m: Matrix);

    /// Append a circular arc around `center`, from angle `start` to `end`
    /// in radians, beginning with a move to the arc's start point.
    fn arc(&mut self, center: DVec2, radius: f64, start: f64, end: f64);

    /// Append a closed rectangle subpath with top-left corner
    /// `(left, top)`.
    fn rect(&mut self, left: f64, top: f64, width: f64, height: f64);

    /// Set the solid paint color as a normalized `[r, g, b]` triple.
    fn set_source(&mut self, rgb: [f64; 3]);

    /// Set the stroke width, in current-frame units.
    fn set_line_width(&mut self, width: f64);

    /// Fill the current path with the source color, keeping the path.
    fn fill_preserve(&mut self);

    /// Stroke the current path with the source color and line width, then
    /// clear the path.
    fn stroke(&mut self);
}

/// Records every call as one line of text, for asserting on the exact
/// sequence of drawing operations.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct RecordingCanvas {
    ops: Vec<String>,
}

#[cfg(test)]
impl RecordingCanvas {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn trace(&self) -> String {
        self.ops.join("\n")
    }
}

#[cfg(test)]
impl Canvas for RecordingCanvas {
    fn save(&mut self) {
        self.ops.push("save".to_string());
    }

    fn restore(&mut self) {
        self.ops.push("restore".to_string());
    }

    fn transform(&mut self, m: Matrix) {
        let [a, b, c, d, e, f] = m.to_cols_array();
        self.ops.push(format!(
            "transform [{a:.4} {b:.4} {c:.4} {d:.4} {e:.4} {f:.4}]"
        ));
    }

    fn arc(&mut self, center: DVec2, radius: f64, start: f64, end: f64) {
        self.ops.push(format!(
            "arc ({:.4}, {:.4}) r={radius:.4} from {start:.4} to {end:.4}",
            center.x, center.y
        ));
    }

    fn rect(&mut self, left: f64, top: f64, width: f64, height: f64) {
        self.ops.push(format!(
            "rect ({left:.4}, {top:.4}) w={width:.4} h={height:.4}"
        ));
    }

    fn set_source(&mut self, rgb: [f64; 3]) {
        self.ops.push(format!(
            "set_source ({:.4}, {:.4}, {:.4})",
            rgb[0], rgb[1], rgb[2]
        ));
    }

    fn set_line_width(&mut self, width: f64) {
        self.ops.push(format!("set_line_width {width:.4}"));
    }

    fn fill_preserve(&mut self) {
        self.ops.push("fill_preserve".to_string());
    }

    fn stroke(&mut self) {
        self.ops.push("stroke".to_string());
    }
}
