//! tiny-skia backend for the [`Canvas`] contract.
//!
//! Geometry arrives in logical coordinates and is kept as a command list;
//! arcs are lowered to cubic Bézier segments on entry. Painting builds a
//! `tiny_skia::Path` from the list and hands the accumulated CTM to
//! tiny-skia, which strokes in path space before transforming, so stroke
//! widths are in local units and scale with the transform.

use glam::{DAffine2, DVec2, dvec2};
use std::f64::consts::FRAC_PI_2;
use tiny_skia::{FillRule, Paint, PathBuilder, Pixmap, Stroke};

use crate::canvas::Canvas;
use crate::errors::RenderError;
use crate::transform::Matrix;

/// Graphics state covered by save/restore. The current path is not part
/// of it.
#[derive(Debug, Clone, Copy)]
struct GfxState {
    ctm: Matrix,
    source: [f64; 3],
    line_width: f64,
}

impl Default for GfxState {
    fn default() -> Self {
        GfxState {
            ctm: DAffine2::IDENTITY,
            source: [0.0, 0.0, 0.0],
            line_width: 1.0,
        }
    }
}

/// One step of the current path, in logical coordinates.
#[derive(Debug, Clone, Copy)]
enum PathCmd {
    MoveTo(DVec2),
    LineTo(DVec2),
    CubicTo(DVec2, DVec2, DVec2),
    Close,
}

/// A [`Canvas`] that rasterizes onto an RGBA pixmap.
#[derive(Debug)]
pub struct PixmapCanvas {
    pixmap: Pixmap,
    state: GfxState,
    saved: Vec<GfxState>,
    path: Vec<PathCmd>,
}

impl PixmapCanvas {
    /// Allocate a transparent `width` x `height` surface.
    pub fn new(width: u32, height: u32) -> Result<PixmapCanvas, RenderError> {
        let pixmap = Pixmap::new(width, height).ok_or(RenderError::Surface { width, height })?;
        Ok(PixmapCanvas {
            pixmap,
            state: GfxState::default(),
            saved: Vec::new(),
            path: Vec::new(),
        })
    }

    /// Hand over the finished surface.
    pub fn into_pixmap(self) -> Pixmap {
        self.pixmap
    }

    fn build_path(&self) -> Option<tiny_skia::Path> {
        let mut pb = PathBuilder::new();
        for cmd in &self.path {
            match *cmd {
                PathCmd::MoveTo(p) => pb.move_to(p.x as f32, p.y as f32),
                PathCmd::LineTo(p) => pb.line_to(p.x as f32, p.y as f32),
                PathCmd::CubicTo(c1, c2, p) => pb.cubic_to(
                    c1.x as f32,
                    c1.y as f32,
                    c2.x as f32,
                    c2.y as f32,
                    p.x as f32,
                    p.y as f32,
                ),
                PathCmd::Close => pb.close(),
            }
        }
        pb.finish()
    }

    fn paint(&self) -> Paint<'static> {
        let [r, g, b] = self.state.source;
        let mut paint = Paint::default();
        paint.set_color_rgba8(channel(r), channel(g), channel(b), 255);
        paint.anti_alias = true;
        paint
    }

    fn device_transform(&self) -> tiny_skia::Transform {
        // glam's column array is [a, b, c, d, e, f] in SVG matrix naming,
        // which is exactly from_row's parameter order.
        let [a, b, c, d, e, f] = self.state.ctm.to_cols_array();
        tiny_skia::Transform::from_row(a as f32, b as f32, c as f32, d as f32, e as f32, f as f32)
    }
}

impl Canvas for PixmapCanvas {
    fn save(&mut self) {
        self.saved.push(self.state);
    }

    fn restore(&mut self) {
        if let Some(state) = self.saved.pop() {
            self.state = state;
        }
    }

    fn transform(&mut self, m: Matrix) {
        self.state.ctm = self.state.ctm * m;
    }

    fn arc(&mut self, center: DVec2, radius: f64, start: f64, end: f64) {
        self.path
            .push(PathCmd::MoveTo(arc_point(center, radius, start)));

        let sweep = end - start;
        if sweep <= 0.0 {
            return;
        }

        // Split into segments of at most a quarter turn; each is a cubic
        // with control distance k = 4/3 * tan(delta/4).
        let segments = (sweep / FRAC_PI_2).ceil().max(1.0) as usize;
        let delta = sweep / segments as f64;
        let k = 4.0 / 3.0 * (delta / 4.0).tan();

        let mut angle = start;
        for _ in 0..segments {
            let next = angle + delta;
            let from = arc_point(center, radius, angle);
            let to = arc_point(center, radius, next);
            let c1 = from + radius * k * dvec2(-angle.sin(), angle.cos());
            let c2 = to - radius * k * dvec2(-next.sin(), next.cos());
            self.path.push(PathCmd::CubicTo(c1, c2, to));
            angle = next;
        }
    }

    fn rect(&mut self, left: f64, top: f64, width: f64, height: f64) {
        self.path.push(PathCmd::MoveTo(dvec2(left, top)));
        self.path.push(PathCmd::LineTo(dvec2(left + width, top)));
        self.path
            .push(PathCmd::LineTo(dvec2(left + width, top + height)));
        self.path.push(PathCmd::LineTo(dvec2(left, top + height)));
        self.path.push(PathCmd::Close);
    }

    fn set_source(&mut self, rgb: [f64; 3]) {
        self.state.source = rgb;
    }

    fn set_line_width(&mut self, width: f64) {
        self.state.line_width = width;
    }

    fn fill_preserve(&mut self) {
        let Some(path) = self.build_path() else {
            crate::log::warn!("skipping fill of a degenerate path");
            return;
        };
        self.pixmap.fill_path(
            &path,
            &self.paint(),
            FillRule::Winding,
            self.device_transform(),
            None,
        );
    }

    fn stroke(&mut self) {
        match self.build_path() {
            Some(path) => {
                let stroke = Stroke {
                    width: self.state.line_width as f32,
                    ..Stroke::default()
                };
                self.pixmap.stroke_path(
                    &path,
                    &self.paint(),
                    &stroke,
                    self.device_transform(),
                    None,
                );
            }
            None => crate::log::warn!("skipping stroke of a degenerate path"),
        }
        self.path.clear();
    }
}

/// Point on the circle around `center` at `angle` radians.
fn arc_point(center: DVec2, radius: f64, angle: f64) -> DVec2 {
    center + radius * dvec2(angle.cos(), angle.sin())
}

/// Quantize one normalized channel to 8 bits.
fn channel(value: f64) -> u8 {
    (value * 255.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::TAU;

    fn rgba(pixmap: &Pixmap, x: u32, y: u32) -> (u8, u8, u8, u8) {
        let p = pixmap.pixel(x, y).unwrap().demultiply();
        (p.red(), p.green(), p.blue(), p.alpha())
    }

    // ==================== state tests ====================

    #[test]
    fn new_rejects_zero_dimensions() {
        let err = PixmapCanvas::new(0, 4).unwrap_err();
        assert!(matches!(err, RenderError::Surface { width: 0, height: 4 }));
    }

    #[test]
    fn restore_undoes_transform_and_source() {
        let mut canvas = PixmapCanvas::new(8, 8).unwrap();
        canvas.set_source([1.0, 0.0, 0.0]);
        canvas.save();
        canvas.transform(DAffine2::from_translation(dvec2(100.0, 0.0)));
        canvas.set_source([0.0, 0.0, 1.0]);
        canvas.restore();

        // the rect lands where the pre-save frame puts it, in red
        canvas.rect(0.0, 0.0, 8.0, 8.0);
        canvas.fill_preserve();
        assert_eq!(rgba(&canvas.pixmap, 4, 4), (255, 0, 0, 255));
    }

    // ==================== path lifecycle tests ====================

    #[test]
    fn fill_preserve_keeps_the_path() {
        let mut canvas = PixmapCanvas::new(8, 8).unwrap();
        canvas.rect(0.0, 0.0, 8.0, 8.0);
        canvas.set_source([1.0, 0.0, 0.0]);
        canvas.fill_preserve();
        canvas.set_source([0.0, 0.0, 1.0]);
        canvas.fill_preserve();
        assert_eq!(rgba(&canvas.pixmap, 4, 4), (0, 0, 255, 255));
    }

    #[test]
    fn stroke_consumes_the_path() {
        let mut canvas = PixmapCanvas::new(8, 8).unwrap();
        canvas.rect(0.0, 0.0, 8.0, 8.0);
        canvas.set_line_width(1.0);
        canvas.stroke();

        // a second fill has nothing to paint
        canvas.set_source([1.0, 0.0, 0.0]);
        canvas.fill_preserve();
        let (_, _, _, alpha) = rgba(&canvas.pixmap, 4, 4);
        assert_eq!(alpha, 0);
    }

    #[test]
    fn stroke_on_an_empty_path_is_a_no_op() {
        let mut canvas = PixmapCanvas::new(4, 4).unwrap();
        canvas.set_source([1.0, 0.0, 0.0]);
        canvas.stroke();
        assert!(canvas.pixmap.pixels().iter().all(|p| p.alpha() == 0));
    }

    // ==================== geometry tests ====================

    #[test]
    fn full_circle_arc_fills_a_disc() {
        let mut canvas = PixmapCanvas::new(64, 64).unwrap();
        canvas.arc(dvec2(32.0, 32.0), 16.0, 0.0, TAU);
        canvas.set_source([1.0, 0.0, 0.0]);
        canvas.fill_preserve();

        let pixmap = canvas.into_pixmap();
        assert_eq!(rgba(&pixmap, 32, 32), (255, 0, 0, 255));
        assert_eq!(rgba(&pixmap, 44, 32), (255, 0, 0, 255));
        let (_, _, _, alpha) = rgba(&pixmap, 56, 32);
        assert_eq!(alpha, 0);
        let (_, _, _, alpha) = rgba(&pixmap, 2, 2);
        assert_eq!(alpha, 0);
    }

    #[test]
    fn transform_scales_stroke_width() {
        let mut canvas = PixmapCanvas::new(64, 64).unwrap();
        canvas.transform(DAffine2::from_scale(dvec2(64.0, 64.0)));
        canvas.rect(0.25, 0.25, 0.5, 0.5);
        canvas.set_source([0.0, 1.0, 0.0]);
        canvas.set_line_width(0.125);
        canvas.stroke();

        let pixmap = canvas.into_pixmap();
        // 0.125 local units = 8 device pixels of stroke, centered on the
        // rect edge at x=16: solidly painted at 14, clear at 32 and 4
        assert_eq!(rgba(&pixmap, 14, 32), (0, 255, 0, 255));
        let (_, _, _, alpha) = rgba(&pixmap, 32, 32);
        assert_eq!(alpha, 0);
        let (_, _, _, alpha) = rgba(&pixmap, 4, 32);
        assert_eq!(alpha, 0);
    }
}
