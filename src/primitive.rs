//! Drawable primitives: shape geometry plus accumulated transform and
//! paint style.
//!
//! A [`Primitive`] is built at the origin and positioned exclusively by
//! accumulating transforms: `circle(0.3).rotate(a).translate(x, y)` never
//! touches the stored center. Every chainable operation consumes the value
//! and returns the updated one, so a primitive observed by the renderer is
//! a frozen snapshot of its build chain.

use std::f64::consts::TAU;

use glam::DVec2;

use crate::canvas::Canvas;
use crate::color::Color;
use crate::diagram::Diagram;
use crate::transform::Transform;

/// Default paint settings applied to every new primitive.
mod defaults {
    pub const FILL: Option<[f64; 3]> = None;
    pub const STROKE: [f64; 3] = [0.0, 0.0, 0.0];
    pub const STROKE_WIDTH: f64 = 0.01;
}

/// Shape geometry, always centered at the origin at construction time.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Circle { center: DVec2, radius: f64 },
    Rectangle { center: DVec2, height: f64, width: f64 },
}

/// Paint configuration for one primitive.
///
/// Defaults: no fill, black stroke, stroke width 0.01 (in logical units,
/// so it scales with the surface).
#[derive(Debug, Clone, PartialEq)]
pub struct Style {
    /// Fill color as a normalized triple; `None` skips the fill pass.
    pub fill: Option<[f64; 3]>,
    /// Stroke color as a normalized triple.
    pub stroke: [f64; 3],
    /// Stroke width in local units.
    pub stroke_width: f64,
}

impl Default for Style {
    fn default() -> Self {
        Style {
            fill: defaults::FILL,
            stroke: defaults::STROKE,
            stroke_width: defaults::STROKE_WIDTH,
        }
    }
}

/// One drawable shape with its accumulated transform and style.
#[derive(Debug, Clone, PartialEq)]
pub struct Primitive {
    pub shape: Shape,
    pub transform: Transform,
    pub style: Style,
}

impl Primitive {
    /// A circle of the given radius, centered at the origin.
    pub fn circle(radius: f64) -> Primitive {
        Primitive {
            shape: Shape::Circle {
                center: DVec2::ZERO,
                radius,
            },
            transform: Transform::Identity,
            style: Style::default(),
        }
    }

    /// An axis-aligned rectangle of the given height and width, centered
    /// at the origin.
    pub fn rectangle(height: f64, width: f64) -> Primitive {
        Primitive {
            shape: Shape::Rectangle {
                center: DVec2::ZERO,
                height,
                width,
            },
            transform: Transform::Identity,
            style: Style::default(),
        }
    }

    /// Rotate by `radians` about the current local origin. Composes in
    /// call order: transforms applied earlier act on the geometry first.
    pub fn rotate(mut self, radians: f64) -> Primitive {
        self.transform = self.transform.then(Transform::rotate(radians));
        self
    }

    /// Move by `(dx, dy)`. Composes in call order, so rotate-then-translate
    /// rotates the shape in place and then moves it.
    pub fn translate(mut self, dx: f64, dy: f64) -> Primitive {
        self.transform = self.transform.then(Transform::translate(dx, dy));
        self
    }

    /// Mirror across the vertical axis of the current frame.
    pub fn reflect_x(mut self) -> Primitive {
        self.transform = self.transform.then(Transform::reflect_x());
        self
    }

    /// Mirror across the horizontal axis of the current frame.
    pub fn reflect_y(mut self) -> Primitive {
        self.transform = self.transform.then(Transform::reflect_y());
        self
    }

    /// Enable filling with the given color.
    pub fn set_fill_color(mut self, color: Color) -> Primitive {
        self.style.fill = Some(color.to_float());
        self
    }

    /// Set the stroke color.
    pub fn set_stroke_color(mut self, color: Color) -> Primitive {
        self.style.stroke = color.to_float();
        self
    }

    /// Set the stroke width, in local units.
    pub fn set_stroke_width(mut self, width: f64) -> Primitive {
        self.style.stroke_width = width;
        self
    }

    /// Emit this shape's geometry (no paint) into the current frame.
    pub fn render_shape(&self, canvas: &mut impl Canvas) {
        match &self.shape {
            Shape::Circle { center, radius } => {
                canvas.arc(*center, *radius, 0.0, TAU);
            }
            Shape::Rectangle {
                center,
                height,
                width,
            } => {
                let left = center.x - width / 2.0;
                let top = center.y - height / 2.0;
                canvas.rect(left, top, *width, *height);
            }
        }
    }

    /// Draw this primitive: apply geometry, then apply paint.
    ///
    /// The whole pass runs inside a save/restore pair, so the canvas state
    /// observed by the next primitive is untouched. The fill pass runs only
    /// when a fill color is set and preserves the path; the stroke pass
    /// always runs and consumes it.
    pub fn render(&self, canvas: &mut impl Canvas) {
        let matrix = self.transform.resolve();

        canvas.save();
        canvas.transform(matrix);

        self.render_shape(canvas);

        if let Some(fill) = self.style.fill {
            canvas.set_source(fill);
            canvas.fill_preserve();
        }
        canvas.set_source(self.style.stroke);
        canvas.set_line_width(self.style.stroke_width);
        canvas.stroke();

        canvas.restore();
    }

    /// A two-element diagram: `self` below, `other` painted on top.
    pub fn overlay(self, other: Primitive) -> Diagram {
        Diagram::new(vec![self, other])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::RecordingCanvas;
    use glam::dvec2;
    use std::f64::consts::FRAC_PI_4;

    const EPS: f64 = 1e-12;

    // ==================== constructor tests ====================

    #[test]
    fn constructors_center_at_origin() {
        match Primitive::circle(0.3).shape {
            Shape::Circle { center, radius } => {
                assert_eq!(center, DVec2::ZERO);
                assert_eq!(radius, 0.3);
            }
            other => panic!("expected circle, got {:?}", other),
        }
        match Primitive::rectangle(0.2, 0.4).shape {
            Shape::Rectangle {
                center,
                height,
                width,
            } => {
                assert_eq!(center, DVec2::ZERO);
                assert_eq!(height, 0.2);
                assert_eq!(width, 0.4);
            }
            other => panic!("expected rectangle, got {:?}", other),
        }
    }

    #[test]
    fn default_style_is_unfilled_black_hairline() {
        let style = Primitive::circle(1.0).style;
        assert_eq!(style.fill, None);
        assert_eq!(style.stroke, [0.0, 0.0, 0.0]);
        assert_eq!(style.stroke_width, 0.01);
    }

    // ==================== chaining tests ====================

    #[test]
    fn rotate_then_translate_moves_the_rotated_shape() {
        let p = Primitive::rectangle(0.2, 0.4)
            .rotate(FRAC_PI_4)
            .translate(0.1, 0.0);
        let m = p.transform.resolve();

        // local origin lands at the translation target
        let origin = m.transform_point2(DVec2::ZERO);
        assert!((origin.x - 0.1).abs() < EPS);
        assert!(origin.y.abs() < EPS);

        // a point on the local x axis is rotated before being moved
        let tip = m.transform_point2(dvec2(0.2, 0.0));
        let expected = 0.2 * FRAC_PI_4.cos();
        assert!((tip.x - (expected + 0.1)).abs() < EPS);
        assert!((tip.y - expected).abs() < EPS);
    }

    #[test]
    fn reflect_then_translate_mirrors_in_place() {
        let p = Primitive::circle(1.0).reflect_x().translate(2.0, 0.0);
        let q = p.transform.resolve().transform_point2(dvec2(0.5, 0.25));
        assert!((q.x - 1.5).abs() < EPS);
        assert!((q.y - 0.25).abs() < EPS);

        let p = Primitive::circle(1.0).reflect_y();
        let q = p.transform.resolve().transform_point2(dvec2(0.5, 0.25));
        assert!((q.x - 0.5).abs() < EPS);
        assert!((q.y - -0.25).abs() < EPS);
    }

    #[test]
    fn style_setters_update_one_field_each() {
        let p = Primitive::circle(1.0).set_fill_color(Color::RED);
        assert_eq!(p.style.fill, Some([1.0, 0.0, 0.0]));
        assert_eq!(p.style.stroke, [0.0, 0.0, 0.0]);
        assert_eq!(p.style.stroke_width, 0.01);

        let p = p.set_stroke_color(Color::BLUE).set_stroke_width(0.05);
        assert_eq!(p.style.fill, Some([1.0, 0.0, 0.0]));
        assert_eq!(p.style.stroke, [0.0, 0.0, 1.0]);
        assert_eq!(p.style.stroke_width, 0.05);
    }

    #[test]
    fn overlay_builds_a_two_element_diagram_in_order() {
        let below = Primitive::circle(0.2).set_fill_color(Color::RED);
        let above = Primitive::circle(0.1).set_fill_color(Color::BLUE);
        let d = below.clone().overlay(above.clone());
        assert_eq!(d.primitives(), &[below, above]);
    }

    // ==================== render contract tests ====================

    #[test]
    fn filled_circle_renders_geometry_then_fill_then_stroke() {
        let mut canvas = RecordingCanvas::new();
        Primitive::circle(0.5)
            .set_fill_color(Color::RED)
            .render(&mut canvas);
        insta::assert_snapshot!(canvas.trace(), @r"
        save
        transform [1.0000 0.0000 0.0000 1.0000 0.0000 0.0000]
        arc (0.0000, 0.0000) r=0.5000 from 0.0000 to 6.2832
        set_source (1.0000, 0.0000, 0.0000)
        fill_preserve
        set_source (0.0000, 0.0000, 0.0000)
        set_line_width 0.0100
        stroke
        restore
        ");
    }

    #[test]
    fn unfilled_rectangle_skips_fill_and_still_restores() {
        let mut canvas = RecordingCanvas::new();
        Primitive::rectangle(0.2, 0.4).render(&mut canvas);
        insta::assert_snapshot!(canvas.trace(), @r"
        save
        transform [1.0000 0.0000 0.0000 1.0000 0.0000 0.0000]
        rect (-0.2000, -0.1000) w=0.4000 h=0.2000
        set_source (0.0000, 0.0000, 0.0000)
        set_line_width 0.0100
        stroke
        restore
        ");
    }

    #[test]
    fn translated_primitive_applies_its_matrix() {
        let mut canvas = RecordingCanvas::new();
        Primitive::circle(0.25)
            .translate(0.5, -0.5)
            .render(&mut canvas);
        insta::assert_snapshot!(canvas.trace(), @r"
        save
        transform [1.0000 0.0000 0.0000 1.0000 0.5000 -0.5000]
        arc (0.0000, 0.0000) r=0.2500 from 0.0000 to 6.2832
        set_source (0.0000, 0.0000, 0.0000)
        set_line_width 0.0100
        stroke
        restore
        ");
    }
}
