//! Concentric discs: later primitives paint over earlier, larger ones.
//!
//! Run with `cargo run --example bullseye`; writes `bullseye.png`.

use croquis::{Color, Diagram, Primitive};

fn main() -> miette::Result<()> {
    let colors = [Color::RED, Color::WHITE];
    let rings = (0..6usize).map(|i| {
        let radius = 0.45 - 0.07 * i as f64;
        Diagram::from(
            Primitive::circle(radius)
                .set_fill_color(colors[i % 2])
                .set_stroke_width(0.005),
        )
    });

    Diagram::concat(rings).render("bullseye.png")?;
    Ok(())
}
