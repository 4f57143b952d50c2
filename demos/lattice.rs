//! A lattice of cells built with concat + translate: one prototype cell,
//! stamped across a 7x7 grid.
//!
//! Run with `cargo run --example lattice`; writes `lattice.png`. Set
//! `RUST_LOG=debug` (with the `tracing` feature enabled) for render logs.

use croquis::{Color, Diagram, Primitive};

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cell = Diagram::from(Primitive::rectangle(0.09, 0.09))
        + Diagram::from(Primitive::circle(0.012).set_fill_color(Color::BLUE));

    let cells = (0..7).flat_map(|row| {
        let cell = cell.clone();
        (0..7).map(move |col| {
            cell.translate(0.12 * (col as f64 - 3.0), 0.12 * (row as f64 - 3.0))
        })
    });

    Diagram::concat(cells).render("lattice.png")?;
    Ok(())
}
