//! Error types with rich diagnostics using miette

use miette::Diagnostic;
use thiserror::Error;

/// Errors that occur while rendering a diagram to a raster surface.
#[derive(Error, Diagnostic, Debug)]
pub enum RenderError {
    #[error("cannot allocate a {width}x{height} surface")]
    #[diagnostic(
        code(croquis::render::surface),
        help("surface dimensions must be non-zero and fit in memory")
    )]
    Surface { width: u32, height: u32 },

    #[error("failed to encode PNG: {message}")]
    #[diagnostic(code(croquis::render::encode_png))]
    EncodePng { message: String },
}
