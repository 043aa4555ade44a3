//! Errors surfaced by a frame tick.

/// A tick failed reading input or presenting the frame.
#[derive(Debug, derive_more::Display)]
pub enum TickError<I, R> {
    /// The input source failed.
    #[display("Input source failed: {_0}")]
    Input(I),
    /// The canvas failed to present.
    #[display("Render failed: {_0}")]
    Render(R),
}

impl<I, R> std::error::Error for TickError<I, R>
where
    I: std::error::Error + 'static,
    R: std::error::Error + 'static,
{
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TickError::Input(e) => Some(e),
            TickError::Render(e) => Some(e),
        }
    }
}
