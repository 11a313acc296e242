/// How a send ended when it was not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Sent { bytes: usize },
    /// Ctrl+C arrived before the write finished. Not an error.
    Interrupted,
}
