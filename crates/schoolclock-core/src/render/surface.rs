use std::io;

use super::frame::Frame;

/// Anything that can show a [`Frame`]: a terminal, a JSON stream, a test buffer.
pub trait DisplaySurface {
    /// Show one frame.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying output cannot be written.
    fn present(&mut self, frame: &Frame) -> io::Result<()>;
}

impl<S: DisplaySurface + ?Sized> DisplaySurface for Box<S> {
    fn present(&mut self, frame: &Frame) -> io::Result<()> {
        (**self).present(frame)
    }
}
