use crate::buffer::Buffer;
use crate::color::TriColor;
use crate::error::Error;
use crate::transform::Transform;

/// A physical Inky panel: its resolution and the fixed correction for how it is mounted
///
/// Implemented by the zero sized markers in [crate::phat] and [crate::what].
pub trait Variant {
    /// Human readable name, used in logs
    const NAME: &'static str;
    /// Width of the panel in pixels
    const WIDTH: u32;
    /// Height of the panel in pixels
    const HEIGHT: u32;
    /// Steps applied after the user flips and the mounting rotation
    const CORRECTION: &'static [Transform];
}

/// All the functions to interact with an Inky display
///
/// The drawing functions work on the stored buffer; nothing reaches the panel
/// (or the preview window) before [show](Inky::show) is called.
///
/// # Example
///
///```rust
///# fn main() -> Result<(), inky_mock::Error> {
///use inky_mock::{phat::{self, InkyMockPhat}, prelude::*, window::HeadlessWindow};
///
///let window = HeadlessWindow::new(phat::WIDTH, phat::HEIGHT);
///let mut inky = InkyMockPhat::new(MockConfig::new("red", false, false)?, window)?;
///
///inky.set_pixel(10, 10, phat::RED);
///inky.set_border(TriColor::Black);
///inky.show()?;
///# Ok(())
///# }
///```
pub trait Inky {
    /// Get the width of the display
    fn width(&self) -> u32;

    /// Get the height of the display
    fn height(&self) -> u32;

    /// The stored pixel buffer
    fn buffer(&self) -> &Buffer;

    /// The stored pixel buffer, mutable
    fn buffer_mut(&mut self) -> &mut Buffer;

    /// Color of the border around the active area
    fn border(&self) -> TriColor;

    /// Set the color of the border around the active area
    fn set_border(&mut self, color: TriColor);

    /// Show the buffer on the display
    fn show(&mut self) -> Result<(), Error>;

    /// Set a single pixel to a color index
    ///
    /// Pixels outside the display are ignored.
    fn set_pixel(&mut self, x: u32, y: u32, index: u8) {
        self.buffer_mut().set(x as usize, y as usize, index);
    }

    /// Replace the buffer with row major indices covering the whole display
    fn set_image(&mut self, image: &[u8]) -> Result<(), Error> {
        self.buffer_mut().copy_from(image)
    }

    /// Fill the buffer with one color index
    fn fill(&mut self, index: u8) {
        self.buffer_mut().fill(index);
    }
}

/// Where a rendered frame ends up
///
/// Frames are `0x00RRGGBB` pixels, row major.
pub trait PreviewWindow {
    /// Current size of the drawable area in pixels
    fn size(&self) -> (u32, u32);

    /// Draw a frame of `width` x `height` pixels
    fn present(&mut self, frame: &[u32], width: u32, height: u32) -> Result<(), Error>;

    /// Process pending window events without drawing
    fn update(&mut self);

    /// False once the user closed the window
    fn is_open(&self) -> bool;
}
