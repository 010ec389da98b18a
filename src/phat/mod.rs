//! Preview of the Inky pHAT, the 212x104 panel for the Raspberry Pi Zero form factor
//!
//! The controller scans the panel as 104 columns of 212 pixels, so the buffer is rotated a
//! quarter turn clockwise on its way to the panel. On screen that rotation is undone again by
//! [CORRECTION].
//!
//! # Example
//!
//!```rust
//!# fn main() -> Result<(), inky_mock::Error> {
//!use inky_mock::{phat::*, prelude::*, window::HeadlessWindow};
//!
//!let mut inky = InkyMockPhat::new(
//!    MockConfig::new("yellow", false, false)?,
//!    HeadlessWindow::new(WIDTH, HEIGHT),
//!)?;
//!
//!for x in 0..WIDTH {
//!    inky.set_pixel(x, HEIGHT / 2, YELLOW);
//!}
//!inky.show()?;
//!# Ok(())
//!# }
//!```

use crate::mock::InkyMock;
use crate::traits::Variant;
use crate::transform::Transform;

pub use crate::color::{BLACK, RED, WHITE, YELLOW};

/// Width of the pHAT in pixels
pub const WIDTH: u32 = 212;
/// Height of the pHAT in pixels
pub const HEIGHT: u32 = 104;

/// Panel correction applied after the user flips and the mounting rotation
pub const CORRECTION: &[Transform] = &[Transform::Rotate(-1), Transform::FlipUd, Transform::FlipLr];

/// Inky pHAT panel
#[derive(Clone, Copy, Debug)]
pub struct Phat;

impl Variant for Phat {
    const NAME: &'static str = "Inky pHAT";
    const WIDTH: u32 = WIDTH;
    const HEIGHT: u32 = HEIGHT;
    const CORRECTION: &'static [Transform] = CORRECTION;
}

/// Mock of the Inky pHAT
#[cfg(feature = "simulator")]
pub type InkyMockPhat<W = crate::window::MinifbWindow> = InkyMock<Phat, W>;
/// Mock of the Inky pHAT
#[cfg(not(feature = "simulator"))]
pub type InkyMockPhat<W> = InkyMock<Phat, W>;
