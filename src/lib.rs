//! A desktop preview of the Inky pHAT and wHAT ePaper displays
//!
//! The mock keeps the same indexed buffer a real Inky would send over SPI, orients it the way
//! the physical panel is mounted and renders it into a window instead. The window can be
//! resized freely, the image is rescaled from the unscaled panel image every time.
//!
//! # Features
//!
//! - `graphics` (default): draw with [`embedded-graphics`]
//! - `simulator`: native desktop window via [`minifb`], see [window::MinifbWindow]
//!
//! Without `simulator` the mock renders into a [window::HeadlessWindow], which is what the
//! tests use as well.
//!
//! [`embedded-graphics`]: https://docs.rs/embedded-graphics
//! [`minifb`]: https://docs.rs/minifb
//!
//! # Colors
//!
//! - Buffer indices: 0 is white, 1 is black, 2 is red or yellow
//! - The palette is picked from the [PanelColor](color::PanelColor) given at construction
//!
//! # Examples
//!
//! ```rust
//!# fn main() -> Result<(), inky_mock::Error> {
//! use inky_mock::{prelude::*, what::{self, InkyMockWhat}, window::HeadlessWindow};
//!
//! let config = MockConfig::new("red", false, true)?;
//! let mut inky = InkyMockWhat::new(config, HeadlessWindow::new(what::WIDTH, what::HEIGHT))?;
//!
//! // draw something into the buffer
//! inky.set_pixel(0, 0, what::RED);
//!
//! inky.show()?;
//! assert_eq!(inky.state(), RenderState::Displaying);
//!
//! // the preview follows the window size
//! inky.renderer_mut().window_mut().resize(800, 600);
//! inky.pump_events()?;
//! # Ok(())
//! # }
//! ```
//!
//! With the `simulator` feature, `InkyMockPhat::open(config)` opens a real window and
//! `run_until_closed()` keeps it on screen.

#[cfg(feature = "graphics")]
pub mod graphics;

mod traits;

pub mod buffer;
pub mod color;
mod error;
pub mod mock;
pub mod render;
pub mod transform;
pub mod window;

pub mod phat;
pub mod what;

pub use crate::error::Error;

pub mod prelude {
    pub use crate::buffer::Buffer;
    pub use crate::color::{PanelColor, TriColor};
    pub use crate::error::Error;
    pub use crate::mock::{InkyMock, MockConfig};
    pub use crate::render::RenderState;
    pub use crate::traits::{Inky, PreviewWindow, Variant};

    #[cfg(feature = "graphics")]
    pub use crate::graphics::DisplayRotation;
}
