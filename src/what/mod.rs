//! Preview of the Inky wHAT, the 400x300 panel for full size Raspberry Pi boards
//!
//! The wHAT is mounted upright, its correction only pins the shape of the rendered buffer.

use crate::mock::InkyMock;
use crate::traits::Variant;
use crate::transform::Transform;

pub use crate::color::{BLACK, RED, WHITE, YELLOW};

/// Width of the wHAT in pixels
pub const WIDTH: u32 = 400;
/// Height of the wHAT in pixels
pub const HEIGHT: u32 = 300;

/// Panel correction applied after the user flips
pub const CORRECTION: &[Transform] = &[
    Transform::Rotate(0),
    Transform::Reshape {
        rows: HEIGHT as usize,
        cols: WIDTH as usize,
    },
];

/// Inky wHAT panel
#[derive(Clone, Copy, Debug)]
pub struct What;

impl Variant for What {
    const NAME: &'static str = "Inky wHAT";
    const WIDTH: u32 = WIDTH;
    const HEIGHT: u32 = HEIGHT;
    const CORRECTION: &'static [Transform] = CORRECTION;
}

/// Mock of the Inky wHAT
#[cfg(feature = "simulator")]
pub type InkyMockWhat<W = crate::window::MinifbWindow> = InkyMock<What, W>;
/// Mock of the Inky wHAT
#[cfg(not(feature = "simulator"))]
pub type InkyMockWhat<W> = InkyMock<What, W>;
