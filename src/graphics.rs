//! Graphics Support for the mock displays
//!
//! With the `graphics` feature every [InkyMock] is an embedded-graphics [DrawTarget]
//! over [TriColor], drawing straight into the buffer that [show](crate::traits::Inky::show)
//! renders.

use crate::buffer::Buffer;
use crate::color::TriColor;
use crate::mock::InkyMock;
use crate::traits::{PreviewWindow, Variant};
use embedded_graphics_core::prelude::*;

/// Display rotation, only 90° increments supported
#[derive(Default, Clone, Copy, PartialEq, Eq, Debug)]
pub enum DisplayRotation {
    /// No rotation
    #[default]
    Rotate0,
    /// Rotate by 90 degrees clockwise
    Rotate90,
    /// Rotate by 180 degrees clockwise
    Rotate180,
    /// Rotate 270 degrees clockwise
    Rotate270,
}

/// For use with embedded_grahics
impl<V: Variant, W: PreviewWindow> DrawTarget for InkyMock<V, W> {
    type Color = TriColor;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let rotation = self.rotation;
        let buffer = crate::traits::Inky::buffer_mut(self);
        for pixel in pixels {
            draw_pixel(buffer, rotation, pixel);
        }
        Ok(())
    }
}

/// For use with embedded_grahics
impl<V: Variant, W: PreviewWindow> OriginDimensions for InkyMock<V, W> {
    fn size(&self) -> Size {
        match self.rotation {
            DisplayRotation::Rotate0 | DisplayRotation::Rotate180 => Size::new(V::WIDTH, V::HEIGHT),
            DisplayRotation::Rotate90 | DisplayRotation::Rotate270 => {
                Size::new(V::HEIGHT, V::WIDTH)
            }
        }
    }
}

impl<V: Variant, W: PreviewWindow> InkyMock<V, W> {
    /// Set the rotation used for drawing.
    ///
    /// This only concerns future drawing made to it. Anything aready drawn
    /// stays as it is in the buffer.
    pub fn set_rotation(&mut self, rotation: DisplayRotation) {
        self.rotation = rotation;
    }

    /// Get current rotation
    pub fn rotation(&self) -> DisplayRotation {
        self.rotation
    }
}

// Maps a point drawn at `rotation` to buffer coordinates and stores the color index.
fn draw_pixel(buffer: &mut Buffer, rotation: DisplayRotation, pixel: Pixel<TriColor>) {
    let Pixel(point, color) = pixel;
    let width = buffer.width() as i32;
    let height = buffer.height() as i32;
    let (drawn_width, drawn_height) = match rotation {
        DisplayRotation::Rotate0 | DisplayRotation::Rotate180 => (width, height),
        DisplayRotation::Rotate90 | DisplayRotation::Rotate270 => (height, width),
    };

    // Out of range check, before mapping so the arithmetic below stays in range
    if !(0..drawn_width).contains(&point.x) || !(0..drawn_height).contains(&point.y) {
        return;
    }

    // as i32 = never use more than 2 billion pixel per line or per column
    let (x, y) = match rotation {
        DisplayRotation::Rotate0 => (point.x, point.y),
        DisplayRotation::Rotate90 => (width - 1 - point.y, point.x),
        DisplayRotation::Rotate180 => (width - 1 - point.x, height - 1 - point.y),
        DisplayRotation::Rotate270 => (point.y, height - 1 - point.x),
    };

    buffer.set(x as usize, y as usize, color.index());
}
