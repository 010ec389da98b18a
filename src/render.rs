//! Turns transformed buffers into frames for a [PreviewWindow]

use image::imageops::{self, FilterType};
use image::{Rgb, RgbImage};

use crate::buffer::Buffer;
use crate::color::Palette;
use crate::error::Error;
use crate::traits::PreviewWindow;

/// Whether anything has been drawn yet
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum RenderState {
    /// No canvas, nothing shown so far (or the window was closed)
    Uninitialized,
    /// A canvas exists and is updated in place
    Displaying,
}

/// The image currently shown in the window
///
/// `source` is the palette mapped buffer at its native size, `scaled` the copy
/// fitted to the window. Every resize scales from `source` again.
#[derive(Debug)]
pub struct Canvas {
    source: RgbImage,
    scaled: RgbImage,
    frame: Vec<u32>,
}

impl Canvas {
    fn new(source: RgbImage, width: u32, height: u32) -> Canvas {
        let mut canvas = Canvas {
            source,
            scaled: RgbImage::new(0, 0),
            frame: Vec::new(),
        };
        canvas.rescale(width, height);
        canvas
    }

    fn rescale(&mut self, width: u32, height: u32) {
        self.scaled = imageops::resize(&self.source, width, height, FilterType::Nearest);
        self.frame.clear();
        self.frame.extend(
            self.scaled
                .pixels()
                .map(|&Rgb([r, g, b])| ((r as u32) << 16) | ((g as u32) << 8) | b as u32),
        );
    }

    /// Unscaled image of the last shown buffer
    pub fn source(&self) -> &RgbImage {
        &self.source
    }

    /// Image as drawn in the window
    pub fn scaled(&self) -> &RgbImage {
        &self.scaled
    }

    /// `0x00RRGGBB` pixels of the scaled image
    pub fn frame(&self) -> &[u32] {
        &self.frame
    }
}

/// Draws buffers into a window, keeping them scaled to the window size
pub struct Renderer<W> {
    window: W,
    palette: Palette,
    surface: (u32, u32),
    canvas: Option<Canvas>,
}

impl<W: PreviewWindow> Renderer<W> {
    /// Creates a renderer drawing into `window`, starting with a `width` x `height` surface
    pub fn new(window: W, palette: Palette, width: u32, height: u32) -> Self {
        Renderer {
            window,
            palette,
            surface: (width, height),
            canvas: None,
        }
    }

    /// Current state
    pub fn state(&self) -> RenderState {
        match self.canvas {
            Some(_) => RenderState::Displaying,
            None => RenderState::Uninitialized,
        }
    }

    /// The canvas, once something has been shown
    pub fn canvas(&self) -> Option<&Canvas> {
        self.canvas.as_ref()
    }

    /// Size the image is scaled to
    pub fn surface_size(&self) -> (u32, u32) {
        self.surface
    }

    /// The window drawn into
    pub fn window(&self) -> &W {
        &self.window
    }

    /// The window drawn into, mutable
    pub fn window_mut(&mut self) -> &mut W {
        &mut self.window
    }

    /// Map `region` through the palette and draw it, scaled to the current surface
    pub fn display(&mut self, region: &Buffer) -> Result<(), Error> {
        if !self.window.is_open() {
            return Err(Error::WindowClosed);
        }

        let source = self.to_image(region);
        let (width, height) = self.surface;
        match self.canvas.as_mut() {
            Some(canvas) => {
                canvas.source = source;
                canvas.rescale(width, height);
            }
            None => {
                log::debug!("creating {width}x{height} canvas");
                self.canvas = Some(Canvas::new(source, width, height));
            }
        }
        self.redraw()?;
        self.pump_events()
    }

    /// Fit the shown image to a new surface size and redraw it
    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), Error> {
        if width == 0 || height == 0 {
            return Ok(());
        }
        log::debug!("resizing canvas to {width}x{height}");
        self.surface = (width, height);
        if let Some(canvas) = self.canvas.as_mut() {
            canvas.rescale(width, height);
            self.redraw()?;
        }
        Ok(())
    }

    /// Let the window process its events and follow any change of its size
    pub fn pump_events(&mut self) -> Result<(), Error> {
        self.window.update();
        if !self.window.is_open() {
            self.release();
            return Ok(());
        }
        let size = self.window.size();
        if size != self.surface {
            self.resize(size.0, size.1)?;
        }
        Ok(())
    }

    /// Block until the window is closed, following resizes meanwhile
    pub fn run_until_closed(&mut self) -> Result<(), Error> {
        while self.window.is_open() {
            self.pump_events()?;
        }
        self.release();
        Ok(())
    }

    fn release(&mut self) {
        if self.canvas.take().is_some() {
            log::debug!("window closed, canvas released");
        }
    }

    fn redraw(&mut self) -> Result<(), Error> {
        if let Some(canvas) = &self.canvas {
            let (width, height) = canvas.scaled.dimensions();
            self.window.present(&canvas.frame, width, height)?;
        }
        Ok(())
    }

    fn to_image(&self, region: &Buffer) -> RgbImage {
        RgbImage::from_fn(region.width(), region.height(), |x, y| {
            let index = region.get(x as usize, y as usize).unwrap_or_default();
            Rgb(self.palette.rgb(index))
        })
    }
}
