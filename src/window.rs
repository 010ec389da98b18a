//! Windows a [Renderer](crate::render::Renderer) can draw into

use crate::error::Error;
use crate::traits::PreviewWindow;

/// Title of the native preview window
pub const WINDOW_TITLE: &str = "Inky Preview";

/// A window that only exists in memory
///
/// Keeps the last presented frame, which makes it usable for tests and for rendering
/// previews on machines without a display. Resizing and closing are driven by the caller.
#[derive(Debug, Clone)]
pub struct HeadlessWindow {
    size: (u32, u32),
    open: bool,
    frame: Vec<u32>,
    frame_size: (u32, u32),
    presented: usize,
}

impl HeadlessWindow {
    /// Creates an open window of `width` x `height` pixels
    pub fn new(width: u32, height: u32) -> Self {
        HeadlessWindow {
            size: (width, height),
            open: true,
            frame: Vec::new(),
            frame_size: (0, 0),
            presented: 0,
        }
    }

    /// Change the size, as a user dragging the window border would
    pub fn resize(&mut self, width: u32, height: u32) {
        self.size = (width, height);
    }

    /// Close the window
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Last presented frame
    pub fn frame(&self) -> &[u32] {
        &self.frame
    }

    /// Size of the last presented frame
    pub fn frame_size(&self) -> (u32, u32) {
        self.frame_size
    }

    /// Number of frames presented so far
    pub fn presented(&self) -> usize {
        self.presented
    }
}

impl PreviewWindow for HeadlessWindow {
    fn size(&self) -> (u32, u32) {
        self.size
    }

    fn present(&mut self, frame: &[u32], width: u32, height: u32) -> Result<(), Error> {
        let expected = width as usize * height as usize;
        if frame.len() != expected {
            return Err(Error::ShapeMismatch {
                expected,
                actual: frame.len(),
            });
        }
        self.frame.clear();
        self.frame.extend_from_slice(frame);
        self.frame_size = (width, height);
        self.presented += 1;
        Ok(())
    }

    fn update(&mut self) {}

    fn is_open(&self) -> bool {
        self.open
    }
}

#[cfg(feature = "simulator")]
pub use self::native::MinifbWindow;

#[cfg(feature = "simulator")]
mod native {
    use std::time::Duration;

    use minifb::{Key, ScaleMode, Window, WindowOptions};

    use super::WINDOW_TITLE;
    use crate::error::Error;
    use crate::traits::PreviewWindow;

    pub(super) const UPDATE_INTERVAL: Duration = Duration::from_micros(16_600);

    /// A resizable desktop window
    ///
    /// Closed by the window manager or with `Escape`.
    pub struct MinifbWindow {
        window: Window,
    }

    impl MinifbWindow {
        /// Opens a window titled `title` of `width` x `height` pixels
        pub fn new(title: &str, width: u32, height: u32) -> Result<Self, Error> {
            let options = WindowOptions {
                resize: true,
                scale_mode: ScaleMode::Stretch,
                ..WindowOptions::default()
            };
            let mut window = Window::new(title, width as usize, height as usize, options)
                .map_err(|e| Error::Window(e.to_string()))?;
            // ~60 updates per second, paces the event loop in run_until_closed
            window.limit_update_rate(Some(UPDATE_INTERVAL));
            Ok(MinifbWindow { window })
        }

        /// Opens a window with the default title
        pub fn with_size(width: u32, height: u32) -> Result<Self, Error> {
            Self::new(WINDOW_TITLE, width, height)
        }
    }

    impl PreviewWindow for MinifbWindow {
        fn size(&self) -> (u32, u32) {
            let (width, height) = self.window.get_size();
            (width as u32, height as u32)
        }

        fn present(&mut self, frame: &[u32], width: u32, height: u32) -> Result<(), Error> {
            self.window
                .update_with_buffer(frame, width as usize, height as usize)
                .map_err(|e| Error::Window(e.to_string()))
        }

        fn update(&mut self) {
            self.window.update();
        }

        fn is_open(&self) -> bool {
            self.window.is_open() && !self.window.is_key_down(Key::Escape)
        }
    }
}
