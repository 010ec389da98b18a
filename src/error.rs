use core::fmt::{Display, Formatter};

/// Inky mock error type
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Error {
    /// The device resolution is not one of the supported panels
    UnsupportedResolution {
        /// Requested width in pixels
        width: u32,
        /// Requested height in pixels
        height: u32,
    },

    /// The color variant is not one of `black`, `red` or `yellow`
    UnsupportedColor(String),

    /// A buffer or image did not have the number of pixels the operation needs
    ShapeMismatch {
        /// Number of pixels expected
        expected: usize,
        /// Number of pixels provided
        actual: usize,
    },

    /// The native window could not be created or drawn to
    Window(String),

    /// The preview window was closed, there is nothing left to draw into
    WindowClosed,
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::UnsupportedResolution { width, height } => {
                write!(f, "Resolution {width}x{height} not supported!")
            }
            Self::UnsupportedColor(color) => write!(f, "Colour {color} is not supported!"),
            Self::ShapeMismatch { expected, actual } => write!(
                f,
                "expected a buffer of {expected} pixels but got {actual} pixels"
            ),
            Self::Window(reason) => write!(f, "preview window failed: {reason}"),
            Self::WindowClosed => write!(f, "the preview window has been closed"),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        let err = Error::UnsupportedResolution {
            width: 100,
            height: 50,
        };
        assert_eq!(err.to_string(), "Resolution 100x50 not supported!");

        let err = Error::UnsupportedColor("green".into());
        assert_eq!(err.to_string(), "Colour green is not supported!");

        let err = Error::ShapeMismatch {
            expected: 4,
            actual: 3,
        };
        assert_eq!(
            err.to_string(),
            "expected a buffer of 4 pixels but got 3 pixels"
        );
    }
}
