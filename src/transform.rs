//! Orientation of the panel buffer before it is rendered
//!
//! Every panel is mounted differently, the corrections are kept as plain tables of
//! [Transform] steps so they can be checked against the hardware at a glance.

use crate::buffer::Buffer;
use crate::error::Error;

/// One geometric step applied to a [Buffer]
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Transform {
    /// Mirror columns
    FlipLr,
    /// Mirror rows
    FlipUd,
    /// Quarter turns, counter-clockwise for positive values
    Rotate(i32),
    /// Reinterpret as `rows` x `cols`
    Reshape {
        /// Target row count
        rows: usize,
        /// Target column count
        cols: usize,
    },
}

impl Transform {
    /// Apply this step
    pub fn apply(&self, buffer: &Buffer) -> Result<Buffer, Error> {
        match *self {
            Transform::FlipLr => Ok(buffer.flip_lr()),
            Transform::FlipUd => Ok(buffer.flip_ud()),
            Transform::Rotate(k) => Ok(buffer.rot90(k)),
            Transform::Reshape { rows, cols } => buffer.reshape(rows, cols),
        }
    }
}

/// Apply `steps` in order
pub fn apply(buffer: &Buffer, steps: &[Transform]) -> Result<Buffer, Error> {
    let mut region = buffer.clone();
    for step in steps {
        region = step.apply(&region)?;
    }
    Ok(region)
}

/// Native geometry of a supported panel
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct PanelGeometry {
    /// Source columns the controller scans
    pub cols: u32,
    /// Source rows the controller scans
    pub rows: u32,
    /// Mounting rotation in degrees
    pub rotation: i32,
}

impl PanelGeometry {
    /// Rotation as quarter turns, rounded towards negative infinity
    pub fn quarter_turns(&self) -> i32 {
        self.rotation.div_euclid(90)
    }
}

/// (width, height) of every supported panel and its geometry
const RESOLUTIONS: [((u32, u32), PanelGeometry); 2] = [
    (
        (400, 300),
        PanelGeometry {
            cols: 400,
            rows: 300,
            rotation: 0,
        },
    ),
    (
        (212, 104),
        PanelGeometry {
            cols: 104,
            rows: 212,
            rotation: -90,
        },
    ),
];

/// Look up the geometry of a `width` x `height` panel
pub fn panel_geometry(width: u32, height: u32) -> Result<PanelGeometry, Error> {
    RESOLUTIONS
        .iter()
        .find(|(resolution, _)| *resolution == (width, height))
        .map(|(_, geometry)| *geometry)
        .ok_or(Error::UnsupportedResolution { width, height })
}

/// User flips plus the mounting rotation of a panel
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Orientation {
    /// Mirror the buffer columns
    pub v_flip: bool,
    /// Mirror the buffer rows
    pub h_flip: bool,
    /// Quarter turns, counter-clockwise for positive values
    pub quarter_turns: i32,
}

impl Orientation {
    /// The steps, in the order they are applied
    ///
    /// The flag names follow the panel's scan direction and not the buffer's, hence
    /// `v_flip` mirrors the columns of the buffer.
    pub fn transforms(&self) -> Vec<Transform> {
        let mut steps = Vec::with_capacity(3);
        if self.v_flip {
            steps.push(Transform::FlipLr);
        }
        if self.h_flip {
            steps.push(Transform::FlipUd);
        }
        if self.quarter_turns != 0 {
            steps.push(Transform::Rotate(self.quarter_turns));
        }
        steps
    }

    /// Apply the flips and the rotation to `buffer`
    pub fn apply(&self, buffer: &Buffer) -> Result<Buffer, Error> {
        apply(buffer, &self.transforms())
    }
}
