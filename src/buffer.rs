//! The indexed pixel buffer and its geometry primitives

use crate::error::Error;

/// 2D buffer of color indices, stored row major
///
/// `rows` is the height and `cols` the width, so pixel `(x, y)` lives in row `y`, column `x`.
/// The flip/rotate operations follow the usual array conventions: `flip_lr` mirrors columns,
/// `flip_ud` mirrors rows and `rot90` turns counter-clockwise for positive `k`.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Buffer {
    rows: usize,
    cols: usize,
    data: Vec<u8>,
}

impl Buffer {
    /// A white buffer of `width` x `height` pixels
    pub fn new(width: u32, height: u32) -> Buffer {
        let (rows, cols) = (height as usize, width as usize);
        Buffer {
            rows,
            cols,
            data: vec![0u8; rows * cols],
        }
    }

    /// Wrap existing row major data
    ///
    /// A shape whose size does not fit in `usize` is reported as `expected: usize::MAX`.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<u8>) -> Result<Buffer, Error> {
        let expected = rows.checked_mul(cols).unwrap_or(usize::MAX);
        if expected != data.len() {
            return Err(Error::ShapeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Buffer { rows, cols, data })
    }

    /// Number of rows (height)
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns (width)
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Width in pixels
    pub fn width(&self) -> u32 {
        self.cols as u32
    }

    /// Height in pixels
    pub fn height(&self) -> u32 {
        self.rows as u32
    }

    /// Raw row major data
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// One row of the buffer, `None` if out of range
    pub fn row(&self, y: usize) -> Option<&[u8]> {
        if y >= self.rows {
            return None;
        }
        Some(self.line(y))
    }

    // y < rows
    fn line(&self, y: usize) -> &[u8] {
        &self.data[y * self.cols..(y + 1) * self.cols]
    }

    /// Color index at `(x, y)`, `None` if out of range
    pub fn get(&self, x: usize, y: usize) -> Option<u8> {
        if x >= self.cols || y >= self.rows {
            return None;
        }
        Some(self.data[y * self.cols + x])
    }

    /// Set the color index at `(x, y)`, out of range coordinates are ignored
    pub fn set(&mut self, x: usize, y: usize, index: u8) {
        if x < self.cols && y < self.rows {
            self.data[y * self.cols + x] = index;
        }
    }

    /// Set every pixel to `index`
    pub fn fill(&mut self, index: u8) {
        self.data.fill(index);
    }

    /// Overwrite all pixels from row major data of the same size
    pub fn copy_from(&mut self, data: &[u8]) -> Result<(), Error> {
        if data.len() != self.data.len() {
            return Err(Error::ShapeMismatch {
                expected: self.data.len(),
                actual: data.len(),
            });
        }
        self.data.copy_from_slice(data);
        Ok(())
    }

    /// Mirror left/right (reverse every row)
    pub fn flip_lr(&self) -> Buffer {
        let mut data = Vec::with_capacity(self.data.len());
        for y in 0..self.rows {
            data.extend(self.line(y).iter().rev());
        }
        Buffer { data, ..*self }
    }

    /// Mirror up/down (reverse the row order)
    pub fn flip_ud(&self) -> Buffer {
        let mut data = Vec::with_capacity(self.data.len());
        for y in (0..self.rows).rev() {
            data.extend_from_slice(self.line(y));
        }
        Buffer { data, ..*self }
    }

    /// Rotate by `k` quarter turns, counter-clockwise for positive `k`
    pub fn rot90(&self, k: i32) -> Buffer {
        let (rows, cols) = (self.rows, self.cols);
        let src = &self.data;
        match k.rem_euclid(4) {
            0 => self.clone(),
            1 => {
                let mut data = Vec::with_capacity(src.len());
                for i in 0..cols {
                    for j in 0..rows {
                        data.push(src[j * cols + (cols - 1 - i)]);
                    }
                }
                Buffer {
                    rows: cols,
                    cols: rows,
                    data,
                }
            }
            2 => {
                let mut data = src.clone();
                data.reverse();
                Buffer { data, ..*self }
            }
            _ => {
                let mut data = Vec::with_capacity(src.len());
                for i in 0..cols {
                    for j in 0..rows {
                        data.push(src[(rows - 1 - j) * cols + i]);
                    }
                }
                Buffer {
                    rows: cols,
                    cols: rows,
                    data,
                }
            }
        }
    }

    /// Reinterpret the data as `rows` x `cols` without moving any pixel
    pub fn reshape(&self, rows: usize, cols: usize) -> Result<Buffer, Error> {
        Buffer::from_vec(rows, cols, self.data.clone())
    }
}
