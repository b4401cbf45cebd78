//! Axis codes for the 24 base Euler-angle conventions.
//!
//! Following Shoemake (Graphics Gems IV, p. 222), every base convention is packed into
//! four fields:
//!
//! | Field | Values |
//! |-------|--------|
//! | inner axis | X = 0, Y = 1, Z = 2 |
//! | parity | Even = 0 (cyclic X→Y→Z), Odd = 1 |
//! | repetition | No = 0, Yes = 1 (first and third axes coincide) |
//! | frame | Static = 0, Rotating = 1 |
//!
//! The three index slots `(i, j, k)` used by the decomposer come from the inner axis and
//! parity alone. The physical axis sequence the angle triple refers to additionally
//! depends on repetition and frame:
//!
//! ```
//! use rotation_euler::{Axis, AxisCode, Frame, Parity};
//!
//! // XYZ about static axes and ZYX about rotating axes share the same slots.
//! let xyz_s = AxisCode::new(Axis::X, Parity::Even, false, Frame::Static);
//! let zyx_r = AxisCode::new(Axis::X, Parity::Even, false, Frame::Rotating);
//! assert_eq!(xyz_s.slots(), zyx_r.slots());
//! assert_eq!(xyz_s.axis_sequence(), [Axis::X, Axis::Y, Axis::Z]);
//! assert_eq!(zyx_r.axis_sequence(), [Axis::Z, Axis::Y, Axis::X]);
//! ```

use std::fmt;

use rotation_core::{RotationError, RotationResult};

/// Cyclic successor table, padded so `NEXT_AXIS[i + 1]` is valid for every axis.
pub(crate) const NEXT_AXIS: [usize; 4] = [1, 2, 0, 1];

/// Coordinate axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Axis> {
        Self::ALL.get(index).copied()
    }

    /// Cyclic successor: X→Y→Z→X.
    #[inline]
    pub fn next(self) -> Axis {
        Self::ALL[NEXT_AXIS[self.index()]]
    }

    pub fn label(self) -> char {
        match self {
            Axis::X => 'X',
            Axis::Y => 'Y',
            Axis::Z => 'Z',
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Parity {
    /// Axes follow the cyclic order X→Y→Z.
    Even,
    /// Axes follow the reverse order.
    Odd,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Frame {
    /// Rotations about fixed (extrinsic) axes.
    Static,
    /// Rotations about the body's own (intrinsic) axes.
    Rotating,
}

impl Frame {
    pub fn suffix(self) -> char {
        match self {
            Frame::Static => 's',
            Frame::Rotating => 'r',
        }
    }
}

/// Packed description of one base convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AxisCode {
    pub inner: Axis,
    pub parity: Parity,
    pub repetition: bool,
    pub frame: Frame,
}

impl AxisCode {
    pub const fn new(inner: Axis, parity: Parity, repetition: bool, frame: Frame) -> Self {
        Self {
            inner,
            parity,
            repetition,
            frame,
        }
    }

    /// Builds a code from the numeric `(inner axis, parity, repetition, frame)` tuple.
    ///
    /// Every component must be in range: axis in `0..3`, the others `0` or `1`.
    pub fn from_tuple(code: (u8, u8, u8, u8)) -> RotationResult<Self> {
        let (i, n, s, f) = code;
        let invalid = |reason: &str| {
            RotationError::invalid_convention(&format!("{:?}", code), reason)
        };

        let inner =
            Axis::from_index(i as usize).ok_or_else(|| invalid("inner axis must be 0, 1 or 2"))?;
        let parity = match n {
            0 => Parity::Even,
            1 => Parity::Odd,
            _ => return Err(invalid("parity must be 0 or 1")),
        };
        let repetition = match s {
            0 => false,
            1 => true,
            _ => return Err(invalid("repetition must be 0 or 1")),
        };
        let frame = match f {
            0 => Frame::Static,
            1 => Frame::Rotating,
            _ => return Err(invalid("frame must be 0 or 1")),
        };

        Ok(Self::new(inner, parity, repetition, frame))
    }

    /// The numeric `(inner axis, parity, repetition, frame)` tuple.
    pub fn to_tuple(self) -> (u8, u8, u8, u8) {
        (
            self.inner.index() as u8,
            (self.parity == Parity::Odd) as u8,
            self.repetition as u8,
            (self.frame == Frame::Rotating) as u8,
        )
    }

    /// Matrix index slots `(i, j, k)`. Odd parity exchanges `j` and `k`.
    #[inline]
    pub fn slots(self) -> (usize, usize, usize) {
        let i = self.inner.index();
        let n = (self.parity == Parity::Odd) as usize;
        (i, NEXT_AXIS[i + n], NEXT_AXIS[i + 1 - n])
    }

    /// The physical rotation axes, in the order the angle triple refers to them.
    pub fn axis_sequence(self) -> [Axis; 3] {
        let (i, j, k) = self.slots();
        let h = if self.repetition { i } else { k };
        let sequence = [Axis::ALL[i], Axis::ALL[j], Axis::ALL[h]];
        match self.frame {
            Frame::Static => sequence,
            Frame::Rotating => [sequence[2], sequence[1], sequence[0]],
        }
    }

    /// Canonical name such as `XYZs` or `ZXZr`.
    pub fn canonical_name(self) -> String {
        let [a, b, c] = self.axis_sequence();
        format!("{}{}{}{}", a, b, c, self.frame.suffix())
    }
}

impl fmt::Display for AxisCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical_name())
    }
}
