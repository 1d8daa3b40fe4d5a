//! Immutable catalog of selectable face shapes.
//!
//! Every [`ShapeId`] maps to exactly one [`ShapeDescriptor`] through an exhaustive `match`, so
//! [`lookup`] is total and adding a variant without a descriptor fails to compile.

use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};
use std::fmt;
use std::str::FromStr;

use crate::foundation::core::{Float4, Vec2};
use crate::foundation::error::FaceError;
use crate::shape::normalize_name;

/// Signed-distance primitive family. The discriminant is the `{prefix}_type` uniform.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum ShapeKind {
    /// `params = (half_width, half_height, corner_radius, _)`
    RoundedBox = 0,
    /// `params = (radius, thickness, _, _)`; zero thickness is a filled disc.
    Ring = 1,
    /// `params = (radius, thickness, aperture_rad, _)`
    Arc = 2,
    /// `params = (arm_length, thickness, opening_rad, _)`; points along +x before rotation.
    Caret = 3,
    /// `params = (arm_length, thickness, arm_count, _)`
    Star = 4,
    /// `params = (size, corner_radius, _, _)`
    Triangle = 5,
    /// `params = (half_size, thickness, corner_radius, _)`
    HollowBox = 6,
    /// `params = (half_width, amplitude, thickness, periods)`
    Wave = 7,
    /// `params = (radius, thickness, wobble_hz, wobble_amplitude)`; animated by the renderer clock.
    Scribble = 8,
}

impl ShapeKind {
    /// Integer written to `{prefix}_type`.
    pub fn code(self) -> i32 {
        self as i32
    }
}

/// Renderer contract for one feature shape.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ShapeDescriptor {
    /// Primitive family.
    pub kind: ShapeKind,
    /// Family-specific parameters, see [`ShapeKind`].
    pub params: Float4,
    /// Left-handed local offset; the right eye mirrors it on upload.
    pub offset: Vec2,
    /// Rotation in radians.
    pub rotation: f64,
}

impl ShapeDescriptor {
    const fn new(kind: ShapeKind, params: Float4, offset: Vec2, rotation: f64) -> Self {
        Self {
            kind,
            params,
            offset,
            rotation,
        }
    }
}

/// Selectable feature shape.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ShapeId {
    /// Small filled dot.
    Point,
    /// Vertical capsule.
    CapsuleV,
    /// Horizontal capsule.
    CapsuleH,
    /// Thin horizontal line.
    LineH,
    /// `^`
    CaretUp,
    /// `v`
    CaretDown,
    /// `<`
    CaretLeft,
    /// `>`
    CaretRight,
    /// Hollow circle.
    Circle,
    /// Upward arc.
    ArcUp,
    /// Downward arc.
    ArcDown,
    /// `x`
    Cross,
    /// `*`, three crossed strokes.
    Asterisk,
    /// Filled triangle.
    Triangle,
    /// Square outline.
    SquareHollow,
    /// `w` shaped mouth.
    WMouth,
    /// Animated wobbling loop.
    Scribble,
}

impl ShapeId {
    /// Every shape, in declaration order.
    pub const ALL: [ShapeId; 17] = [
        ShapeId::Point,
        ShapeId::CapsuleV,
        ShapeId::CapsuleH,
        ShapeId::LineH,
        ShapeId::CaretUp,
        ShapeId::CaretDown,
        ShapeId::CaretLeft,
        ShapeId::CaretRight,
        ShapeId::Circle,
        ShapeId::ArcUp,
        ShapeId::ArcDown,
        ShapeId::Cross,
        ShapeId::Asterisk,
        ShapeId::Triangle,
        ShapeId::SquareHollow,
        ShapeId::WMouth,
        ShapeId::Scribble,
    ];

    /// Stable snake_case name, as used by serde and `FromStr`.
    pub fn name(self) -> &'static str {
        match self {
            Self::Point => "point",
            Self::CapsuleV => "capsule_v",
            Self::CapsuleH => "capsule_h",
            Self::LineH => "line_h",
            Self::CaretUp => "caret_up",
            Self::CaretDown => "caret_down",
            Self::CaretLeft => "caret_left",
            Self::CaretRight => "caret_right",
            Self::Circle => "circle",
            Self::ArcUp => "arc_up",
            Self::ArcDown => "arc_down",
            Self::Cross => "cross",
            Self::Asterisk => "asterisk",
            Self::Triangle => "triangle",
            Self::SquareHollow => "square_hollow",
            Self::WMouth => "w_mouth",
            Self::Scribble => "scribble",
        }
    }

    /// Same as [`lookup`].
    pub fn descriptor(self) -> ShapeDescriptor {
        lookup(self)
    }
}

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ShapeId {
    type Err = FaceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = normalize_name(s);
        ShapeId::ALL
            .into_iter()
            .find(|id| normalize_name(id.name()) == key)
            .ok_or_else(|| FaceError::validation(format!("unknown shape '{}'", s.trim())))
    }
}

/// Look up the descriptor for `id`.
pub fn lookup(id: ShapeId) -> ShapeDescriptor {
    use ShapeKind as K;

    const CARET: Float4 = [0.07, 0.022, FRAC_PI_2, 0.0];
    const ARC: Float4 = [0.06, 0.02, 2.2, 0.0];
    const NO_OFFSET: Vec2 = Vec2::new(0.0, 0.0);

    match id {
        ShapeId::Point => ShapeDescriptor::new(K::Ring, [0.025, 0.0, 0.0, 0.0], NO_OFFSET, 0.0),
        ShapeId::CapsuleV => {
            ShapeDescriptor::new(K::RoundedBox, [0.03, 0.08, 0.03, 0.0], NO_OFFSET, 0.0)
        }
        ShapeId::CapsuleH => {
            ShapeDescriptor::new(K::RoundedBox, [0.08, 0.03, 0.03, 0.0], NO_OFFSET, 0.0)
        }
        ShapeId::LineH => {
            ShapeDescriptor::new(K::RoundedBox, [0.08, 0.012, 0.012, 0.0], NO_OFFSET, 0.0)
        }
        ShapeId::CaretUp => ShapeDescriptor::new(K::Caret, CARET, Vec2::new(0.0, -0.02), FRAC_PI_2),
        ShapeId::CaretDown => {
            ShapeDescriptor::new(K::Caret, CARET, Vec2::new(0.0, 0.02), -FRAC_PI_2)
        }
        ShapeId::CaretLeft => ShapeDescriptor::new(K::Caret, CARET, Vec2::new(0.02, 0.0), PI),
        ShapeId::CaretRight => ShapeDescriptor::new(K::Caret, CARET, Vec2::new(-0.02, 0.0), 0.0),
        ShapeId::Circle => ShapeDescriptor::new(K::Ring, [0.06, 0.018, 0.0, 0.0], NO_OFFSET, 0.0),
        ShapeId::ArcUp => ShapeDescriptor::new(K::Arc, ARC, Vec2::new(0.0, -0.03), 0.0),
        ShapeId::ArcDown => ShapeDescriptor::new(K::Arc, ARC, Vec2::new(0.0, 0.03), PI),
        ShapeId::Cross => {
            ShapeDescriptor::new(K::Star, [0.07, 0.02, 2.0, 0.0], NO_OFFSET, FRAC_PI_4)
        }
        ShapeId::Asterisk => ShapeDescriptor::new(K::Star, [0.07, 0.018, 3.0, 0.0], NO_OFFSET, 0.0),
        ShapeId::Triangle => {
            ShapeDescriptor::new(K::Triangle, [0.07, 0.01, 0.0, 0.0], Vec2::new(0.0, 0.01), 0.0)
        }
        ShapeId::SquareHollow => {
            ShapeDescriptor::new(K::HollowBox, [0.06, 0.018, 0.01, 0.0], NO_OFFSET, 0.0)
        }
        ShapeId::WMouth => ShapeDescriptor::new(K::Wave, [0.1, 0.03, 0.016, 2.0], NO_OFFSET, 0.0),
        ShapeId::Scribble => {
            ShapeDescriptor::new(K::Scribble, [0.06, 0.014, 3.0, 0.012], NO_OFFSET, 0.0)
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/shape/library.rs"]
mod tests;
