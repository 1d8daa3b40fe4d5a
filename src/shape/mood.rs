//! Mood presets: named shape triples for the three face features.

use std::fmt;
use std::str::FromStr;

use crate::foundation::error::FaceError;
use crate::shape::library::ShapeId;
use crate::shape::normalize_name;

/// One shape per feature.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct ShapeTriple {
    /// Left eye shape.
    pub left: ShapeId,
    /// Right eye shape.
    pub right: ShapeId,
    /// Mouth shape.
    pub mouth: ShapeId,
}

impl ShapeTriple {
    /// Build a triple from its three shapes.
    pub const fn new(left: ShapeId, right: ShapeId, mouth: ShapeId) -> Self {
        Self { left, right, mouth }
    }
}

impl Default for ShapeTriple {
    fn default() -> Self {
        IDLE
    }
}

/// A preset is a shape triple keyed by a [`MoodId`].
pub type MoodPreset = ShapeTriple;

/// Named expression. `Custom` is the passive mode where the last manual selection stands.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum MoodId {
    /// No preset; the last manual selection stands.
    Custom,
    /// Neutral resting face.
    #[default]
    Idle,
    /// `> <` eyes over a downward arc.
    Pain,
    /// `x` eyes, flat mouth.
    Dead,
    /// `> <` eyes, `w` mouth.
    Joy,
    /// Ring eyes, dot mouth.
    Shock,
    /// One eye narrowed.
    Suspicious,
    /// Arc eyes over a triangle mouth.
    Complaint,
    /// Flat lines everywhere.
    DeadInside,
    /// Asterisk eyes, hollow square mouth.
    Scream,
}

impl MoodId {
    /// Every mood including `Custom`, in declaration order.
    pub const ALL: [MoodId; 10] = [
        MoodId::Custom,
        MoodId::Idle,
        MoodId::Pain,
        MoodId::Dead,
        MoodId::Joy,
        MoodId::Shock,
        MoodId::Suspicious,
        MoodId::Complaint,
        MoodId::DeadInside,
        MoodId::Scream,
    ];

    /// Stable snake_case name, as used by serde and `FromStr`.
    pub fn name(self) -> &'static str {
        match self {
            Self::Custom => "custom",
            Self::Idle => "idle",
            Self::Pain => "pain",
            Self::Dead => "dead",
            Self::Joy => "joy",
            Self::Shock => "shock",
            Self::Suspicious => "suspicious",
            Self::Complaint => "complaint",
            Self::DeadInside => "dead_inside",
            Self::Scream => "scream",
        }
    }

    /// `true` for [`MoodId::Custom`].
    pub fn is_custom(self) -> bool {
        self == Self::Custom
    }

    /// Same as [`resolve`].
    pub fn preset(self) -> Option<MoodPreset> {
        resolve(self)
    }
}

impl fmt::Display for MoodId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MoodId {
    type Err = FaceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = normalize_name(s);
        MoodId::ALL
            .into_iter()
            .find(|m| normalize_name(m.name()) == key)
            .ok_or_else(|| FaceError::validation(format!("unknown mood '{}'", s.trim())))
    }
}

const IDLE: ShapeTriple = ShapeTriple::new(ShapeId::CapsuleV, ShapeId::CapsuleV, ShapeId::LineH);

/// Resolve the preset for `mood`. `Custom` never overwrites shapes and resolves to `None`.
pub fn resolve(mood: MoodId) -> Option<MoodPreset> {
    use ShapeId as S;

    let preset = match mood {
        MoodId::Custom => return None,
        MoodId::Idle => IDLE,
        MoodId::Pain => ShapeTriple::new(S::CaretRight, S::CaretLeft, S::ArcDown),
        MoodId::Dead => ShapeTriple::new(S::Cross, S::Cross, S::LineH),
        MoodId::Joy => ShapeTriple::new(S::CaretRight, S::CaretLeft, S::WMouth),
        MoodId::Shock => ShapeTriple::new(S::Circle, S::Circle, S::Point),
        MoodId::Suspicious => ShapeTriple::new(S::LineH, S::CapsuleV, S::LineH),
        MoodId::Complaint => ShapeTriple::new(S::ArcDown, S::ArcDown, S::Triangle),
        MoodId::DeadInside => ShapeTriple::new(S::LineH, S::LineH, S::LineH),
        MoodId::Scream => ShapeTriple::new(S::Asterisk, S::Asterisk, S::SquareHollow),
    };
    Some(preset)
}

#[cfg(test)]
#[path = "../../tests/unit/shape/mood.rs"]
mod tests;
