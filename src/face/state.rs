use crate::animation::tween::Lerp;
use crate::shape::library::ShapeId;
use crate::shape::mood::{MoodId, ShapeTriple};

/// One independently shaped face part.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Feature {
    /// Left eye (`le`).
    LeftEye,
    /// Right eye (`re`), mirrored.
    RightEye,
    /// Mouth (`m`).
    Mouth,
}

impl Feature {
    /// All features in upload order.
    pub const ALL: [Feature; 3] = [Feature::LeftEye, Feature::RightEye, Feature::Mouth];

    /// Uniform name prefix.
    pub fn prefix(self) -> &'static str {
        match self {
            Self::LeftEye => "le",
            Self::RightEye => "re",
            Self::Mouth => "m",
        }
    }

    /// The right eye reuses left-handed descriptors reflected across the midline.
    pub fn is_mirrored(self) -> bool {
        matches!(self, Self::RightEye)
    }
}

impl ShapeTriple {
    /// Shape assigned to `feature`.
    pub fn get(&self, feature: Feature) -> ShapeId {
        match feature {
            Feature::LeftEye => self.left,
            Feature::RightEye => self.right,
            Feature::Mouth => self.mouth,
        }
    }

    /// Copy of `self` with one feature replaced.
    pub fn with(mut self, feature: Feature, shape: ShapeId) -> Self {
        match feature {
            Feature::LeftEye => self.left = shape,
            Feature::RightEye => self.right = shape,
            Feature::Mouth => self.mouth = shape,
        }
        self
    }
}

/// Per-feature visibility in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AlphaTriple {
    /// Left eye alpha.
    pub left: f64,
    /// Right eye alpha.
    pub right: f64,
    /// Mouth alpha.
    pub mouth: f64,
}

impl AlphaTriple {
    /// Every feature fully visible.
    pub const OPAQUE: AlphaTriple = AlphaTriple::splat(1.0);
    /// Every feature invisible.
    pub const HIDDEN: AlphaTriple = AlphaTriple::splat(0.0);

    /// Same alpha for all three features.
    pub const fn splat(v: f64) -> Self {
        Self {
            left: v,
            right: v,
            mouth: v,
        }
    }

    /// Alpha of `feature`.
    pub fn get(&self, feature: Feature) -> f64 {
        match feature {
            Feature::LeftEye => self.left,
            Feature::RightEye => self.right,
            Feature::Mouth => self.mouth,
        }
    }

    /// `true` when every feature is fully visible.
    pub fn is_opaque(&self) -> bool {
        Feature::ALL.into_iter().all(|f| self.get(f) >= 1.0)
    }
}

impl Default for AlphaTriple {
    fn default() -> Self {
        Self::OPAQUE
    }
}

impl Lerp for AlphaTriple {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Self {
            left: <f64 as Lerp>::lerp(&a.left, &b.left, t),
            right: <f64 as Lerp>::lerp(&a.right, &b.right, t),
            mouth: <f64 as Lerp>::lerp(&a.mouth, &b.mouth, t),
        }
    }
}

/// What the face displays right now.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct ExpressionState {
    mood: MoodId,
    shapes: ShapeTriple,
    alphas: AlphaTriple,
}

impl ExpressionState {
    /// Fully visible state showing `shapes`.
    pub fn new(mood: MoodId, shapes: ShapeTriple) -> Self {
        Self {
            mood,
            shapes,
            alphas: AlphaTriple::OPAQUE,
        }
    }

    /// Current mood (`Custom` after manual overrides).
    pub fn mood(&self) -> MoodId {
        self.mood
    }

    /// Displayed shapes.
    pub fn shapes(&self) -> ShapeTriple {
        self.shapes
    }

    /// Displayed alphas.
    pub fn alphas(&self) -> AlphaTriple {
        self.alphas
    }

    pub(crate) fn set_mood(&mut self, mood: MoodId) {
        self.mood = mood;
    }

    pub(crate) fn set_shapes(&mut self, shapes: ShapeTriple) {
        self.shapes = shapes;
    }

    pub(crate) fn set_alphas(&mut self, alphas: AlphaTriple) {
        self.alphas = AlphaTriple {
            left: alphas.left.clamp(0.0, 1.0),
            right: alphas.right.clamp(0.0, 1.0),
            mouth: alphas.mouth.clamp(0.0, 1.0),
        };
    }
}

#[cfg(test)]
#[path = "../../tests/unit/face/state.rs"]
mod tests;
