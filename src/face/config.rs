use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::animation::ease::Ease;
use crate::foundation::core::{Vec2, is_finite_vec2};
use crate::foundation::error::{FaceError, FaceResult};
use crate::shape::mood::{MoodId, ShapeTriple};

/// Face layout. Passed straight through to the positional uniforms.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct FaceTopology {
    /// Uniform face scale (`face_scale`).
    pub scale: f64,
    /// Face center (`face_center`).
    pub center: Vec2,
    /// Horizontal distance between the two eye origins.
    pub eye_spacing: f64,
    /// Vertical position of both eye origins.
    pub eye_height: f64,
    /// Vertical position of the mouth origin.
    pub mouth_y: f64,
}

impl Default for FaceTopology {
    fn default() -> Self {
        Self {
            scale: 1.0,
            center: Vec2::ZERO,
            eye_spacing: 0.5,
            eye_height: 0.15,
            mouth_y: -0.2,
        }
    }
}

impl FaceTopology {
    /// `le_origin` uniform.
    pub fn left_eye_origin(&self) -> Vec2 {
        Vec2::new(-self.eye_spacing / 2.0, self.eye_height)
    }

    /// `re_origin` uniform.
    pub fn right_eye_origin(&self) -> Vec2 {
        Vec2::new(self.eye_spacing / 2.0, self.eye_height)
    }

    /// `m_origin` uniform.
    pub fn mouth_origin(&self) -> Vec2 {
        Vec2::new(0.0, self.mouth_y)
    }

    /// Reject non-finite values and a non-positive scale.
    pub fn validate(&self) -> FaceResult<()> {
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(FaceError::config("topology.scale must be finite and > 0"));
        }
        if !is_finite_vec2(self.center) {
            return Err(FaceError::config("topology.center must be finite"));
        }
        if !self.eye_spacing.is_finite()
            || !self.eye_height.is_finite()
            || !self.mouth_y.is_finite()
        {
            return Err(FaceError::config(
                "topology eye_spacing/eye_height/mouth_y must be finite",
            ));
        }
        Ok(())
    }
}

/// Default crossfade timing.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TransitionConfig {
    /// Full fade-out + fade-in duration. `0` disables animation.
    pub duration_secs: f64,
    /// Curve used for both halves of the crossfade.
    pub ease: Ease,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            duration_secs: 0.2,
            ease: Ease::OutCubic,
        }
    }
}

/// When a manual shape assignment switches the mood to `Custom`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ManualOverride {
    /// Every manual assignment exits preset mode.
    #[default]
    Always,
    /// Only assignments that change a feature's requested shape exit preset mode.
    OnChange,
}

/// Full face configuration, usually loaded from JSON.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct FaceConfig {
    /// Layout passed through to positional uniforms.
    pub topology: FaceTopology,
    /// Mood shown at startup.
    pub default_mood: MoodId,
    /// Shapes used at startup when `default_mood` is `custom`.
    pub initial_shapes: ShapeTriple,
    /// Default crossfade timing.
    pub transition: TransitionConfig,
    /// When manual shape assignment switches the mood to `Custom`.
    pub manual_override: ManualOverride,
}

impl FaceConfig {
    /// Parse a face configuration from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> FaceResult<Self> {
        let cfg: FaceConfig = serde_json::from_reader(r)
            .map_err(|e| FaceError::serde(format!("parse face config JSON: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Parse a face configuration from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> FaceResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            FaceError::config(format!("open face config '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Validate topology and transition timing.
    pub fn validate(&self) -> FaceResult<()> {
        self.topology.validate()?;
        let d = self.transition.duration_secs;
        if !d.is_finite() || d < 0.0 {
            return Err(FaceError::config(
                "transition.duration_secs must be finite and >= 0",
            ));
        }
        Ok(())
    }

    /// Shapes displayed when the face is first created.
    pub fn startup_shapes(&self) -> ShapeTriple {
        self.default_mood.preset().unwrap_or(self.initial_shapes)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/face/config.rs"]
mod tests;
