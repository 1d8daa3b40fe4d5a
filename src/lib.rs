//! Procedural face expressions built from signed-distance shapes.
//!
//! A face has three independently shaped features (left eye, right eye, mouth). Each feature
//! displays one entry of a fixed shape catalog and the renderer reads the result as named
//! uniforms. This crate owns everything up to that uniform boundary:
//!
//! 1. **Catalog**: [`ShapeId`] -> [`ShapeDescriptor`] via [`lookup`] (total, immutable)
//! 2. **Presets**: [`MoodId`] -> shape triple via [`resolve`] (`Custom` resolves to nothing)
//! 3. **State**: [`ExpressionState`] holds the current mood, shapes and alphas
//! 4. **Transitions**: [`TransitionEngine`] crossfades between shape triples, swapping shapes
//!    only while every feature is invisible
//!
//! [`FaceController`] ties these together behind the programmatic API and writes into any
//! [`UniformSink`].
//!
//! # Execution model
//!
//! Single-threaded and tick-driven: the host calls [`FaceController::tick`] once per frame.
//! There is no internal clock, no background work and at most one crossfade in flight.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod face;
mod foundation;
mod render;
mod shape;

pub use animation::ease::Ease;
pub use animation::tween::{Lerp, Tween};
pub use face::config::{FaceConfig, FaceTopology, ManualOverride, TransitionConfig};
pub use face::controller::{FaceController, TransitionTime};
pub use face::state::{AlphaTriple, ExpressionState, Feature};
pub use face::transition::{Phase, TransitionEngine, TransitionEvent, TransitionSession};
pub use foundation::core::{Float4, Vec2};
pub use foundation::error::{FaceError, FaceResult};
pub use render::uniforms::{InMemoryUniforms, UniformSink, UniformValue};
pub use render::upload::{
    FACE_CENTER, FACE_SCALE, LEFT_EYE_ORIGIN, MOUTH_ORIGIN, RIGHT_EYE_ORIGIN, upload_alpha,
    upload_feature, upload_topology,
};
pub use shape::library::{ShapeDescriptor, ShapeId, ShapeKind, lookup};
pub use shape::mood::{MoodId, MoodPreset, ShapeTriple, resolve};
