use crate::face::config::{FaceConfig, FaceTopology, ManualOverride, TransitionConfig};
use crate::face::state::{AlphaTriple, ExpressionState, Feature};
use crate::face::transition::{Phase, TransitionEngine, TransitionEvent};
use crate::foundation::error::{FaceError, FaceResult};
use crate::render::uniforms::UniformSink;
use crate::render::upload::{upload_alpha, upload_feature, upload_topology};
use crate::shape::library::{ShapeId, lookup};
use crate::shape::mood::{MoodId, ShapeTriple, resolve};

/// Duration of a requested expression change.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum TransitionTime {
    /// Use the configured [`TransitionConfig::duration_secs`].
    #[default]
    Default,
    /// Explicit duration in seconds. `0` applies the change immediately.
    Secs(f64),
}

impl TransitionTime {
    /// Apply without a crossfade.
    pub const INSTANT: TransitionTime = TransitionTime::Secs(0.0);

    /// Resolve to seconds. Negative or non-finite durations are rejected, never defaulted.
    pub fn resolve(self, default_secs: f64) -> FaceResult<f64> {
        match self {
            Self::Default => Ok(default_secs),
            Self::Secs(s) if s.is_finite() && s >= 0.0 => Ok(s),
            Self::Secs(s) => Err(FaceError::validation(format!(
                "transition duration must be finite and >= 0, got {s}"
            ))),
        }
    }
}

impl From<f64> for TransitionTime {
    fn from(secs: f64) -> Self {
        Self::Secs(secs)
    }
}

impl From<Option<f64>> for TransitionTime {
    fn from(secs: Option<f64>) -> Self {
        secs.map_or(Self::Default, Self::Secs)
    }
}

/// Drives one procedural face: owns its expression state, the crossfade engine and
/// (optionally) the uniform sink of the surface it renders into.
///
/// Until a sink is attached every upload is a no-op; attaching one resynchronizes fully.
/// While inactive (not yet part of a running scene) every change applies immediately.
#[derive(Debug)]
pub struct FaceController<S> {
    config: FaceConfig,
    state: ExpressionState,
    engine: TransitionEngine,
    sink: Option<S>,
    active: bool,
}

impl<S: UniformSink> FaceController<S> {
    /// Build an inactive face showing the configured startup shapes, with no sink.
    pub fn new(config: FaceConfig) -> FaceResult<Self> {
        config.validate()?;
        let state = ExpressionState::new(config.default_mood, config.startup_shapes());
        Ok(Self {
            config,
            state,
            engine: TransitionEngine::new(),
            sink: None,
            active: false,
        })
    }

    /// Like [`FaceController::new`], then attach `sink`.
    pub fn with_sink(config: FaceConfig, sink: S) -> FaceResult<Self> {
        let mut face = Self::new(config)?;
        face.attach_sink(sink);
        Ok(face)
    }

    /// Attach the uniform sink and upload the full state into it.
    pub fn attach_sink(&mut self, sink: S) {
        self.sink = Some(sink);
        self.resync();
    }

    /// Detach the sink; later writes are dropped until one is attached again.
    pub fn detach_sink(&mut self) -> Option<S> {
        self.sink.take()
    }

    /// Borrow the attached sink.
    pub fn sink(&self) -> Option<&S> {
        self.sink.as_ref()
    }

    /// Mutably borrow the attached sink.
    pub fn sink_mut(&mut self) -> Option<&mut S> {
        self.sink.as_mut()
    }

    /// Host lifecycle hook. Going inactive lands any live crossfade on its targets.
    pub fn set_active(&mut self, active: bool) {
        if active == self.active {
            return;
        }
        self.active = active;
        if active {
            tracing::debug!("face active");
            self.resync();
        } else if let Some(targets) = self.engine.pending_targets() {
            tracing::debug!("face inactive; finishing crossfade immediately");
            self.apply_immediate(targets);
        }
    }

    /// `true` while the host scene is running.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Current configuration.
    pub fn config(&self) -> &FaceConfig {
        &self.config
    }

    /// Replace the layout and re-upload positional uniforms.
    pub fn set_topology(&mut self, topology: FaceTopology) -> FaceResult<()> {
        topology.validate()?;
        self.config.topology = topology;
        if let Some(sink) = self.sink.as_mut() {
            upload_topology(sink, &self.config.topology);
        }
        Ok(())
    }

    /// Replace the default timing. A live crossfade keeps the timing it started with.
    pub fn set_transition_config(&mut self, transition: TransitionConfig) -> FaceResult<()> {
        let d = transition.duration_secs;
        if !d.is_finite() || d < 0.0 {
            return Err(FaceError::config(
                "transition.duration_secs must be finite and >= 0",
            ));
        }
        self.config.transition = transition;
        Ok(())
    }

    /// Change when manual assignments switch the mood to `Custom`.
    pub fn set_manual_override(&mut self, policy: ManualOverride) {
        self.config.manual_override = policy;
    }

    /// Switch to a mood preset. `Custom` only changes the mood; shapes stay as they are.
    #[tracing::instrument(skip(self))]
    pub fn set_mood(&mut self, mood: MoodId, time: TransitionTime) -> FaceResult<()> {
        let duration = self.resolve_time(time)?;
        self.state.set_mood(mood);
        match resolve(mood) {
            Some(preset) => self.request(preset, duration),
            None => tracing::debug!("custom mood keeps current shapes"),
        }
        Ok(())
    }

    /// Set all three shapes manually.
    #[tracing::instrument(skip(self))]
    pub fn set_custom_face(
        &mut self,
        left: ShapeId,
        right: ShapeId,
        mouth: ShapeId,
        time: TransitionTime,
    ) -> FaceResult<()> {
        let duration = self.resolve_time(time)?;
        let targets = ShapeTriple::new(left, right, mouth);
        self.enter_custom(targets != self.requested_shapes());
        self.request(targets, duration);
        Ok(())
    }

    /// Set one feature's shape manually; the other two keep their requested shapes.
    #[tracing::instrument(skip(self))]
    pub fn set_shape(
        &mut self,
        feature: Feature,
        shape: ShapeId,
        time: TransitionTime,
    ) -> FaceResult<()> {
        let duration = self.resolve_time(time)?;
        let base = self.requested_shapes();
        let targets = base.with(feature, shape);
        self.enter_custom(targets != base);
        self.request(targets, duration);
        Ok(())
    }

    /// Shorthand for [`FaceController::set_shape`] on the left eye.
    pub fn set_left_eye(&mut self, shape: ShapeId, time: TransitionTime) -> FaceResult<()> {
        self.set_shape(Feature::LeftEye, shape, time)
    }

    /// Shorthand for [`FaceController::set_shape`] on the right eye.
    pub fn set_right_eye(&mut self, shape: ShapeId, time: TransitionTime) -> FaceResult<()> {
        self.set_shape(Feature::RightEye, shape, time)
    }

    /// Shorthand for [`FaceController::set_shape`] on the mouth.
    pub fn set_mouth(&mut self, shape: ShapeId, time: TransitionTime) -> FaceResult<()> {
        self.set_shape(Feature::Mouth, shape, time)
    }

    /// Per-frame update. All writes for this tick land before it returns.
    pub fn tick(&mut self, dt_secs: f64) {
        if !dt_secs.is_finite() || dt_secs <= 0.0 {
            return;
        }
        for event in self.engine.advance(dt_secs) {
            match event {
                TransitionEvent::Alpha(alphas) => {
                    self.state.set_alphas(alphas);
                    if let Some(sink) = self.sink.as_mut() {
                        upload_alphas(sink, self.state.alphas());
                    }
                }
                TransitionEvent::Swap(targets) => {
                    tracing::debug!(?targets, "crossfade swap");
                    self.state.set_shapes(targets);
                    if let Some(sink) = self.sink.as_mut() {
                        upload_shapes(sink, targets);
                    }
                }
                TransitionEvent::Finished => {}
            }
        }
    }

    /// Re-upload topology, shapes and alphas.
    pub fn resync(&mut self) {
        let Some(sink) = self.sink.as_mut() else {
            return;
        };
        upload_topology(sink, &self.config.topology);
        upload_shapes(sink, self.state.shapes());
        upload_alphas(sink, self.state.alphas());
    }

    /// Borrow the expression state.
    pub fn state(&self) -> &ExpressionState {
        &self.state
    }

    /// Current mood.
    pub fn mood(&self) -> MoodId {
        self.state.mood()
    }

    /// Shapes currently displayed (not yet swapped targets are excluded).
    pub fn shapes(&self) -> ShapeTriple {
        self.state.shapes()
    }

    /// Displayed shape of one feature.
    pub fn shape(&self, feature: Feature) -> ShapeId {
        self.state.shapes().get(feature)
    }

    /// Displayed alphas.
    pub fn alphas(&self) -> AlphaTriple {
        self.state.alphas()
    }

    /// Shapes the face is heading to: the live crossfade's targets, or the displayed shapes.
    pub fn requested_shapes(&self) -> ShapeTriple {
        self.engine
            .pending_targets()
            .unwrap_or_else(|| self.state.shapes())
    }

    /// Phase of the live crossfade, or `Idle`.
    pub fn phase(&self) -> Phase {
        self.engine.phase()
    }

    /// `true` while a crossfade is in flight.
    pub fn is_transitioning(&self) -> bool {
        self.engine.is_active()
    }

    fn resolve_time(&self, time: TransitionTime) -> FaceResult<f64> {
        time.resolve(self.config.transition.duration_secs)
    }

    fn enter_custom(&mut self, changed: bool) {
        let exit_preset = match self.config.manual_override {
            ManualOverride::Always => true,
            ManualOverride::OnChange => changed,
        };
        if exit_preset {
            self.state.set_mood(MoodId::Custom);
        }
    }

    fn request(&mut self, targets: ShapeTriple, duration_secs: f64) {
        if duration_secs <= 0.0 || !self.active {
            self.apply_immediate(targets);
            return;
        }
        if !self.engine.is_active()
            && targets == self.state.shapes()
            && self.state.alphas().is_opaque()
        {
            tracing::debug!(?targets, "shapes already displayed");
            return;
        }
        self.engine.start(
            self.state.alphas(),
            targets,
            duration_secs,
            self.config.transition.ease,
        );
    }

    fn apply_immediate(&mut self, targets: ShapeTriple) {
        self.engine.cancel();
        tracing::debug!(?targets, "apply immediately");
        self.state.set_shapes(targets);
        self.state.set_alphas(AlphaTriple::OPAQUE);
        if let Some(sink) = self.sink.as_mut() {
            upload_shapes(sink, targets);
            upload_alphas(sink, AlphaTriple::OPAQUE);
        }
    }
}

fn upload_shapes<S: UniformSink + ?Sized>(sink: &mut S, shapes: ShapeTriple) {
    for feature in Feature::ALL {
        let desc = lookup(shapes.get(feature));
        upload_feature(sink, feature.prefix(), &desc, feature.is_mirrored());
    }
}

fn upload_alphas<S: UniformSink + ?Sized>(sink: &mut S, alphas: AlphaTriple) {
    for feature in Feature::ALL {
        upload_alpha(sink, feature.prefix(), alphas.get(feature));
    }
}

#[cfg(test)]
#[path = "../../tests/unit/face/controller.rs"]
mod tests;
