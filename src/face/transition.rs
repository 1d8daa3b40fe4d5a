//! Crossfade protocol: fade out, swap shapes while invisible, fade back in.
//!
//! The engine owns at most one [`TransitionSession`]. Sessions are plain state machines advanced
//! by the host's update loop; they never touch the uniform sink themselves. Instead
//! [`TransitionEngine::advance`] returns the [`TransitionEvent`]s the owner must apply, in order.

use crate::animation::ease::Ease;
use crate::animation::tween::Tween;
use crate::face::state::AlphaTriple;
use crate::shape::mood::ShapeTriple;

/// Where a crossfade currently is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// No crossfade in flight.
    Idle,
    /// Alphas easing from their start value to 0.
    FadingOut,
    /// Instantaneous midpoint; never observed between ticks.
    Swapping,
    /// Alphas easing from 0 back to 1 on the new shapes.
    FadingIn,
}

/// Side effect the session owner must apply, in emission order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TransitionEvent {
    /// New alpha values for all three features.
    Alpha(AlphaTriple),
    /// Midpoint reached with every alpha at zero: install these shapes.
    Swap(ShapeTriple),
    /// Fade-in complete; the session is gone.
    Finished,
}

/// One live crossfade towards a target shape triple.
#[derive(Clone, Debug, PartialEq)]
pub struct TransitionSession {
    targets: ShapeTriple,
    phase: Phase,
    fade: Tween<AlphaTriple>,
    half_secs: f64,
    elapsed_secs: f64,
    ease: Ease,
}

impl TransitionSession {
    /// `from` is the alpha triple at request time; a superseded session may have left it partial.
    pub fn new(from: AlphaTriple, targets: ShapeTriple, duration_secs: f64, ease: Ease) -> Self {
        let half_secs = (duration_secs / 2.0).max(0.0);
        Self {
            targets,
            phase: Phase::FadingOut,
            fade: Tween::new(from, AlphaTriple::HIDDEN, half_secs, ease),
            half_secs,
            elapsed_secs: 0.0,
            ease,
        }
    }

    /// Shapes installed at the midpoint.
    pub fn targets(&self) -> ShapeTriple {
        self.targets
    }

    /// Current phase; `Idle` once fade-in is done.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Seconds advanced since the session started.
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed_secs
    }

    /// `true` after fade-in completes.
    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Idle
    }

    /// Advance by `dt` seconds, crossing as many phase boundaries as `dt` covers.
    pub fn advance(&mut self, dt: f64) -> Vec<TransitionEvent> {
        let mut events = Vec::new();
        if !dt.is_finite() || dt < 0.0 || self.is_finished() {
            return events;
        }
        self.elapsed_secs += dt;

        let mut dt = dt;
        loop {
            match self.phase {
                Phase::FadingOut => {
                    dt = self.fade.advance(dt);
                    events.push(TransitionEvent::Alpha(self.fade.value()));
                    if !self.fade.is_finished() {
                        break;
                    }
                    self.phase = Phase::Swapping;
                }
                Phase::Swapping => {
                    events.push(TransitionEvent::Swap(self.targets));
                    self.fade = Tween::new(
                        AlphaTriple::HIDDEN,
                        AlphaTriple::OPAQUE,
                        self.half_secs,
                        self.ease,
                    );
                    self.phase = Phase::FadingIn;
                }
                Phase::FadingIn => {
                    self.fade.advance(dt);
                    events.push(TransitionEvent::Alpha(self.fade.value()));
                    if self.fade.is_finished() {
                        self.phase = Phase::Idle;
                        events.push(TransitionEvent::Finished);
                    }
                    break;
                }
                Phase::Idle => break,
            }
        }
        events
    }
}

/// Owner of the single in-flight crossfade.
#[derive(Clone, Debug, Default)]
pub struct TransitionEngine {
    session: Option<TransitionSession>,
}

impl TransitionEngine {
    /// Create an engine with no live session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a crossfade, superseding any live session without running its remaining steps.
    ///
    /// Returns the superseded session, if there was one.
    pub fn start(
        &mut self,
        from: AlphaTriple,
        targets: ShapeTriple,
        duration_secs: f64,
        ease: Ease,
    ) -> Option<TransitionSession> {
        let previous = self.cancel();
        tracing::debug!(?targets, duration_secs, ?ease, "crossfade start");
        self.session = Some(TransitionSession::new(from, targets, duration_secs, ease));
        previous
    }

    /// Drop the live session, if any, without applying its remaining steps.
    pub fn cancel(&mut self) -> Option<TransitionSession> {
        let previous = self.session.take();
        if let Some(prev) = &previous {
            tracing::debug!(
                targets = ?prev.targets(),
                phase = ?prev.phase(),
                elapsed_secs = prev.elapsed_secs(),
                "crossfade cancelled"
            );
        }
        previous
    }

    /// Advance the live session, dropping it once fade-in completes.
    pub fn advance(&mut self, dt: f64) -> Vec<TransitionEvent> {
        let Some(session) = self.session.as_mut() else {
            return Vec::new();
        };
        let events = session.advance(dt);
        if session.is_finished() {
            tracing::debug!(targets = ?session.targets(), "crossfade finished");
            self.session = None;
        }
        events
    }

    /// `true` while a crossfade is in flight.
    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    /// Phase of the live session, or `Idle`.
    pub fn phase(&self) -> Phase {
        self.session.as_ref().map_or(Phase::Idle, |s| s.phase())
    }

    /// Shapes the live session will install, if any.
    pub fn pending_targets(&self) -> Option<ShapeTriple> {
        self.session.as_ref().map(|s| s.targets())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/face/transition.rs"]
mod tests;
