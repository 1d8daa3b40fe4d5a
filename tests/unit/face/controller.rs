use super::*;
use crate::render::uniforms::{InMemoryUniforms, UniformValue};

/// Keeps every write in order, on top of the latest-value map.
#[derive(Debug, Default)]
struct RecordingSink {
    latest: InMemoryUniforms,
    log: Vec<(String, UniformValue)>,
}

impl UniformSink for RecordingSink {
    fn set_uniform(&mut self, name: &str, value: UniformValue) {
        self.latest.set_uniform(name, value);
        self.log.push((name.to_string(), value));
    }
}

fn active_face() -> FaceController<InMemoryUniforms> {
    let mut face = FaceController::with_sink(FaceConfig::default(), InMemoryUniforms::new())
        .expect("default config is valid");
    face.set_active(true);
    face
}

fn idle() -> ShapeTriple {
    MoodId::Idle.preset().unwrap()
}

#[test]
fn new_face_starts_on_default_mood_fully_visible() {
    let face: FaceController<InMemoryUniforms> = FaceController::new(FaceConfig::default()).unwrap();
    assert_eq!(face.mood(), MoodId::Idle);
    assert_eq!(face.shapes(), idle());
    assert_eq!(face.alphas(), AlphaTriple::OPAQUE);
    assert!(!face.is_active());
    assert!(face.sink().is_none());
}

#[test]
fn invalid_config_is_rejected() {
    let mut cfg = FaceConfig::default();
    cfg.transition.duration_secs = f64::NAN;
    assert!(FaceController::<InMemoryUniforms>::new(cfg).is_err());
}

#[test]
fn attaching_a_sink_uploads_everything() {
    let face = FaceController::with_sink(FaceConfig::default(), InMemoryUniforms::new()).unwrap();
    let u = face.sink().unwrap();
    for prefix in ["le", "re", "m"] {
        for field in ["type", "params", "offset", "rot", "alpha"] {
            assert!(u.get(&format!("{prefix}_{field}")).is_some(), "{prefix}_{field}");
        }
    }
    for name in ["face_center", "face_scale", "le_origin", "re_origin", "m_origin"] {
        assert!(u.get(name).is_some(), "{name}");
    }
    assert_eq!(u.int("m_type"), Some(lookup(ShapeId::LineH).kind.code()));
}

#[test]
fn custom_mood_never_alters_shapes() {
    let mut face = active_face();
    face.set_mood(MoodId::Idle, TransitionTime::INSTANT).unwrap();
    let before = face.shapes();
    face.set_mood(MoodId::Custom, TransitionTime::Default).unwrap();
    assert_eq!(face.mood(), MoodId::Custom);
    assert_eq!(face.shapes(), before);
    assert!(!face.is_transitioning());
}

#[test]
fn inactive_manual_shape_applies_immediately() {
    let mut face = FaceController::with_sink(FaceConfig::default(), InMemoryUniforms::new()).unwrap();
    face.set_left_eye(ShapeId::Circle, TransitionTime::Default)
        .unwrap();
    assert!(!face.is_transitioning());
    assert_eq!(face.shape(Feature::LeftEye), ShapeId::Circle);
    assert_eq!(face.shape(Feature::RightEye), ShapeId::CapsuleV);
    assert_eq!(face.shape(Feature::Mouth), ShapeId::LineH);
    assert_eq!(face.mood(), MoodId::Custom);
    assert_eq!(face.alphas(), AlphaTriple::OPAQUE);
    assert_eq!(
        face.sink().unwrap().int("le_type"),
        Some(lookup(ShapeId::Circle).kind.code())
    );
}

#[test]
fn joy_crossfade_midpoint_and_end() {
    let mut face = active_face();
    face.set_mood(MoodId::Joy, TransitionTime::Secs(0.2)).unwrap();
    assert_eq!(face.mood(), MoodId::Joy);
    assert_eq!(face.phase(), Phase::FadingOut);
    assert_eq!(face.shapes(), idle());

    face.tick(0.1);
    assert_eq!(
        face.shapes(),
        ShapeTriple::new(ShapeId::CaretRight, ShapeId::CaretLeft, ShapeId::WMouth)
    );
    for f in Feature::ALL {
        assert!(face.alphas().get(f).abs() < 1e-9);
    }
    assert_eq!(face.phase(), Phase::FadingIn);

    face.tick(0.1);
    for f in Feature::ALL {
        assert!((face.alphas().get(f) - 1.0).abs() < 1e-9);
    }
    assert_eq!(face.mood(), MoodId::Joy);
    assert!(!face.is_transitioning());
    let u = face.sink().unwrap();
    assert_eq!(u.float("le_alpha"), Some(1.0));
    assert_eq!(u.int("m_type"), Some(lookup(ShapeId::WMouth).kind.code()));
}

#[test]
fn shapes_are_swapped_only_while_invisible() {
    let mut face = FaceController::with_sink(FaceConfig::default(), RecordingSink::default()).unwrap();
    face.set_active(true);
    face.sink_mut().unwrap().log.clear();

    face.set_mood(MoodId::Scream, TransitionTime::Secs(0.3)).unwrap();
    for _ in 0..40 {
        face.tick(1.0 / 60.0);
    }
    assert!(!face.is_transitioning());

    let sink = face.sink().unwrap();
    let mut alpha = std::collections::HashMap::new();
    let mut type_writes = 0;
    for (name, value) in &sink.log {
        if let Some(prefix) = name.strip_suffix("_alpha") {
            alpha.insert(prefix.to_string(), value.as_float().unwrap());
        }
        if name.ends_with("_type") {
            type_writes += 1;
            for prefix in ["le", "re", "m"] {
                assert_eq!(alpha.get(prefix).copied(), Some(0.0), "{name} written while {prefix} visible");
            }
        }
    }
    assert_eq!(type_writes, 3);
    assert_eq!(sink.latest.float("re_alpha"), Some(1.0));
}

#[test]
fn newer_request_supersedes_live_crossfade() {
    let mut face = active_face();
    face.set_mood(MoodId::Joy, TransitionTime::Secs(0.2)).unwrap();
    face.tick(0.05);
    face.set_mood(MoodId::Dead, TransitionTime::Secs(0.2)).unwrap();
    assert!(face.is_transitioning());
    assert_eq!(face.requested_shapes(), MoodId::Dead.preset().unwrap());

    for _ in 0..10 {
        face.tick(0.05);
    }
    assert_eq!(face.shapes(), MoodId::Dead.preset().unwrap());
    assert_eq!(face.mood(), MoodId::Dead);
    assert_eq!(face.alphas(), AlphaTriple::OPAQUE);
}

#[test]
fn superseding_mid_fade_in_restarts_from_partial_alpha() {
    let mut face = active_face();
    face.set_mood(MoodId::Joy, TransitionTime::Secs(0.2)).unwrap();
    face.tick(0.15);
    let partial = face.alphas();
    assert!(partial.left > 0.0 && partial.left < 1.0);

    face.set_mood(MoodId::Shock, TransitionTime::Secs(0.2)).unwrap();
    assert_eq!(face.alphas(), partial);
    face.tick(0.01);
    assert!(face.alphas().left < partial.left);
}

#[test]
fn manual_shape_during_crossfade_keeps_pending_targets() {
    let mut face = active_face();
    face.set_mood(MoodId::Joy, TransitionTime::Secs(0.2)).unwrap();
    face.tick(0.05);
    face.set_mouth(ShapeId::Circle, TransitionTime::Secs(0.2)).unwrap();
    assert_eq!(face.mood(), MoodId::Custom);
    face.tick(1.0);
    assert_eq!(
        face.shapes(),
        ShapeTriple::new(ShapeId::CaretRight, ShapeId::CaretLeft, ShapeId::Circle)
    );
}

#[test]
fn zero_duration_cancels_live_crossfade() {
    let mut face = active_face();
    face.set_mood(MoodId::Joy, TransitionTime::Default).unwrap();
    face.tick(0.05);
    face.set_custom_face(
        ShapeId::Point,
        ShapeId::Point,
        ShapeId::Triangle,
        TransitionTime::INSTANT,
    )
    .unwrap();
    assert!(!face.is_transitioning());
    assert_eq!(face.alphas(), AlphaTriple::OPAQUE);
    assert_eq!(face.shape(Feature::Mouth), ShapeId::Triangle);
    assert_eq!(face.mood(), MoodId::Custom);
}

#[test]
fn invalid_duration_changes_nothing() {
    let mut face = active_face();
    let err = face
        .set_mood(MoodId::Joy, TransitionTime::Secs(-1.0))
        .unwrap_err();
    assert!(matches!(err, FaceError::Validation(_)));
    assert_eq!(face.mood(), MoodId::Idle);
    assert!(!face.is_transitioning());
    assert!(face.set_left_eye(ShapeId::Point, f64::NAN.into()).is_err());
    assert_eq!(face.shape(Feature::LeftEye), ShapeId::CapsuleV);
}

#[test]
fn requesting_displayed_shapes_does_not_blink() {
    let mut face = active_face();
    face.set_mood(MoodId::Idle, TransitionTime::Secs(0.2)).unwrap();
    assert!(!face.is_transitioning());
    assert_eq!(face.alphas(), AlphaTriple::OPAQUE);
}

#[test]
fn on_change_policy_keeps_mood_for_redundant_assignments() {
    let cfg = FaceConfig {
        manual_override: ManualOverride::OnChange,
        ..FaceConfig::default()
    };
    let mut face: FaceController<InMemoryUniforms> = FaceController::new(cfg).unwrap();
    face.set_left_eye(ShapeId::CapsuleV, TransitionTime::Default)
        .unwrap();
    assert_eq!(face.mood(), MoodId::Idle);
    face.set_left_eye(ShapeId::Circle, TransitionTime::Default)
        .unwrap();
    assert_eq!(face.mood(), MoodId::Custom);

    face.set_manual_override(ManualOverride::Always);
    face.set_mood(MoodId::Idle, TransitionTime::Default).unwrap();
    face.set_left_eye(ShapeId::CapsuleV, TransitionTime::Default)
        .unwrap();
    assert_eq!(face.mood(), MoodId::Custom);
}

#[test]
fn going_inactive_lands_crossfade_on_targets() {
    let mut face = active_face();
    face.set_mood(MoodId::Complaint, TransitionTime::Secs(1.0)).unwrap();
    face.tick(0.1);
    face.set_active(false);
    assert!(!face.is_transitioning());
    assert_eq!(face.shapes(), MoodId::Complaint.preset().unwrap());
    assert_eq!(face.alphas(), AlphaTriple::OPAQUE);
}

#[test]
fn writes_without_sink_are_noops_until_attached() {
    let mut face: FaceController<InMemoryUniforms> = FaceController::new(FaceConfig::default()).unwrap();
    face.set_active(true);
    face.set_mood(MoodId::Shock, TransitionTime::Secs(0.2)).unwrap();
    face.tick(0.3);
    assert_eq!(face.shapes(), MoodId::Shock.preset().unwrap());

    face.attach_sink(InMemoryUniforms::new());
    let u = face.sink().unwrap();
    assert_eq!(u.int("le_type"), Some(lookup(ShapeId::Circle).kind.code()));
    assert_eq!(u.float("m_alpha"), Some(1.0));
    assert!(face.detach_sink().is_some());
    assert!(face.sink().is_none());
}

#[test]
fn topology_and_timing_updates() {
    let mut face = active_face();
    let topo = FaceTopology {
        scale: 3.0,
        ..FaceTopology::default()
    };
    face.set_topology(topo).unwrap();
    assert_eq!(face.sink().unwrap().float("face_scale"), Some(3.0));
    assert!(
        face.set_topology(FaceTopology {
            scale: -1.0,
            ..FaceTopology::default()
        })
        .is_err()
    );
    assert_eq!(face.config().topology.scale, 3.0);

    face.set_transition_config(TransitionConfig {
        duration_secs: 0.0,
        ..TransitionConfig::default()
    })
    .unwrap();
    face.set_mood(MoodId::Dead, TransitionTime::Default).unwrap();
    assert!(!face.is_transitioning());
    assert_eq!(face.shapes(), MoodId::Dead.preset().unwrap());
}

#[test]
fn transition_time_resolution() {
    assert_eq!(TransitionTime::Default.resolve(0.4).unwrap(), 0.4);
    assert_eq!(TransitionTime::Secs(0.0).resolve(0.4).unwrap(), 0.0);
    assert_eq!(TransitionTime::from(None).resolve(0.4).unwrap(), 0.4);
    assert_eq!(TransitionTime::from(Some(1.5)).resolve(0.4).unwrap(), 1.5);
    assert!(TransitionTime::Secs(f64::INFINITY).resolve(0.4).is_err());
}
