//! Writes face state into a [`UniformSink`].
//!
//! Uniform layout per feature prefix (`le`, `re`, `m`):
//!
//! | name | type |
//! |---|---|
//! | `{prefix}_type` | `int` |
//! | `{prefix}_params` | `float4` |
//! | `{prefix}_offset` | `float2` |
//! | `{prefix}_rot` | `float` |
//! | `{prefix}_alpha` | `float` |

use crate::face::config::FaceTopology;
use crate::foundation::core::mirror_x;
use crate::render::uniforms::{UniformSink, UniformValue};
use crate::shape::library::ShapeDescriptor;

/// Face center uniform (`float2`).
pub const FACE_CENTER: &str = "face_center";
/// Face scale uniform (`float`).
pub const FACE_SCALE: &str = "face_scale";
/// Left eye origin uniform (`float2`).
pub const LEFT_EYE_ORIGIN: &str = "le_origin";
/// Right eye origin uniform (`float2`).
pub const RIGHT_EYE_ORIGIN: &str = "re_origin";
/// Mouth origin uniform (`float2`).
pub const MOUTH_ORIGIN: &str = "m_origin";

fn uniform_name(prefix: &str, field: &str) -> String {
    format!("{prefix}_{field}")
}

/// Upload one feature's shape descriptor.
///
/// `mirrored` reflects the offset across the vertical midline. The descriptor is taken by
/// shared reference and the mirrored offset is a fresh value, so library data is never touched.
pub fn upload_feature<S: UniformSink + ?Sized>(
    sink: &mut S,
    prefix: &str,
    desc: &ShapeDescriptor,
    mirrored: bool,
) {
    let offset = if mirrored {
        mirror_x(desc.offset)
    } else {
        desc.offset
    };
    tracing::trace!(prefix, kind = ?desc.kind, mirrored, "upload feature");

    sink.set_uniform(
        &uniform_name(prefix, "params"),
        UniformValue::Float4(desc.params),
    );
    sink.set_uniform(
        &uniform_name(prefix, "type"),
        UniformValue::Int(desc.kind.code()),
    );
    sink.set_uniform(
        &uniform_name(prefix, "rot"),
        UniformValue::Float(desc.rotation),
    );
    sink.set_uniform(&uniform_name(prefix, "offset"), UniformValue::Float2(offset));
}

/// Upload `{prefix}_alpha`, clamped to `[0, 1]`.
pub fn upload_alpha<S: UniformSink + ?Sized>(sink: &mut S, prefix: &str, alpha: f64) {
    sink.set_uniform(
        &uniform_name(prefix, "alpha"),
        UniformValue::Float(alpha.clamp(0.0, 1.0)),
    );
}

/// Upload the positional uniforms derived from `topo`.
pub fn upload_topology<S: UniformSink + ?Sized>(sink: &mut S, topo: &FaceTopology) {
    sink.set_uniform(FACE_CENTER, UniformValue::Float2(topo.center));
    sink.set_uniform(FACE_SCALE, UniformValue::Float(topo.scale));
    sink.set_uniform(
        LEFT_EYE_ORIGIN,
        UniformValue::Float2(topo.left_eye_origin()),
    );
    sink.set_uniform(
        RIGHT_EYE_ORIGIN,
        UniformValue::Float2(topo.right_eye_origin()),
    );
    sink.set_uniform(MOUTH_ORIGIN, UniformValue::Float2(topo.mouth_origin()));
}

#[cfg(test)]
#[path = "../../tests/unit/render/upload.rs"]
mod tests;
