pub use kurbo::Vec2;

/// Four-component parameter payload (`float4` on the renderer side).
pub type Float4 = [f64; 4];

/// Return `v` negated on the x axis, leaving `y` untouched.
pub fn mirror_x(v: Vec2) -> Vec2 {
    Vec2::new(-v.x, v.y)
}

/// `true` when both components of `v` are finite.
pub fn is_finite_vec2(v: Vec2) -> bool {
    v.x.is_finite() && v.y.is_finite()
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
