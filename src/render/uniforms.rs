use std::collections::BTreeMap;

use crate::foundation::core::{Float4, Vec2};

/// Typed value written into a renderer uniform slot.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum UniformValue {
    /// `int`
    Int(i32),
    /// `float`
    Float(f64),
    /// `float2`
    Float2(Vec2),
    /// `float4`
    Float4(Float4),
}

impl UniformValue {
    /// The value if it is an `int`.
    pub fn as_int(&self) -> Option<i32> {
        match *self {
            Self::Int(v) => Some(v),
            _ => None,
        }
    }

    /// The value if it is a `float`.
    pub fn as_float(&self) -> Option<f64> {
        match *self {
            Self::Float(v) => Some(v),
            _ => None,
        }
    }

    /// The value if it is a `float2`.
    pub fn as_float2(&self) -> Option<Vec2> {
        match *self {
            Self::Float2(v) => Some(v),
            _ => None,
        }
    }

    /// The value if it is a `float4`.
    pub fn as_float4(&self) -> Option<Float4> {
        match *self {
            Self::Float4(v) => Some(v),
            _ => None,
        }
    }
}

/// Key/value parameter store read by the renderer every frame.
///
/// Writes are fire-and-forget: the face engine never reads values back from a sink.
pub trait UniformSink {
    /// Write `value` into the slot called `name`.
    fn set_uniform(&mut self, name: &str, value: UniformValue);
}

impl<S: UniformSink + ?Sized> UniformSink for &mut S {
    fn set_uniform(&mut self, name: &str, value: UniformValue) {
        (**self).set_uniform(name, value);
    }
}

impl<S: UniformSink + ?Sized> UniformSink for Box<S> {
    fn set_uniform(&mut self, name: &str, value: UniformValue) {
        (**self).set_uniform(name, value);
    }
}

/// In-memory uniform store for tests, tooling and headless hosts.
#[derive(Clone, Debug, Default)]
pub struct InMemoryUniforms {
    values: BTreeMap<String, UniformValue>,
    writes: u64,
}

impl InMemoryUniforms {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Latest value written to `name`.
    pub fn get(&self, name: &str) -> Option<UniformValue> {
        self.values.get(name).copied()
    }

    /// Latest `int` written to `name`.
    pub fn int(&self, name: &str) -> Option<i32> {
        self.get(name).and_then(|v| v.as_int())
    }

    /// Latest `float` written to `name`.
    pub fn float(&self, name: &str) -> Option<f64> {
        self.get(name).and_then(|v| v.as_float())
    }

    /// Latest `float2` written to `name`.
    pub fn float2(&self, name: &str) -> Option<Vec2> {
        self.get(name).and_then(|v| v.as_float2())
    }

    /// Latest `float4` written to `name`.
    pub fn float4(&self, name: &str) -> Option<Float4> {
        self.get(name).and_then(|v| v.as_float4())
    }

    /// All slots, sorted by name.
    pub fn values(&self) -> &BTreeMap<String, UniformValue> {
        &self.values
    }

    /// Total number of writes received, including overwrites of the same key.
    pub fn write_count(&self) -> u64 {
        self.writes
    }

    /// `true` when nothing has been written.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Forget all values and reset the write counter.
    pub fn clear(&mut self) {
        self.values.clear();
        self.writes = 0;
    }
}

impl UniformSink for InMemoryUniforms {
    fn set_uniform(&mut self, name: &str, value: UniformValue) {
        self.writes += 1;
        match self.values.get_mut(name) {
            Some(slot) => *slot = value,
            None => {
                self.values.insert(name.to_string(), value);
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/uniforms.rs"]
mod tests;
