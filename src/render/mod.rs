pub(crate) mod uniforms;
pub(crate) mod upload;
