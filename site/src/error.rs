//! Error types for the viewer and the contact form

use thiserror::Error;

/// Failures while bringing up the WebGL viewer.
///
/// None of these are fatal to the page: the viewer logs the error and keeps
/// showing its placeholder poster.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SceneError {
    /// No `window` object (not running in a browser)
    #[error("no browser window available")]
    NoWindow,

    /// `getContext("webgl")` returned nothing or threw
    #[error("WebGL context unavailable")]
    ContextUnavailable,

    /// Shader source rejected by the driver
    #[error("shader compilation failed: {0}")]
    ShaderCompile(String),

    /// Vertex and fragment shader could not be linked
    #[error("program link failed: {0}")]
    ProgramLink(String),

    /// `createBuffer` returned null
    #[error("could not allocate {0} buffer")]
    Buffer(&'static str),

    /// Uniform missing from the linked program
    #[error("uniform {0} not found")]
    Uniform(&'static str),
}

/// Why a contact request would be blocked by the browser's built-in
/// form validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("required field `{0}` is empty")]
    MissingField(&'static str),

    #[error("email address is not valid")]
    InvalidEmail,
}

/// Failure reported by a lead sink.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LeadError {
    #[error("lead capture unavailable: {0}")]
    Unavailable(String),
}
