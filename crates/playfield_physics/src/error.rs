//! Error taxonomy for the physics facade.
//!
//! Every failure is reported synchronously at the point of occurrence: the
//! engine logs a line through its sink and returns a typed error. Nothing
//! panics across the facade boundary, and there are no retries.

/// Errors produced by the physics facade.
#[derive(Debug)]
pub enum PhysicsError {
    /// A backend subsystem failed to construct. Fatal to engine creation.
    Initialization(String),
    /// Malformed input rejected before reaching the backend.
    InvalidArgument(String),
    /// Mesh or heightfield cooking failed. No resource was registered.
    Cooking(String),
    /// A handle did not resolve to a live resource.
    NotFound {
        resource: &'static str,
        index: usize,
        len: usize,
    },
}

impl std::fmt::Display for PhysicsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PhysicsError::Initialization(msg) => write!(f, "initialization failed: {msg}"),
            PhysicsError::InvalidArgument(msg) => write!(f, "invalid argument: {msg}"),
            PhysicsError::Cooking(msg) => write!(f, "cooking failed: {msg}"),
            PhysicsError::NotFound {
                resource,
                index,
                len,
            } => write!(
                f,
                "invalid {resource} handle [{index}] (registry holds {len})"
            ),
        }
    }
}

impl std::error::Error for PhysicsError {}

/// Result type for physics facade operations.
pub type PhysicsResult<T> = Result<T, PhysicsError>;
