use crate::error::BoxError;

/// Installs the target on demand. Called by the dispatcher at most once per
/// invocation, and only when the target cannot be resolved.
pub trait Provision {
    fn provision(&self) -> Result<(), BoxError>;
}

impl<F> Provision for F
where
    F: Fn() -> Result<(), BoxError>,
{
    fn provision(&self) -> Result<(), BoxError> {
        self()
    }
}
