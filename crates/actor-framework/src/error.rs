//! # Framework Errors
//!
//! Errors raised by the actor plumbing itself. Entity hook failures travel inside
//! [`FrameworkError::EntityError`] and are recovered with [`FrameworkError::downcast`].

/// Errors that can occur within the actor framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}

impl FrameworkError {
    /// Recovers the entity's own error type from an `EntityError`.
    ///
    /// Returns the original error unchanged when it is not an `EntityError` or when the
    /// boxed error is of a different type.
    pub fn downcast<E>(self) -> Result<E, Self>
    where
        E: std::error::Error + 'static,
    {
        match self {
            FrameworkError::EntityError(inner) => inner
                .downcast::<E>()
                .map(|e| *e)
                .map_err(FrameworkError::EntityError),
            other => Err(other),
        }
    }

    /// True for failures of the channel plumbing rather than of an entity.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, FrameworkError::ActorClosed | FrameworkError::ActorDropped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, thiserror::Error)]
    #[error("cart is empty")]
    struct EmptyCart;

    #[derive(Debug, thiserror::Error)]
    #[error("other")]
    struct Other;

    #[test]
    fn downcast_recovers_entity_error() {
        let err = FrameworkError::EntityError(Box::new(EmptyCart));
        assert_eq!(err.downcast::<EmptyCart>().unwrap(), EmptyCart);
    }

    #[test]
    fn downcast_keeps_mismatched_error() {
        let err = FrameworkError::EntityError(Box::new(Other));
        let back = err.downcast::<EmptyCart>().unwrap_err();
        assert_eq!(back.to_string(), "Entity error: other");

        let closed = FrameworkError::ActorClosed.downcast::<EmptyCart>().unwrap_err();
        assert!(closed.is_unavailable());
    }
}
