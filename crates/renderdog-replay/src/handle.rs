use crate::engine::EngineObject;

/// Exclusive owner of one engine object.
///
/// The object is shut down exactly once: when the handle is dropped, unless it was handed over
/// with [`Handle::release`] first.
pub(crate) struct Handle<T: ?Sized + EngineObject> {
    inner: Option<Box<T>>,
    kind: &'static str,
}

impl<T: ?Sized + EngineObject> Handle<T> {
    pub(crate) fn new(kind: &'static str, inner: Box<T>) -> Self {
        tracing::debug!(handle = kind, "acquired");
        Self {
            inner: Some(inner),
            kind,
        }
    }

    pub(crate) fn get(&self) -> &T {
        // Only `release` and `drop` empty the slot, and both consume the handle.
        match self.inner.as_deref() {
            Some(inner) => inner,
            None => unreachable!("{} handle used after release", self.kind),
        }
    }

    /// Hands the engine object to a new owner without shutting it down.
    pub(crate) fn release(mut self) -> Box<T> {
        tracing::debug!(handle = self.kind, "released to new owner");
        match self.inner.take() {
            Some(inner) => inner,
            None => unreachable!("{} handle released twice", self.kind),
        }
    }
}

impl<T: ?Sized + EngineObject> Drop for Handle<T> {
    fn drop(&mut self) {
        if let Some(mut inner) = self.inner.take() {
            tracing::debug!(handle = self.kind, "shutdown");
            inner.shutdown();
        }
    }
}

impl<T: ?Sized + EngineObject> std::fmt::Debug for Handle<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Handle")
            .field("kind", &self.kind)
            .field("live", &self.inner.is_some())
            .finish()
    }
}
