/// Receives solver events for monitoring and diagnostics.
///
/// Observers let callers watch a solver's iterates without changing its
/// behavior: the solver never inspects anything an observer does, so
/// attaching or removing one cannot alter the result.
///
/// Closures automatically implement `Observer`, and a built-in impl for
/// `()` provides a no-op observer.
pub trait Observer<E> {
    /// Observes a solver event.
    fn observe(&mut self, event: &E);
}

/// Blanket implementation for observer closures.
impl<E, F> Observer<E> for F
where
    F: FnMut(&E),
{
    fn observe(&mut self, event: &E) {
        self(event);
    }
}

/// A no-op observer.
impl<E> Observer<E> for () {
    fn observe(&mut self, _event: &E) {}
}
