/// A module for providing error context

/// An error (E), and some context describing what was being attempted.
#[derive(Debug)]
pub struct ErrorContext<E>(pub String, pub E);

/// Extends `Result` with a `context` method, which wraps the error together
/// with a description of the operation that failed.
pub trait ErrorContextExt<T, E> {
    fn context<C: AsRef<str>>(self, c: C) -> Result<T, ErrorContext<E>>;
}

impl<T, E> ErrorContextExt<T, E> for Result<T, E> {
    fn context<C: AsRef<str>>(self, c: C) -> Result<T, ErrorContext<E>> {
        self.map_err(|e| ErrorContext(c.as_ref().into(), e))
    }
}
