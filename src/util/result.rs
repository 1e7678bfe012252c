use std::error::Error;

pub(crate) trait ResultExtension<T, E: Error> {
    /// Unwraps an [`Ok`] value, otherwise panics with the message of the contained error itself.
    /// Reserved for failures that can't be recovered from, such as a capacity overflow.
    ///
    /// # Panics
    /// Panics if the [`Result`] is an [`Err`].
    fn throw(self) -> T;
}

impl<T, E: Error> ResultExtension<T, E> for Result<T, E> {
    fn throw(self) -> T {
        match self {
            Ok(val) => val,
            Err(error) => panic!("{error}"),
        }
    }
}
