use std::borrow::Cow;

/// A specialized [`DisplayError`] enum of this crate.
///
/// Gated calls themselves never fail; errors only come from configuration
/// loading and internal logic.
#[derive(Debug, thiserror::Error)]
pub enum DisplayError {
    /// Configuration loading or deserialization failures.
    #[error("Display config error{}: {source}", format_context(context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal display error{}: {message}", format_context(context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

/// Attaches human-readable context to a failing [`Result`].
pub trait DisplayErrorExt<T> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, DisplayError>;
}

impl<T> DisplayErrorExt<T> for Result<T, DisplayError> {
    #[inline]
    fn context(self, context: impl Into<Cow<'static, str>>) -> Self {
        self.map_err(|mut e| {
            match &mut e {
                DisplayError::Config { context: c, .. }
                | DisplayError::Internal { context: c, .. } => *c = Some(context.into()),
            }
            e
        })
    }
}

impl<T> DisplayErrorExt<T> for Result<T, config::ConfigError> {
    #[inline]
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, DisplayError> {
        self.map_err(|source| DisplayError::Config { source, context: Some(context.into()) })
    }
}

impl From<config::ConfigError> for DisplayError {
    #[inline]
    fn from(source: config::ConfigError) -> Self {
        Self::Config { source, context: None }
    }
}

impl From<&'static str> for DisplayError {
    #[inline]
    fn from(s: &'static str) -> Self {
        Self::Internal { message: Cow::Borrowed(s), context: None }
    }
}

impl From<String> for DisplayError {
    #[inline]
    fn from(s: String) -> Self {
        Self::Internal { message: Cow::Owned(s), context: None }
    }
}

fn format_context(context: &Option<Cow<'static, str>>) -> Cow<'static, str> {
    context.as_ref().map_or(Cow::Borrowed(""), |c| Cow::Owned(format!(" ({c})")))
}
