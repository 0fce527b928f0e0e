use thiserror::Error;

/// The kinds of errors raised by the framework and the semantics engine.
///
/// Public operations return [anyhow::Result]s; when the failure comes from the engine itself,
/// the root cause of the error is one of these values, and can be retrieved with
/// [downcast_ref](anyhow::Error::downcast_ref).
///
/// # Example
///
/// ```
/// # use argsem::aa::{AAFramework, SemanticsError};
/// let af = AAFramework::new("af", &["a", "b"], &[("a", "b")]).unwrap();
/// let err = af.get_argument(&"c").unwrap_err();
/// assert!(matches!(
///     err.downcast_ref::<SemanticsError>(),
///     Some(SemanticsError::NotFound(_))
/// ));
/// ```
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SemanticsError {
    /// An argument was looked up by a label that does not belong to the framework.
    #[error("no such argument: {0}")]
    NotFound(String),

    /// A candidate set of arguments refers to an argument outside the framework.
    #[error("argument {0} does not belong to the framework")]
    InvalidArgument(String),

    /// A defeat refers to an endpoint that is not an argument of the framework.
    #[error("the defeat from {from} to {to} refers to an undefined argument")]
    InconsistentConstruction {
        /// the attacker of the faulty defeat
        from: String,
        /// the attacked argument of the faulty defeat
        to: String,
    },

    /// An acceptance reduction was requested on a family with no extension.
    #[error("cannot reduce an empty family of extensions")]
    EmptyFamily,

    /// The interruption check given in the solver options fired.
    #[error("the search was interrupted")]
    Interrupted,
}
