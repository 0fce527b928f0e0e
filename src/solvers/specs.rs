use super::utils::framework_argument;
use crate::aa::{AAFramework, Argument, Extension, ExtensionSet, LabelType};
use anyhow::Result;

/// A trait for solvers able to compute all the extensions of a framework.
///
/// Every semantics solver of this crate implements this trait.
/// The acceptance traits [SingleExtensionComputer], [CredulousAcceptanceComputer] and [SkepticalAcceptanceComputer]
/// are implemented for all the types implementing this one.
pub trait ExtensionEnumerator<'a, T>
where
    T: LabelType,
{
    /// Returns the framework this solver works on.
    fn framework(&self) -> &'a AAFramework<T>;

    /// Computes the set of all the extensions.
    ///
    /// The result may be an empty set if the framework admits no extension.
    /// An error is returned if the search is interrupted (see [SolverOptions](crate::solvers::SolverOptions)).
    fn enumerate_extensions(&mut self) -> Result<ExtensionSet<'a, T>>;
}

/// A trait for solvers able to compute an extension.
pub trait SingleExtensionComputer<'a, T>
where
    T: LabelType,
{
    /// Computes a single extension.
    ///
    /// In case the problem admits no extension, [Option::None] is returned.
    /// Otherwise, the extension is the first one in the order of extension sets.
    fn compute_one_extension(&mut self) -> Result<Option<Extension<'a, T>>>;
}

/// A trait for solvers able to check the credulous acceptance of an argument.
pub trait CredulousAcceptanceComputer<'a, T>
where
    T: LabelType,
{
    /// Checks the credulous acceptance of an argument.
    ///
    /// If the argument does not belong to the framework, an [InvalidArgument](crate::aa::SemanticsError::InvalidArgument) error is returned.
    fn is_credulously_accepted(&mut self, arg: &Argument<T>) -> Result<bool>;

    /// Checks the credulous acceptance of an argument, and provide a certificate if it is the case.
    ///
    /// The certificate is set to `None` if the result of the test is `false`.
    /// Otherwise, the certificate is an extension containing the argument.
    fn is_credulously_accepted_with_certificate(
        &mut self,
        arg: &Argument<T>,
    ) -> Result<(bool, Option<Extension<'a, T>>)>;
}

/// A trait for solvers able to check the skeptical acceptance of an argument.
pub trait SkepticalAcceptanceComputer<'a, T>
where
    T: LabelType,
{
    /// Checks the skeptical acceptance of an argument.
    ///
    /// If the framework admits no extension, all its arguments are skeptically accepted.
    /// If the argument does not belong to the framework, an [InvalidArgument](crate::aa::SemanticsError::InvalidArgument) error is returned.
    fn is_skeptically_accepted(&mut self, arg: &Argument<T>) -> Result<bool>;

    /// Checks the skeptical acceptance of an argument, and provide a certificate if it is not the case.
    ///
    /// The certificate is set to `None` if the result of the test is `true`.
    /// Otherwise, the certificate is an extension that does not contain the argument.
    fn is_skeptically_accepted_with_certificate(
        &mut self,
        arg: &Argument<T>,
    ) -> Result<(bool, Option<Extension<'a, T>>)>;
}

impl<'a, T, S> SingleExtensionComputer<'a, T> for S
where
    T: LabelType + 'a,
    S: ExtensionEnumerator<'a, T> + ?Sized,
{
    fn compute_one_extension(&mut self) -> Result<Option<Extension<'a, T>>> {
        Ok(self.enumerate_extensions()?.into_iter().next())
    }
}

impl<'a, T, S> CredulousAcceptanceComputer<'a, T> for S
where
    T: LabelType + 'a,
    S: ExtensionEnumerator<'a, T> + ?Sized,
{
    fn is_credulously_accepted(&mut self, arg: &Argument<T>) -> Result<bool> {
        self.is_credulously_accepted_with_certificate(arg)
            .map(|(accepted, _)| accepted)
    }

    fn is_credulously_accepted_with_certificate(
        &mut self,
        arg: &Argument<T>,
    ) -> Result<(bool, Option<Extension<'a, T>>)> {
        let arg = framework_argument(self.framework(), arg)?;
        let certificate = self
            .enumerate_extensions()?
            .into_iter()
            .find(|ext| ext.contains(arg));
        Ok((certificate.is_some(), certificate))
    }
}

impl<'a, T, S> SkepticalAcceptanceComputer<'a, T> for S
where
    T: LabelType + 'a,
    S: ExtensionEnumerator<'a, T> + ?Sized,
{
    fn is_skeptically_accepted(&mut self, arg: &Argument<T>) -> Result<bool> {
        self.is_skeptically_accepted_with_certificate(arg)
            .map(|(accepted, _)| accepted)
    }

    fn is_skeptically_accepted_with_certificate(
        &mut self,
        arg: &Argument<T>,
    ) -> Result<(bool, Option<Extension<'a, T>>)> {
        let arg = framework_argument(self.framework(), arg)?;
        let certificate = self
            .enumerate_extensions()?
            .into_iter()
            .find(|ext| !ext.contains(arg));
        Ok((certificate.is_none(), certificate))
    }
}
