use super::{ExtensionEnumerator, SolverOptions};
use crate::{
    aa::{AAFramework, ExtensionSet, LabelType},
    utils,
};
use anyhow::Result;
use log::debug;

/// A solver used to solve queries for the grounded semantics.
///
/// The (unique) grounded extension is the minimal complete extension (see [CompleteSemanticsSolver](crate::solvers::CompleteSemanticsSolver) for more information).
/// It is computed in time polynomial in the size of the framework, without any search.
/// For this reason, the interruption check of the options is never called.
///
/// This solver implements [ExtensionEnumerator] and thus the acceptance interfaces.
/// In all cases, the computation resumes to the (polynomial time) computation of the grounded extension.
///
/// When a certificate is provided, the certificate is the grounded extension itself.
pub struct GroundedSemanticsSolver<'a, T>
where
    T: LabelType,
{
    af: &'a AAFramework<T>,
}

impl<'a, T> GroundedSemanticsSolver<'a, T>
where
    T: LabelType,
{
    /// Builds a new solver dedicated to the grounded semantics.
    ///
    /// # Example
    ///
    /// ```
    /// # use argsem::aa::{AAFramework, LabelType};
    /// # use argsem::solvers::{SingleExtensionComputer, GroundedSemanticsSolver};
    /// fn search_one_extension<T>(af: &AAFramework<T>) where T: LabelType {
    ///     let mut solver = GroundedSemanticsSolver::new(af);
    ///     let ext = solver.compute_one_extension().unwrap().unwrap();
    ///     println!("found the grounded extension: {:?}", ext);
    /// }
    /// # search_one_extension::<usize>(&AAFramework::default());
    /// ```
    pub fn new(af: &'a AAFramework<T>) -> Self {
        Self { af }
    }

    /// Builds a new solver dedicated to the grounded semantics.
    ///
    /// The options are ignored, since the computation cannot be interrupted.
    pub fn new_with_options(af: &'a AAFramework<T>, _options: SolverOptions) -> Self {
        Self::new(af)
    }
}

impl<'a, T> ExtensionEnumerator<'a, T> for GroundedSemanticsSolver<'a, T>
where
    T: LabelType,
{
    fn framework(&self) -> &'a AAFramework<T> {
        self.af
    }

    fn enumerate_extensions(&mut self) -> Result<ExtensionSet<'a, T>> {
        let grounded = utils::grounded_extension(self.af);
        debug!(
            "the grounded extension has {} arguments out of {}",
            grounded.len(),
            self.af.n_arguments()
        );
        Ok(std::iter::once(grounded).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solvers::{
        CredulousAcceptanceComputer, SingleExtensionComputer, SkepticalAcceptanceComputer,
    };

    #[test]
    fn test_grounded_solver() {
        let af = AAFramework::new("af", &["a0", "a1"], &[("a0", "a1")]).unwrap();
        let mut solver = GroundedSemanticsSolver::new(&af);
        let ext = solver.compute_one_extension().unwrap().unwrap();
        assert_eq!(1, ext.len());
        assert_eq!(&"a0", ext.iter().next().unwrap().label());
        let a0 = af.get_argument(&"a0").unwrap();
        let a1 = af.get_argument(&"a1").unwrap();
        assert!(solver.is_credulously_accepted(a0).unwrap());
        assert!(!solver.is_credulously_accepted(a1).unwrap());
        assert!(solver.is_skeptically_accepted(a0).unwrap());
        assert!(!solver.is_skeptically_accepted(a1).unwrap());
    }

    #[test]
    fn test_certificates() {
        let af = AAFramework::new("af", &["a0", "a1"], &[("a0", "a1")]).unwrap();
        let mut solver = GroundedSemanticsSolver::new(&af);
        let a0 = af.get_argument(&"a0").unwrap();
        let a1 = af.get_argument(&"a1").unwrap();
        assert_eq!(
            vec!["a0"],
            solver
                .is_credulously_accepted_with_certificate(a0)
                .unwrap()
                .1
                .unwrap()
                .iter()
                .map(|a| *a.label())
                .collect::<Vec<&str>>()
        );
        assert_eq!(
            vec!["a0"],
            solver
                .is_skeptically_accepted_with_certificate(a1)
                .unwrap()
                .1
                .unwrap()
                .iter()
                .map(|a| *a.label())
                .collect::<Vec<&str>>()
        );
        assert_eq!(
            (true, None),
            solver.is_skeptically_accepted_with_certificate(a0).unwrap()
        );
    }

    #[test]
    fn test_options_are_ignored() {
        let af = AAFramework::new("af", &["a", "b"], &[("a", "b"), ("b", "a")]).unwrap();
        let options = SolverOptions::default().with_interrupt(|| true);
        let mut solver = GroundedSemanticsSolver::new_with_options(&af, options);
        let extensions = solver.enumerate_extensions().unwrap();
        assert_eq!(1, extensions.len());
        assert!(extensions.iter().next().unwrap().is_empty());
    }
}
