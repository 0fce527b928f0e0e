use super::{
    AdmissibleSemanticsSolver, CompleteSemanticsSolver, ConflictFreeSemanticsSolver,
    EagerSemanticsSolver, ExtensionEnumerator, GroundedSemanticsSolver, IdealSemanticsSolver,
    NaiveSemanticsSolver, PreferredSemanticsSolver, SemiStableSemanticsSolver, SolverOptions,
    StableSemanticsSolver,
};
use crate::aa::{AAFramework, ExtensionSet, LabelType, Semantics};
use anyhow::{Context, Result};
use log::info;

impl Semantics {
    /// Builds the solver dedicated to this semantics.
    ///
    /// # Example
    ///
    /// ```
    /// # use argsem::aa::{AAFramework, Semantics};
    /// # use argsem::solvers::{CredulousAcceptanceComputer, SolverOptions};
    /// let af = AAFramework::new("af", &["a", "b"], &[("a", "b"), ("b", "a")]).unwrap();
    /// let mut solver = Semantics::try_from("ST").unwrap().new_solver(&af, SolverOptions::default());
    /// assert!(solver.is_credulously_accepted(af.get_argument(&"a").unwrap()).unwrap());
    /// ```
    pub fn new_solver<'a, T>(
        &self,
        af: &'a AAFramework<T>,
        options: SolverOptions,
    ) -> Box<dyn ExtensionEnumerator<'a, T> + 'a>
    where
        T: LabelType,
    {
        match self {
            Semantics::CF => Box::new(ConflictFreeSemanticsSolver::new_with_options(af, options)),
            Semantics::NA => Box::new(NaiveSemanticsSolver::new_with_options(af, options)),
            Semantics::AD => Box::new(AdmissibleSemanticsSolver::new_with_options(af, options)),
            Semantics::CO => Box::new(CompleteSemanticsSolver::new_with_options(af, options)),
            Semantics::GR => Box::new(GroundedSemanticsSolver::new_with_options(af, options)),
            Semantics::PR => Box::new(PreferredSemanticsSolver::new_with_options(af, options)),
            Semantics::ST => Box::new(StableSemanticsSolver::new_with_options(af, options)),
            Semantics::SST => Box::new(SemiStableSemanticsSolver::new_with_options(af, options)),
            Semantics::ID => Box::new(IdealSemanticsSolver::new_with_options(af, options)),
            Semantics::EG => Box::new(EagerSemanticsSolver::new_with_options(af, options)),
        }
    }

    /// Computes the extensions of a framework under this semantics.
    ///
    /// Single-extension semantics (grounded, ideal and eager) return a family made of one extension.
    pub fn compute_extensions<'a, T>(
        &self,
        af: &'a AAFramework<T>,
        options: &SolverOptions,
    ) -> Result<ExtensionSet<'a, T>>
    where
        T: LabelType,
    {
        info!(
            r#"computing {} extensions of framework "{}""#,
            self.as_ref(),
            af.name()
        );
        self.new_solver(af, options.clone())
            .enumerate_extensions()
            .with_context(|| format!("while computing {} extensions", self.as_ref()))
    }
}
