//! Solvers dedicated to the semantics of Abstract Argumentation frameworks.
//!
//! Each semantics has its own solver, implementing [ExtensionEnumerator] and thus the acceptance traits.
//! For convenience, this module also provides one function per semantics, returning all its extensions.
//!
//! # Example
//!
//! ```
//! # use argsem::aa::AAFramework;
//! # use argsem::solvers;
//! let af = AAFramework::new("af", &["a", "b", "c"], &[("a", "b"), ("b", "a"), ("b", "c")]).unwrap();
//! assert_eq!(2, solvers::preferred(&af).unwrap().len());
//! assert_eq!(2, solvers::stable(&af).unwrap().len());
//! assert!(solvers::grounded(&af).is_empty());
//! ```

mod conflict_free_semantics_solvers;
pub use conflict_free_semantics_solvers::ConflictFreeSemanticsSolver;
pub use conflict_free_semantics_solvers::NaiveSemanticsSolver;

mod dispatch;

pub mod extension_checkers;

mod grounded_semantics_solver;
pub use grounded_semantics_solver::GroundedSemanticsSolver;

mod ideal_semantics_solvers;
pub use ideal_semantics_solvers::EagerSemanticsSolver;
pub use ideal_semantics_solvers::IdealSemanticsSolver;

mod labelling_search;

mod labelling_semantics_solvers;
pub use labelling_semantics_solvers::AdmissibleSemanticsSolver;
pub use labelling_semantics_solvers::CompleteSemanticsSolver;
pub use labelling_semantics_solvers::PreferredSemanticsSolver;
pub use labelling_semantics_solvers::StableSemanticsSolver;

mod options;
pub use options::InterruptFn;
pub use options::SolverOptions;

mod semi_stable_semantics_solver;
pub use semi_stable_semantics_solver::SemiStableSemanticsSolver;

mod specs;
pub use specs::CredulousAcceptanceComputer;
pub use specs::ExtensionEnumerator;
pub use specs::SingleExtensionComputer;
pub use specs::SkepticalAcceptanceComputer;

mod utils;

use crate::aa::{AAFramework, Extension, ExtensionSet, LabelType};
use anyhow::Result;

/// Returns the conflict-free sets of the framework.
pub fn conflict_free<T>(af: &AAFramework<T>) -> Result<ExtensionSet<'_, T>>
where
    T: LabelType,
{
    ConflictFreeSemanticsSolver::new(af).enumerate_extensions()
}

/// Returns the naive extensions of the framework.
pub fn naive<T>(af: &AAFramework<T>) -> Result<ExtensionSet<'_, T>>
where
    T: LabelType,
{
    NaiveSemanticsSolver::new(af).enumerate_extensions()
}

/// Returns the admissible sets of the framework.
///
/// The empty set is always admissible.
pub fn admissible<T>(af: &AAFramework<T>) -> Result<ExtensionSet<'_, T>>
where
    T: LabelType,
{
    AdmissibleSemanticsSolver::new(af).enumerate_extensions()
}

/// Returns the complete extensions of the framework.
pub fn complete<T>(af: &AAFramework<T>) -> Result<ExtensionSet<'_, T>>
where
    T: LabelType,
{
    CompleteSemanticsSolver::new(af).enumerate_extensions()
}

/// Returns the grounded extension of the framework.
///
/// Since its computation involves no search, it cannot fail.
pub fn grounded<T>(af: &AAFramework<T>) -> Extension<'_, T>
where
    T: LabelType,
{
    crate::utils::grounded_extension(af)
}

/// Returns the preferred extensions of the framework.
pub fn preferred<T>(af: &AAFramework<T>) -> Result<ExtensionSet<'_, T>>
where
    T: LabelType,
{
    PreferredSemanticsSolver::new(af).enumerate_extensions()
}

/// Returns the stable extensions of the framework.
///
/// The result is empty if the framework has no stable extension.
pub fn stable<T>(af: &AAFramework<T>) -> Result<ExtensionSet<'_, T>>
where
    T: LabelType,
{
    StableSemanticsSolver::new(af).enumerate_extensions()
}

/// Returns the semi-stable extensions of the framework.
pub fn semi_stable<T>(af: &AAFramework<T>) -> Result<ExtensionSet<'_, T>>
where
    T: LabelType,
{
    SemiStableSemanticsSolver::new(af).enumerate_extensions()
}

/// Returns the family made of the ideal extension of the framework.
pub fn ideal<T>(af: &AAFramework<T>) -> Result<ExtensionSet<'_, T>>
where
    T: LabelType,
{
    IdealSemanticsSolver::new(af).enumerate_extensions()
}

/// Returns the family made of the eager extension of the framework.
pub fn eager<T>(af: &AAFramework<T>) -> Result<ExtensionSet<'_, T>>
where
    T: LabelType,
{
    EagerSemanticsSolver::new(af).enumerate_extensions()
}
