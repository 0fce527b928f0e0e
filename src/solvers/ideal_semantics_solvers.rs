use super::{
    AdmissibleSemanticsSolver, ExtensionEnumerator, PreferredSemanticsSolver,
    SemiStableSemanticsSolver, SolverOptions,
};
use crate::aa::{AAFramework, AcceptanceStrategy, Extension, ExtensionSet, LabelType};
use anyhow::{Context, Result};
use log::debug;

// Computes the maximal admissible set included in the intersection of the reference extensions.
//
// Admissible sets included in a conflict-free set are closed under union,
// so the maximal one is the union of all of them.
fn maximal_admissible_subset<'a, T>(
    af: &'a AAFramework<T>,
    options: &SolverOptions,
    reference_extensions: &ExtensionSet<'a, T>,
) -> Result<Extension<'a, T>>
where
    T: LabelType,
{
    let bound = AcceptanceStrategy::Skeptical
        .reduce(reference_extensions)
        .context("the reference semantics returned no extension")?;
    let candidates = AdmissibleSemanticsSolver::new_with_options(af, options.clone())
        .enumerate_extensions()?
        .into_iter()
        .filter(|ext| ext.is_subset(&bound))
        .collect::<ExtensionSet<'a, T>>();
    let maximal = AcceptanceStrategy::Credulous.reduce(&candidates)?;
    debug_assert!(candidates.contains(&maximal));
    debug!(
        "{} admissible sets are included in the {} skeptically accepted arguments",
        candidates.len(),
        bound.len()
    );
    Ok(maximal)
}

macro_rules! maximal_admissible_solver {
    ($solver_ident:ident, $sem_name:literal, $reference_ident:ident, $reference_name:literal) => {
        #[doc = concat!(" A solver for the ", $sem_name, " semantics.")]
        ///
        #[doc = concat!(" The ", $sem_name, " extension is the maximal admissible set (wrt. set inclusion) included in all the ", $reference_name, " extensions.")]
        /// It is unique, and its computation relies on the enumeration of both the admissible sets
        #[doc = concat!(" and the ", $reference_name, " extensions.")]
        ///
        /// Since there is a single extension, the certificates for the acceptance queries are this extension.
        pub struct $solver_ident<'a, T>
        where
            T: LabelType,
        {
            af: &'a AAFramework<T>,
            options: SolverOptions,
        }

        impl<'a, T> $solver_ident<'a, T>
        where
            T: LabelType,
        {
            #[doc = concat!(" Builds a new solver for the ", $sem_name, " semantics.")]
            ///
            /// # Example
            ///
            /// ```
            /// # use argsem::aa::{AAFramework, LabelType};
            #[doc = concat!(" # use argsem::solvers::{SingleExtensionComputer, ", stringify!($solver_ident), "};")]
            /// fn search_one_extension<T>(af: &AAFramework<T>) where T: LabelType {
            #[doc = concat!("     let mut solver = ", stringify!($solver_ident), "::new(af);")]
            ///     let ext = solver.compute_one_extension().unwrap().unwrap();
            #[doc = concat!("     println!(\"found the ", $sem_name, " extension: {:?}\", ext);")]
            /// }
            /// # search_one_extension::<usize>(&AAFramework::default());
            /// ```
            pub fn new(af: &'a AAFramework<T>) -> Self {
                Self::new_with_options(af, SolverOptions::default())
            }

            #[doc = concat!(" Builds a new solver for the ", $sem_name, " semantics, given its options.")]
            ///
            /// The options are shared by the underlying enumerations.
            pub fn new_with_options(af: &'a AAFramework<T>, options: SolverOptions) -> Self {
                Self { af, options }
            }
        }

        impl<'a, T> ExtensionEnumerator<'a, T> for $solver_ident<'a, T>
        where
            T: LabelType,
        {
            fn framework(&self) -> &'a AAFramework<T> {
                self.af
            }

            fn enumerate_extensions(&mut self) -> Result<ExtensionSet<'a, T>> {
                let reference_extensions =
                    $reference_ident::new_with_options(self.af, self.options.clone())
                        .enumerate_extensions()?;
                let ext = maximal_admissible_subset(self.af, &self.options, &reference_extensions)
                    .with_context(|| format!("while computing the {} extension", $sem_name))?;
                debug!("the {} extension has {} arguments", $sem_name, ext.len());
                Ok(std::iter::once(ext).collect())
            }
        }
    };
}

maximal_admissible_solver!(
    IdealSemanticsSolver,
    "ideal",
    PreferredSemanticsSolver,
    "preferred"
);

maximal_admissible_solver!(
    EagerSemanticsSolver,
    "eager",
    SemiStableSemanticsSolver,
    "semi-stable"
);
