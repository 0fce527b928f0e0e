use super::{
    labelling_search::{self, LabellingSearch, LeafLabelling},
    utils, ExtensionEnumerator, SolverOptions,
};
use crate::{
    aa::{AAFramework, ExtensionSet, LabelType},
    utils::SearchLabel,
};
use anyhow::Result;
use log::{debug, trace};

macro_rules! labelling_search_solver {
    ($solver_ident:ident, $sem_name:literal, $finalize:expr) => {
        #[doc = concat!(" A solver for the ", $sem_name, " semantics.")]
        ///
        /// Extensions are enumerated by a depth-first search over the labellings of the framework,
        /// in which each argument is either set IN or UNDEC, in label order.
        /// The number of explored labellings is exponential in the number of arguments in the worst case.
        ///
        /// The certificates for the acceptance queries are extensions.
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
            #[doc = concat!(" # use argsem::solvers::{ExtensionEnumerator, ", stringify!($solver_ident), "};")]
            /// fn enumerate<T>(af: &AAFramework<T>) where T: LabelType {
            #[doc = concat!("     let mut solver = ", stringify!($solver_ident), "::new(af);")]
            ///     for ext in solver.enumerate_extensions().unwrap() {
            ///         println!("found an extension: {:?}", ext);
            ///     }
            /// }
            /// # enumerate::<usize>(&AAFramework::default());
            /// ```
            pub fn new(af: &'a AAFramework<T>) -> Self {
                Self::new_with_options(af, SolverOptions::default())
            }

            #[doc = concat!(" Builds a new solver for the ", $sem_name, " semantics, given its options.")]
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
                debug!(
                    "enumerating {} extensions of a framework with {} arguments and {} defeats",
                    $sem_name,
                    self.af.n_arguments(),
                    self.af.n_defeats()
                );
                let extensions = LabellingSearch::new(self.af, &self.options).run($finalize)?;
                debug!("found {} {} extensions", extensions.len(), $sem_name);
                Ok(extensions)
            }
        }
    };
}

fn record_admissible<'a, T>(
    af: &'a AAFramework<T>,
    labelling: &LeafLabelling,
    extensions: &mut ExtensionSet<'a, T>,
) where
    T: LabelType,
{
    extensions.insert(labelling.to_extension(af, SearchLabel::In));
}

fn record_complete<'a, T>(
    af: &'a AAFramework<T>,
    labelling: &LeafLabelling,
    extensions: &mut ExtensionSet<'a, T>,
) where
    T: LabelType,
{
    if labelling_search::undec_are_justified(af, labelling) {
        extensions.insert(labelling.to_extension(af, SearchLabel::In));
    } else {
        trace!("discarding a leaf with an UNDEC argument defended by the IN ones");
    }
}

fn record_preferred<'a, T>(
    af: &'a AAFramework<T>,
    labelling: &LeafLabelling,
    extensions: &mut ExtensionSet<'a, T>,
) where
    T: LabelType,
{
    utils::insert_if_maximal(extensions, labelling.to_extension(af, SearchLabel::In));
}

fn record_stable<'a, T>(
    af: &'a AAFramework<T>,
    labelling: &LeafLabelling,
    extensions: &mut ExtensionSet<'a, T>,
) where
    T: LabelType,
{
    if !labelling.contains(SearchLabel::Undec) {
        extensions.insert(labelling.to_extension(af, SearchLabel::In));
    }
}

labelling_search_solver!(AdmissibleSemanticsSolver, "admissible", record_admissible);

labelling_search_solver!(CompleteSemanticsSolver, "complete", record_complete);

labelling_search_solver!(PreferredSemanticsSolver, "preferred", record_preferred);

labelling_search_solver!(StableSemanticsSolver, "stable", record_stable);
