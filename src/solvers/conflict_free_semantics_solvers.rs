use super::{utils, ExtensionEnumerator, SolverOptions};
use crate::aa::{AAFramework, Extension, ExtensionSet, LabelType};
use anyhow::Result;
use log::debug;

// Enumerates the conflict-free sets, deciding the arguments in label order.
// An argument may be added to the current set iff it does not defeat itself and no defeat links it to the set.
struct ConflictFreeEnumeration<'a, 'b, T>
where
    T: LabelType,
{
    af: &'a AAFramework<T>,
    options: &'b SolverOptions,
    in_set: Vec<bool>,
    extensions: ExtensionSet<'a, T>,
}

impl<'a, 'b, T> ConflictFreeEnumeration<'a, 'b, T>
where
    T: LabelType,
{
    fn run(af: &'a AAFramework<T>, options: &'b SolverOptions) -> Result<ExtensionSet<'a, T>> {
        let mut enumeration = Self {
            af,
            options,
            in_set: vec![false; af.n_arguments()],
            extensions: ExtensionSet::new(),
        };
        enumeration.enumerate_from(0)?;
        Ok(enumeration.extensions)
    }

    fn enumerate_from(&mut self, order_index: usize) -> Result<()> {
        self.options.check_interrupt()?;
        let order = self.af.ids_in_label_order();
        if order_index == order.len() {
            let ext = order
                .iter()
                .filter(|id| self.in_set[**id])
                .map(|id| self.af.argument_set().get_argument_by_id(*id))
                .collect::<Extension<'a, T>>();
            self.extensions.insert(ext);
            return Ok(());
        }
        let id = order[order_index];
        if self.can_be_added(id) {
            self.in_set[id] = true;
            self.enumerate_from(order_index + 1)?;
            self.in_set[id] = false;
        }
        self.enumerate_from(order_index + 1)
    }

    fn can_be_added(&self, id: usize) -> bool {
        !self.af.defeats_by_ids(id, id)
            && self
                .af
                .attacked_ids(id)
                .iter()
                .chain(self.af.attacker_ids(id).iter())
                .all(|other| !self.in_set[*other])
    }
}

/// A solver for the conflict-free sets.
///
/// A set of arguments is conflict-free iff no argument of the set defeats an argument of the set (including itself).
/// The sets are enumerated by a recursive case split on the arguments, in label order.
///
/// The certificates for the acceptance queries are conflict-free sets.
pub struct ConflictFreeSemanticsSolver<'a, T>
where
    T: LabelType,
{
    af: &'a AAFramework<T>,
    options: SolverOptions,
}

impl<'a, T> ConflictFreeSemanticsSolver<'a, T>
where
    T: LabelType,
{
    /// Builds a new solver for the conflict-free sets.
    ///
    /// # Example
    ///
    /// ```
    /// # use argsem::aa::AAFramework;
    /// # use argsem::solvers::{ExtensionEnumerator, ConflictFreeSemanticsSolver};
    /// let af = AAFramework::new("af", &["a", "b"], &[("a", "b")]).unwrap();
    /// let mut solver = ConflictFreeSemanticsSolver::new(&af);
    /// assert_eq!(3, solver.enumerate_extensions().unwrap().len());
    /// ```
    pub fn new(af: &'a AAFramework<T>) -> Self {
        Self::new_with_options(af, SolverOptions::default())
    }

    /// Builds a new solver for the conflict-free sets, given its options.
    pub fn new_with_options(af: &'a AAFramework<T>, options: SolverOptions) -> Self {
        Self { af, options }
    }
}

impl<'a, T> ExtensionEnumerator<'a, T> for ConflictFreeSemanticsSolver<'a, T>
where
    T: LabelType,
{
    fn framework(&self) -> &'a AAFramework<T> {
        self.af
    }

    fn enumerate_extensions(&mut self) -> Result<ExtensionSet<'a, T>> {
        let extensions = ConflictFreeEnumeration::run(self.af, &self.options)?;
        debug!("found {} conflict-free sets", extensions.len());
        Ok(extensions)
    }
}

/// A solver for the naive semantics.
///
/// The naive extensions are the conflict-free sets that are maximal wrt. set inclusion.
///
/// The certificates for the acceptance queries are extensions.
pub struct NaiveSemanticsSolver<'a, T>
where
    T: LabelType,
{
    af: &'a AAFramework<T>,
    options: SolverOptions,
}

impl<'a, T> NaiveSemanticsSolver<'a, T>
where
    T: LabelType,
{
    /// Builds a new solver for the naive semantics.
    pub fn new(af: &'a AAFramework<T>) -> Self {
        Self::new_with_options(af, SolverOptions::default())
    }

    /// Builds a new solver for the naive semantics, given its options.
    pub fn new_with_options(af: &'a AAFramework<T>, options: SolverOptions) -> Self {
        Self { af, options }
    }
}

impl<'a, T> ExtensionEnumerator<'a, T> for NaiveSemanticsSolver<'a, T>
where
    T: LabelType,
{
    fn framework(&self) -> &'a AAFramework<T> {
        self.af
    }

    fn enumerate_extensions(&mut self) -> Result<ExtensionSet<'a, T>> {
        let conflict_free = ConflictFreeEnumeration::run(self.af, &self.options)?;
        let n_conflict_free = conflict_free.len();
        let extensions = utils::maximal_sets(conflict_free);
        debug!(
            "found {} naive extensions among {} conflict-free sets",
            extensions.len(),
            n_conflict_free
        );
        Ok(extensions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aa::SemanticsError;

    fn labels(extensions: &ExtensionSet<&str>) -> Vec<Vec<String>> {
        extensions
            .iter()
            .map(|ext| ext.iter().map(|a| a.label().to_string()).collect())
            .collect()
    }

    #[test]
    fn test_conflict_free_chain() {
        let af = AAFramework::new("af", &["a", "b", "c"], &[("a", "b"), ("b", "c")]).unwrap();
        let mut solver = ConflictFreeSemanticsSolver::new(&af);
        assert_eq!(
            vec![vec![], vec!["a"], vec!["a", "c"], vec!["b"], vec!["c"]],
            labels(&solver.enumerate_extensions().unwrap())
        );
    }

    #[test]
    fn test_naive_chain() {
        let af = AAFramework::new("af", &["a", "b", "c"], &[("a", "b"), ("b", "c")]).unwrap();
        let mut solver = NaiveSemanticsSolver::new(&af);
        assert_eq!(
            vec![vec!["a", "c"], vec!["b"]],
            labels(&solver.enumerate_extensions().unwrap())
        );
    }

    #[test]
    fn test_self_defeating_argument_is_never_included() {
        let af = AAFramework::new("af", &["a", "b"], &[("a", "a"), ("a", "b")]).unwrap();
        let mut solver = ConflictFreeSemanticsSolver::new(&af);
        let expected: Vec<Vec<&str>> = vec![vec![], vec!["b"]];
        assert_eq!(expected, labels(&solver.enumerate_extensions().unwrap()));
        let mut solver = NaiveSemanticsSolver::new(&af);
        assert_eq!(vec![vec!["b"]], labels(&solver.enumerate_extensions().unwrap()));
    }

    #[test]
    fn test_only_self_defeating_arguments() {
        let af = AAFramework::new("af", &["a"], &[("a", "a")]).unwrap();
        let mut solver = NaiveSemanticsSolver::new(&af);
        assert_eq!(vec![Vec::<String>::new()], labels(&solver.enumerate_extensions().unwrap()));
    }

    #[test]
    fn test_labels_out_of_insertion_order() {
        let af = AAFramework::new("af", &["c", "b", "a"], &[("a", "c")]).unwrap();
        let mut solver = NaiveSemanticsSolver::new(&af);
        assert_eq!(
            vec![vec!["a", "b"], vec!["b", "c"]],
            labels(&solver.enumerate_extensions().unwrap())
        );
    }

    #[test]
    fn test_interrupted() {
        let af = AAFramework::new("af", &["a", "b"], &[]).unwrap();
        let options = SolverOptions::default().with_interrupt(|| true);
        let err = NaiveSemanticsSolver::new_with_options(&af, options)
            .enumerate_extensions()
            .unwrap_err();
        assert_eq!(
            Some(&SemanticsError::Interrupted),
            err.downcast_ref::<SemanticsError>()
        );
    }
}
