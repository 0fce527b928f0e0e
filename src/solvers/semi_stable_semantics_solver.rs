use super::{ExtensionEnumerator, SolverOptions};
use crate::{
    aa::{AAFramework, ExtensionSet, LabelType},
    utils::{Label, PartialLabelling},
};
use anyhow::Result;
use log::{debug, trace};

type CompleteLabelling = PartialLabelling<Label>;

/// A solver for the semi-stable semantics.
///
/// The semi-stable extensions are the complete extensions whose labellings have a minimal set (wrt. inclusion) of UNDEC arguments.
/// When the framework admits stable extensions, the semi-stable extensions are the stable ones.
/// Contrary to stable extensions, a finite framework always admits at least one semi-stable extension.
///
/// The search starts from the labelling setting all the arguments IN, and repeatedly moves an illegally IN argument
/// (an IN argument with a defeater that is not OUT) to OUT; the arguments that become illegally OUT by this move
/// (OUT arguments with no IN defeater) are set UNDEC.
/// When some illegally IN argument is defeated by a legally IN or an UNDEC argument, it is the only one moved;
/// otherwise, the search branches on each illegally IN argument.
/// Since UNDEC sets only grow along a branch, a branch is cut as soon as a previously found labelling has a strictly smaller UNDEC set.
///
/// The certificates for the acceptance queries are extensions.
pub struct SemiStableSemanticsSolver<'a, T>
where
    T: LabelType,
{
    af: &'a AAFramework<T>,
    options: SolverOptions,
}

impl<'a, T> SemiStableSemanticsSolver<'a, T>
where
    T: LabelType,
{
    /// Builds a new solver for the semi-stable semantics.
    ///
    /// # Example
    ///
    /// ```
    /// # use argsem::aa::AAFramework;
    /// # use argsem::solvers::{ExtensionEnumerator, SemiStableSemanticsSolver};
    /// let af = AAFramework::new("af", &["a", "b", "c"], &[("a", "b"), ("b", "c"), ("c", "a")]).unwrap();
    /// let mut solver = SemiStableSemanticsSolver::new(&af);
    /// let extensions = solver.enumerate_extensions().unwrap();
    /// assert_eq!(1, extensions.len());
    /// assert!(extensions.iter().next().unwrap().is_empty());
    /// ```
    pub fn new(af: &'a AAFramework<T>) -> Self {
        Self::new_with_options(af, SolverOptions::default())
    }

    /// Builds a new solver for the semi-stable semantics, given its options.
    pub fn new_with_options(af: &'a AAFramework<T>, options: SolverOptions) -> Self {
        Self { af, options }
    }

    fn find(&self, labelling: CompleteLabelling, arena: &mut Vec<CompleteLabelling>) -> Result<()> {
        self.options.check_interrupt()?;
        if arena
            .iter()
            .any(|other| other.is_strict_subset_for(&labelling, Label::Undec))
        {
            trace!("cutting a branch dominated by a previous labelling");
            return Ok(());
        }
        let illegally_in = self
            .af
            .ids_in_label_order()
            .iter()
            .copied()
            .filter(|id| self.is_illegally_in(&labelling, *id))
            .collect::<Vec<usize>>();
        if illegally_in.is_empty() {
            trace!("found a terminal labelling");
            arena.push(labelling);
            return Ok(());
        }
        match illegally_in
            .iter()
            .find(|id| self.is_super_illegally_in(&labelling, **id))
        {
            Some(id) => {
                let mut next = labelling;
                self.transition_step(&mut next, *id);
                self.find(next, arena)
            }
            None => {
                for id in illegally_in {
                    let mut next = labelling.clone();
                    self.transition_step(&mut next, id);
                    self.find(next, arena)?;
                }
                Ok(())
            }
        }
    }

    fn is_legally_in(&self, labelling: &CompleteLabelling, id: usize) -> bool {
        labelling.get(id) == Label::In
            && self
                .af
                .attacker_ids(id)
                .iter()
                .all(|attacker| labelling.get(*attacker) == Label::Out)
    }

    fn is_illegally_in(&self, labelling: &CompleteLabelling, id: usize) -> bool {
        labelling.get(id) == Label::In && !self.is_legally_in(labelling, id)
    }

    fn is_super_illegally_in(&self, labelling: &CompleteLabelling, id: usize) -> bool {
        self.af.attacker_ids(id).iter().any(|attacker| {
            labelling.get(*attacker) == Label::Undec || self.is_legally_in(labelling, *attacker)
        })
    }

    fn is_illegally_out(&self, labelling: &CompleteLabelling, id: usize) -> bool {
        labelling.get(id) == Label::Out
            && self
                .af
                .attacker_ids(id)
                .iter()
                .all(|attacker| labelling.get(*attacker) != Label::In)
    }

    fn transition_step(&self, labelling: &mut CompleteLabelling, id: usize) {
        labelling.set(id, Label::Out);
        for target in std::iter::once(&id).chain(self.af.attacked_ids(id).iter()) {
            if self.is_illegally_out(labelling, *target) {
                labelling.set(*target, Label::Undec);
            }
        }
    }
}

impl<'a, T> ExtensionEnumerator<'a, T> for SemiStableSemanticsSolver<'a, T>
where
    T: LabelType,
{
    fn framework(&self) -> &'a AAFramework<T> {
        self.af
    }

    fn enumerate_extensions(&mut self) -> Result<ExtensionSet<'a, T>> {
        debug!(
            "enumerating semi-stable extensions of a framework with {} arguments and {} defeats",
            self.af.n_arguments(),
            self.af.n_defeats()
        );
        let mut arena = vec![];
        self.find(
            PartialLabelling::new(self.af.n_arguments(), Label::In),
            &mut arena,
        )?;
        let n_terminal = arena.len();
        let extensions = arena
            .iter()
            .filter(|labelling| {
                !arena
                    .iter()
                    .any(|other| other.is_strict_subset_for(labelling, Label::Undec))
            })
            .map(|labelling| labelling.to_extension(self.af, Label::In))
            .collect::<ExtensionSet<'a, T>>();
        debug!(
            "found {} semi-stable extensions among {} terminal labellings",
            extensions.len(),
            n_terminal
        );
        Ok(extensions)
    }
}
