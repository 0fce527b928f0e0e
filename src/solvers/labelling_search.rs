use super::SolverOptions;
use crate::{
    aa::{AAFramework, ExtensionSet, LabelType},
    utils::{PartialLabelling, SearchLabel},
};
use anyhow::Result;
use log::{debug, trace};

/// The labellings reaching the leaves of the search.
///
/// At this point, no argument is BLANK nor MUST_OUT.
pub(crate) type LeafLabelling = PartialLabelling<SearchLabel>;

/// A depth-first search over the labellings of a framework.
///
/// Each step picks the first BLANK argument in label order and splits the search in two branches:
/// one in which the argument is IN, and one in which it is UNDEC.
/// Setting an argument IN sets OUT the arguments it defeats (except itself)
/// and sets MUST_OUT its attackers that are not OUT yet.
/// Leaves keeping MUST_OUT arguments are discarded;
/// the other ones are given to a finalizer deciding what is recorded.
///
/// The IN arguments of the leaves reaching the finalizer are exactly the admissible sets of the framework.
pub(crate) struct LabellingSearch<'a, 'b, T>
where
    T: LabelType,
{
    af: &'a AAFramework<T>,
    options: &'b SolverOptions,
    n_leaves: usize,
}

impl<'a, 'b, T> LabellingSearch<'a, 'b, T>
where
    T: LabelType,
{
    pub(crate) fn new(af: &'a AAFramework<T>, options: &'b SolverOptions) -> Self {
        Self {
            af,
            options,
            n_leaves: 0,
        }
    }

    /// Runs the search, calling the finalizer on each leaf.
    ///
    /// The finalizer is given the leaf labelling and the family of extensions recorded so far.
    pub(crate) fn run<F>(&mut self, mut finalize: F) -> Result<ExtensionSet<'a, T>>
    where
        F: FnMut(&'a AAFramework<T>, &LeafLabelling, &mut ExtensionSet<'a, T>),
    {
        self.n_leaves = 0;
        let mut extensions = ExtensionSet::new();
        let labelling = PartialLabelling::new(self.af.n_arguments(), SearchLabel::Blank);
        self.expand(labelling, &mut finalize, &mut extensions)?;
        debug!(
            "labelling search visited {} leaves and recorded {} extensions",
            self.n_leaves,
            extensions.len()
        );
        Ok(extensions)
    }

    fn expand<F>(
        &mut self,
        labelling: PartialLabelling<SearchLabel>,
        finalize: &mut F,
        extensions: &mut ExtensionSet<'a, T>,
    ) -> Result<()>
    where
        F: FnMut(&'a AAFramework<T>, &LeafLabelling, &mut ExtensionSet<'a, T>),
    {
        self.options.check_interrupt()?;
        match labelling.first_with(self.af.ids_in_label_order(), SearchLabel::Blank) {
            None => {
                self.n_leaves += 1;
                if labelling.contains(SearchLabel::MustOut) {
                    trace!("discarding a leaf with MUST_OUT arguments");
                } else {
                    finalize(self.af, &labelling, extensions);
                }
                Ok(())
            }
            Some(id) => {
                let mut in_labelling = labelling.clone();
                in_trans(self.af, &mut in_labelling, id);
                self.expand(in_labelling, finalize, extensions)?;
                let mut undec_labelling = labelling;
                undec_labelling.set(id, SearchLabel::Undec);
                self.expand(undec_labelling, finalize, extensions)
            }
        }
    }
}

fn in_trans<T>(af: &AAFramework<T>, labelling: &mut PartialLabelling<SearchLabel>, id: usize)
where
    T: LabelType,
{
    labelling.set(id, SearchLabel::In);
    for attacked in af.attacked_ids(id) {
        if *attacked != id {
            labelling.set(*attacked, SearchLabel::Out);
        }
    }
    for attacker in af.attacker_ids(id) {
        if labelling.get(*attacker) != SearchLabel::Out {
            labelling.set(*attacker, SearchLabel::MustOut);
        }
    }
}

/// Returns `true` iff every UNDEC argument of the leaf has an attacker that is not OUT.
pub(crate) fn undec_are_justified<T>(af: &AAFramework<T>, labelling: &LeafLabelling) -> bool
where
    T: LabelType,
{
    labelling.ids_with(SearchLabel::Undec).all(|id| {
        af.attacker_ids(id)
            .iter()
            .any(|attacker| labelling.get(*attacker) != SearchLabel::Out)
    })
}
