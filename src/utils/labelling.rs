use crate::aa::{AAFramework, Argument, Extension, LabelType, SemanticsError};
use anyhow::Result;
use std::fmt::Display;

/// The status given to an argument by a labelling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Label {
    /// The argument is accepted.
    In,
    /// The argument is rejected, since an accepted argument defeats it.
    Out,
    /// The argument is neither accepted nor rejected.
    Undec,
}

impl Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Label::In => write!(f, "IN"),
            Label::Out => write!(f, "OUT"),
            Label::Undec => write!(f, "UNDEC"),
        }
    }
}

// The statuses used by the generic labelling search.
// BLANK arguments are not decided yet; MUST_OUT arguments defeat an IN argument but are not defeated yet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) enum SearchLabel {
    Blank,
    In,
    Out,
    Undec,
    MustOut,
}

/// A labelling under construction, indexed by argument ids.
///
/// Each search branch owns its labelling; children get a clone.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct PartialLabelling<L>
where
    L: Copy + Eq,
{
    labels: Vec<L>,
}

impl<L> PartialLabelling<L>
where
    L: Copy + Eq,
{
    pub(crate) fn new(n_arguments: usize, init: L) -> Self {
        Self {
            labels: vec![init; n_arguments],
        }
    }

    pub(crate) fn get(&self, id: usize) -> L {
        self.labels[id]
    }

    pub(crate) fn set(&mut self, id: usize, label: L) {
        self.labels[id] = label;
    }

    pub(crate) fn contains(&self, label: L) -> bool {
        self.labels.contains(&label)
    }

    pub(crate) fn ids_with(&self, label: L) -> impl Iterator<Item = usize> + '_ {
        self.labels
            .iter()
            .enumerate()
            .filter(move |(_, l)| **l == label)
            .map(|(i, _)| i)
    }

    // The first id of the order having the given label.
    pub(crate) fn first_with(&self, order: &[usize], label: L) -> Option<usize> {
        order.iter().copied().find(|i| self.labels[*i] == label)
    }

    // Returns `true` iff the ids with the given label in self are a strict subset of the ones in other.
    pub(crate) fn is_strict_subset_for(&self, other: &Self, label: L) -> bool {
        let mut strict = false;
        for (l1, l2) in self.labels.iter().zip(other.labels.iter()) {
            match (*l1 == label, *l2 == label) {
                (true, false) => return false,
                (false, true) => strict = true,
                _ => {}
            }
        }
        strict
    }

    pub(crate) fn to_extension<'a, T>(&self, af: &'a AAFramework<T>, label: L) -> Extension<'a, T>
    where
        T: LabelType,
    {
        self.ids_with(label)
            .map(|i| af.argument_set().get_argument_by_id(i))
            .collect()
    }
}

/// The complete IN/OUT/UNDEC labelling of a framework induced by a set of arguments.
///
/// The arguments of the set are IN, the arguments they defeat are OUT, and the remaining ones are UNDEC.
/// When the set is not conflict-free, its members stay IN even if they are defeated.
///
/// # Example
///
/// ```
/// # use argsem::aa::AAFramework;
/// # use argsem::solvers;
/// # use argsem::utils::{Label, Labelling};
/// let af = AAFramework::new("af", &["a", "b", "c"], &[("a", "b"), ("c", "c")]).unwrap();
/// let grounded = solvers::grounded(&af);
/// let labelling = Labelling::from_extension(&af, &grounded).unwrap();
/// assert_eq!(Label::In, labelling.label_of(af.get_argument(&"a").unwrap()).unwrap());
/// assert_eq!(Label::Out, labelling.label_of(af.get_argument(&"b").unwrap()).unwrap());
/// assert_eq!(Label::Undec, labelling.label_of(af.get_argument(&"c").unwrap()).unwrap());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Labelling<'a, T>
where
    T: LabelType,
{
    af: &'a AAFramework<T>,
    labels: PartialLabelling<Label>,
}

impl<'a, T> Labelling<'a, T>
where
    T: LabelType,
{
    /// Builds the labelling induced by an extension.
    ///
    /// The arguments of the extension may come from another framework, in which case they are identified by their labels.
    /// If one of them does not belong to the framework, an [InvalidArgument](SemanticsError::InvalidArgument) error is returned.
    pub fn from_extension(af: &'a AAFramework<T>, extension: &Extension<'_, T>) -> Result<Self> {
        let mut labels = PartialLabelling::new(af.n_arguments(), Label::Undec);
        let members = resolve_ids(af, extension)?;
        for id in members.iter() {
            for attacked in af.attacked_ids(*id) {
                labels.set(*attacked, Label::Out);
            }
        }
        for id in members {
            labels.set(id, Label::In);
        }
        Ok(Self { af, labels })
    }

    /// Returns the label of an argument.
    ///
    /// If the argument does not belong to the framework, a [NotFound](SemanticsError::NotFound) error is returned.
    pub fn label_of(&self, arg: &Argument<T>) -> Result<Label> {
        let id = self.af.argument_set().resolve_id(arg)?;
        Ok(self.labels.get(id))
    }

    /// Returns the arguments having the given label, in label order.
    pub fn arguments_with(&self, label: Label) -> Extension<'a, T> {
        self.labels.to_extension(self.af, label)
    }

    /// Returns the IN arguments.
    pub fn in_arguments(&self) -> Extension<'a, T> {
        self.arguments_with(Label::In)
    }

    /// Returns the OUT arguments.
    pub fn out_arguments(&self) -> Extension<'a, T> {
        self.arguments_with(Label::Out)
    }

    /// Returns the UNDEC arguments.
    pub fn undec_arguments(&self) -> Extension<'a, T> {
        self.arguments_with(Label::Undec)
    }

    /// Iterates over the arguments of the framework and their labels, in id order.
    pub fn iter(&self) -> impl Iterator<Item = (&'a Argument<T>, Label)> + '_ {
        self.af
            .argument_set()
            .iter()
            .map(|a| (a, self.labels.get(a.id())))
    }
}

// Translates a set of arguments to their ids in the framework.
// Arguments outside the framework raise an InvalidArgument error.
pub(crate) fn resolve_ids<T>(af: &AAFramework<T>, extension: &Extension<'_, T>) -> Result<Vec<usize>>
where
    T: LabelType,
{
    extension
        .iter()
        .map(|a| {
            af.argument_set()
                .resolve_id(a)
                .map_err(|_| anyhow::Error::from(SemanticsError::InvalidArgument(a.to_string())))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_labelling() {
        let mut labelling = PartialLabelling::new(3, SearchLabel::Blank);
        assert_eq!(Some(1), labelling.first_with(&[1, 0, 2], SearchLabel::Blank));
        labelling.set(1, SearchLabel::In);
        labelling.set(2, SearchLabel::MustOut);
        assert_eq!(Some(0), labelling.first_with(&[1, 0, 2], SearchLabel::Blank));
        assert!(labelling.contains(SearchLabel::MustOut));
        assert!(!labelling.contains(SearchLabel::Undec));
        assert_eq!(vec![1], labelling.ids_with(SearchLabel::In).collect::<Vec<usize>>());
    }

    #[test]
    fn test_strict_subset() {
        let mut l1 = PartialLabelling::new(3, Label::In);
        let mut l2 = PartialLabelling::new(3, Label::In);
        assert!(!l1.is_strict_subset_for(&l2, Label::Undec));
        l2.set(0, Label::Undec);
        assert!(l1.is_strict_subset_for(&l2, Label::Undec));
        l1.set(1, Label::Undec);
        assert!(!l1.is_strict_subset_for(&l2, Label::Undec));
        l2.set(1, Label::Undec);
        assert!(l1.is_strict_subset_for(&l2, Label::Undec));
        assert!(!l2.is_strict_subset_for(&l1, Label::Undec));
    }

    #[test]
    fn test_from_extension() {
        let af = AAFramework::new("af", &["a", "b", "c", "d"], &[("a", "b"), ("b", "c"), ("d", "d")])
            .unwrap();
        let ext = vec![af.get_argument(&"a").unwrap(), af.get_argument(&"c").unwrap()]
            .into_iter()
            .collect::<Extension<&str>>();
        let labelling = Labelling::from_extension(&af, &ext).unwrap();
        assert_eq!(ext, labelling.in_arguments());
        assert_eq!(
            vec!["b"],
            labelling
                .out_arguments()
                .iter()
                .map(|a| *a.label())
                .collect::<Vec<&str>>()
        );
        assert_eq!(
            vec!["d"],
            labelling
                .undec_arguments()
                .iter()
                .map(|a| *a.label())
                .collect::<Vec<&str>>()
        );
        assert_eq!(4, labelling.iter().count());
    }

    #[test]
    fn test_from_conflicting_extension() {
        let af = AAFramework::new("af", &["a", "b"], &[("a", "b")]).unwrap();
        let ext = af.argument_set().iter().collect::<Extension<&str>>();
        let labelling = Labelling::from_extension(&af, &ext).unwrap();
        assert_eq!(2, labelling.in_arguments().len());
    }

    #[test]
    fn test_from_foreign_extension() {
        let af1 = AAFramework::new("af1", &["a", "z"], &[]).unwrap();
        let af2 = AAFramework::new("af2", &["a", "b"], &[("a", "b")]).unwrap();
        let mut ext = Extension::new();
        ext.insert(af1.get_argument(&"a").unwrap());
        let labelling = Labelling::from_extension(&af2, &ext).unwrap();
        assert_eq!(Label::Out, labelling.label_of(af2.get_argument(&"b").unwrap()).unwrap());
        ext.insert(af1.get_argument(&"z").unwrap());
        let err = Labelling::from_extension(&af2, &ext).unwrap_err();
        assert_eq!(
            Some(&SemanticsError::InvalidArgument("z".to_string())),
            err.downcast_ref::<SemanticsError>()
        );
    }

    #[test]
    fn test_label_display() {
        assert_eq!("IN", Label::In.to_string());
        assert_eq!("OUT", Label::Out.to_string());
        assert_eq!("UNDEC", Label::Undec.to_string());
    }
}
