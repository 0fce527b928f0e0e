use super::SemanticsError;
use anyhow::Result;
use std::cmp::Ordering;
use std::collections::{BTreeSet, HashMap};
use std::fmt::Debug;
use std::fmt::Display;
use std::hash::{Hash, Hasher};

/// The trait for argument labels.
///
/// Arguments may be labeled by any type implementing some traits.
/// This trait is used to combine them.
///
/// Labels must be totally ordered, since searches process arguments in label order
/// and extensions are stored as ordered sets.
/// Simple types like [usize], [&str] and [String] implement [LabelType].
pub trait LabelType: Clone + Debug + Display + Eq + Hash + Ord {}
impl<T: Clone + Debug + Display + Eq + Hash + Ord> LabelType for T {}

/// Handles a single argument.
///
/// Each argument has a label and an identifier which is unique in an argument set.
/// The label must be a [`LabelType`].
///
/// The identity of an argument is its label:
/// equality, hashing and ordering ignore the identifier,
/// so that two arguments sharing a label in two different frameworks are equal.
///
/// Arguments are built by [`ArgumentSet`] objects.
#[derive(Clone, Debug)]
pub struct Argument<T: LabelType> {
    id: usize,
    label: T,
}

impl<T> Argument<T>
where
    T: LabelType,
{
    /// Returns the label of the argument.
    ///
    /// Example
    ///
    /// ```
    /// # use argsem::aa::{Argument, LabelType};
    /// fn describe_argument<T: LabelType>(a: &Argument<T>) {
    ///     println!("argument with id {} has the label {}", a.id(), a.label());
    /// }
    /// ```
    pub fn label(&self) -> &T {
        &self.label
    }

    /// Returns the id of the argument in the set it belongs to.
    pub fn id(&self) -> usize {
        self.id
    }
}

impl<T> PartialEq for Argument<T>
where
    T: LabelType,
{
    fn eq(&self, other: &Self) -> bool {
        self.label == other.label
    }
}

impl<T> Eq for Argument<T> where T: LabelType {}

impl<T> Hash for Argument<T>
where
    T: LabelType,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.label.hash(state)
    }
}

impl<T> PartialOrd for Argument<T>
where
    T: LabelType,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Argument<T>
where
    T: LabelType,
{
    fn cmp(&self, other: &Self) -> Ordering {
        self.label.cmp(&other.label)
    }
}

impl<T> Display for Argument<T>
where
    T: LabelType,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label)
    }
}

/// Handles the set of arguments of an AA framework.
///
/// Identifiers are given in insertion order, from `0` to `n - 1`.
/// Arguments are never removed, so that an identifier is always valid once given.
#[derive(Clone, Debug)]
pub struct ArgumentSet<T>
where
    T: LabelType,
{
    arguments: Vec<Argument<T>>,
    label_to_id: HashMap<T, usize>,
}

impl<T> Default for ArgumentSet<T>
where
    T: LabelType,
{
    fn default() -> Self {
        ArgumentSet {
            arguments: Vec::new(),
            label_to_id: HashMap::new(),
        }
    }
}

impl<T> ArgumentSet<T>
where
    T: LabelType,
{
    /// Builds a new argument set given the labels of the arguments.
    ///
    /// Each argument will be assigned an id equal to its index in the provided slice of argument labels.
    /// If a label appears multiple times, the first occurrence is the only one that is considered.
    ///
    /// # Example
    ///
    /// ```
    /// # use argsem::aa::ArgumentSet;
    /// let labels = vec!["a", "b", "c"];
    /// let arguments = ArgumentSet::new_with_labels(&labels);
    /// assert_eq!(3, arguments.len());
    /// ```
    pub fn new_with_labels(labels: &[T]) -> Self {
        let mut argument_set = ArgumentSet {
            arguments: Vec::with_capacity(labels.len()),
            label_to_id: HashMap::with_capacity(labels.len()),
        };
        labels
            .iter()
            .for_each(|l| argument_set.new_argument(l.clone()));
        argument_set.arguments.shrink_to_fit();
        argument_set.label_to_id.shrink_to_fit();
        argument_set
    }

    /// Adds a new argument to this set.
    ///
    /// The id of the new argument is the previous maximal id plus one.
    /// If an argument with the same label is already defined, no argument is added.
    pub fn new_argument(&mut self, label: T) {
        self.label_to_id.entry(label.clone()).or_insert_with(|| {
            self.arguments.push(Argument {
                id: self.arguments.len(),
                label,
            });
            self.arguments.len() - 1
        });
    }

    /// Returns the number of arguments in the set.
    pub fn len(&self) -> usize {
        self.arguments.len()
    }

    /// Returns `true` iff the set has no argument.
    ///
    /// # Example
    ///
    /// ```
    /// # use argsem::aa::ArgumentSet;
    /// let arguments = ArgumentSet::new_with_labels(&[] as &[&str]);
    /// assert!(arguments.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.arguments.is_empty()
    }

    /// Returns the unique index associated to an argument label.
    ///
    /// If no such label exists, a [NotFound](SemanticsError::NotFound) error is returned.
    ///
    /// # Example
    ///
    /// ```
    /// # use argsem::aa::ArgumentSet;
    /// let labels = vec!["a", "b", "c"];
    /// let arguments = ArgumentSet::new_with_labels(&labels);
    /// assert_eq!(0, arguments.get_argument_index(&labels[0]).unwrap());
    /// assert_eq!(2, arguments.get_argument_index(&labels[2]).unwrap());
    /// assert!(arguments.get_argument_index(&"d").is_err());
    /// ```
    pub fn get_argument_index(&self, label: &T) -> Result<usize> {
        self.label_to_id
            .get(label)
            .copied()
            .ok_or_else(|| SemanticsError::NotFound(label.to_string()).into())
    }

    /// Returns the argument associated to an argument label.
    ///
    /// # Example
    ///
    /// ```
    /// # use argsem::aa::ArgumentSet;
    /// let labels = vec!["a", "b", "c"];
    /// let arguments = ArgumentSet::new_with_labels(&labels);
    /// assert!(arguments.get_argument(&"a").is_ok());
    /// assert!(arguments.get_argument(&"d").is_err());
    /// ```
    pub fn get_argument(&self, label: &T) -> Result<&Argument<T>> {
        self.get_argument_index(label)
            .map(|i| &self.arguments[i])
    }

    /// Returns the argument with the corresponding id.
    ///
    /// # Panics
    ///
    /// Panics if no argument has such id.
    ///
    /// # Example
    ///
    /// ```
    /// # use argsem::aa::ArgumentSet;
    /// let labels = vec!["a", "b", "c"];
    /// let arguments = ArgumentSet::new_with_labels(&labels);
    /// assert_eq!(&labels[1], arguments.get_argument_by_id(1).label());
    /// ```
    pub fn get_argument_by_id(&self, id: usize) -> &Argument<T> {
        &self.arguments[id]
    }

    /// Returns the id that the provided argument has in this set.
    ///
    /// The argument may come from another set (e.g. another framework sharing labels with this one):
    /// its identifier is trusted only if the argument it designates in this set has the same label.
    /// Otherwise, the label is looked up.
    pub(crate) fn resolve_id(&self, arg: &Argument<T>) -> Result<usize> {
        match self.arguments.get(arg.id()) {
            Some(a) if a.label == arg.label => Ok(arg.id()),
            _ => self.get_argument_index(arg.label()),
        }
    }

    /// Returns an iterator to the arguments, in id order.
    ///
    /// # Example
    ///
    /// ```
    /// # use argsem::aa::ArgumentSet;
    /// let labels = vec!["a", "b", "c"];
    /// let arguments = ArgumentSet::new_with_labels(&labels);
    /// assert_eq!(3, arguments.iter().count());
    /// ```
    pub fn iter(&self) -> impl Iterator<Item = &Argument<T>> + '_ {
        self.arguments.iter()
    }
}

/// A set of arguments, as returned by the semantics solvers.
///
/// Extensions are ordered sets: iterating over an extension gives its arguments in label order.
pub type Extension<'a, T> = BTreeSet<&'a Argument<T>>;

/// A family of extensions.
///
/// Since families are sets, a solver never returns the same extension twice.
pub type ExtensionSet<'a, T> = BTreeSet<Extension<'a, T>>;
