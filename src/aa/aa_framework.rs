use super::{Argument, ArgumentSet, LabelType, SemanticsError};
use anyhow::{Context, Result};
use std::collections::BTreeSet;

/// An Abstract Argumentation framework as defined in Dung semantics.
///
/// Frameworks are read-only: they are built at once by [`AAFramework::new`] or by an [`AAFrameworkBuilder`],
/// which computes the incoming and outgoing defeat indices in a single pass over the defeats.
/// Neighborhood queries are then plain index reads.
///
/// Two frameworks are equal iff they have the same arguments and the same defeats; their names are ignored.
#[derive(Debug)]
pub struct AAFramework<T>
where
    T: LabelType,
{
    name: String,
    arguments: ArgumentSet<T>,
    defeats: Vec<(usize, usize)>,
    defeats_from: Vec<Vec<usize>>,
    defeats_to: Vec<Vec<usize>>,
    label_order: Vec<usize>,
}

/// A defeat, represented as a couple of two arguments.
///
/// Defeats are built by [`AAFramework`] objects.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Defeat<'a, T>(&'a Argument<T>, &'a Argument<T>)
where
    T: LabelType;

impl<'a, T> Defeat<'a, T>
where
    T: LabelType,
{
    /// Returns the attacker.
    ///
    /// Example
    ///
    /// ```
    /// # use argsem::aa::{Defeat, LabelType};
    /// fn describe_defeat<T: LabelType>(defeat: &Defeat<T>) {
    ///     println!("{} defeats {}", defeat.from(), defeat.to());
    /// }
    /// ```
    pub fn from(&self) -> &'a Argument<T> {
        self.0
    }

    /// Returns the attacked argument.
    pub fn to(&self) -> &'a Argument<T> {
        self.1
    }
}

impl<T> AAFramework<T>
where
    T: LabelType,
{
    /// Builds an AA framework given its name, the labels of its arguments and its defeats.
    ///
    /// Repeated labels and repeated defeats are only considered once.
    /// If a defeat refers to an undefined argument,
    /// an [InconsistentConstruction](SemanticsError::InconsistentConstruction) error is returned.
    ///
    /// # Example
    ///
    /// ```
    /// # use argsem::aa::AAFramework;
    /// let af = AAFramework::new("af", &["a", "b", "c"], &[("a", "b"), ("b", "c")]).unwrap();
    /// assert_eq!(3, af.n_arguments());
    /// assert_eq!(2, af.n_defeats());
    /// assert!(AAFramework::new("af", &["a"], &[("a", "b")]).is_err());
    /// ```
    pub fn new(name: &str, labels: &[T], defeats: &[(T, T)]) -> Result<Self> {
        let mut builder =
            AAFrameworkBuilder::new_with_argument_set(name, ArgumentSet::new_with_labels(labels));
        for (from, to) in defeats {
            builder
                .new_defeat(from, to)
                .with_context(|| format!(r#"while building framework "{}""#, name))?;
        }
        Ok(builder.build())
    }

    /// Returns the name of the framework.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the argument set of the framework.
    ///
    /// # Example
    ///
    /// ```
    /// # use argsem::aa::AAFramework;
    /// let af = AAFramework::new("af", &["a", "b", "c"], &[]).unwrap();
    /// assert_eq!(3, af.argument_set().len());
    /// ```
    pub fn argument_set(&self) -> &ArgumentSet<T> {
        &self.arguments
    }

    /// Returns the argument associated with the given label.
    ///
    /// If no such argument exists, a [NotFound](SemanticsError::NotFound) error is returned.
    pub fn get_argument(&self, label: &T) -> Result<&Argument<T>> {
        self.arguments.get_argument(label)
    }

    /// Provides an iterator to the defeats.
    ///
    /// # Example
    ///
    /// ```
    /// # use argsem::aa::AAFramework;
    /// let af = AAFramework::new("af", &["a", "b"], &[("a", "b"), ("a", "b")]).unwrap();
    /// assert_eq!(1, af.iter_defeats().count());
    /// ```
    pub fn iter_defeats(&self) -> impl Iterator<Item = Defeat<'_, T>> + '_ {
        self.defeats.iter().map(|(a, b)| {
            Defeat(
                self.arguments.get_argument_by_id(*a),
                self.arguments.get_argument_by_id(*b),
            )
        })
    }

    /// Provides an iterator to the defeats that have the given argument as attacker.
    pub fn iter_defeats_from(
        &self,
        arg: &Argument<T>,
    ) -> Result<impl Iterator<Item = Defeat<'_, T>> + '_> {
        let id = self.arguments.resolve_id(arg)?;
        let from = self.arguments.get_argument_by_id(id);
        Ok(self.defeats_from[id]
            .iter()
            .map(move |to| Defeat(from, self.arguments.get_argument_by_id(*to))))
    }

    /// Provides an iterator to the defeats that have the given argument as attacked argument.
    pub fn iter_defeats_to(
        &self,
        arg: &Argument<T>,
    ) -> Result<impl Iterator<Item = Defeat<'_, T>> + '_> {
        let id = self.arguments.resolve_id(arg)?;
        let to = self.arguments.get_argument_by_id(id);
        Ok(self.defeats_to[id]
            .iter()
            .map(move |from| Defeat(self.arguments.get_argument_by_id(*from), to)))
    }

    /// Returns the arguments that defeat the given one.
    ///
    /// The argument may come from another framework; in this case, it is identified by its label.
    /// If it does not belong to this framework, a [NotFound](SemanticsError::NotFound) error is returned.
    ///
    /// # Example
    ///
    /// ```
    /// # use argsem::aa::AAFramework;
    /// let af = AAFramework::new("af", &["a", "b", "c"], &[("a", "c"), ("b", "c")]).unwrap();
    /// let c = af.get_argument(&"c").unwrap();
    /// let attackers = af
    ///     .get_incoming_defeat_arguments(c)
    ///     .unwrap()
    ///     .map(|arg| *arg.label())
    ///     .collect::<Vec<&str>>();
    /// assert_eq!(vec!["a", "b"], attackers);
    /// ```
    pub fn get_incoming_defeat_arguments(
        &self,
        arg: &Argument<T>,
    ) -> Result<impl Iterator<Item = &Argument<T>> + '_> {
        let id = self.arguments.resolve_id(arg)?;
        Ok(self.defeats_to[id]
            .iter()
            .map(|i| self.arguments.get_argument_by_id(*i)))
    }

    /// Returns the arguments defeated by the given one.
    ///
    /// See [get_incoming_defeat_arguments](Self::get_incoming_defeat_arguments) for the handling of foreign arguments.
    pub fn get_outgoing_defeat_arguments(
        &self,
        arg: &Argument<T>,
    ) -> Result<impl Iterator<Item = &Argument<T>> + '_> {
        let id = self.arguments.resolve_id(arg)?;
        Ok(self.defeats_from[id]
            .iter()
            .map(|i| self.arguments.get_argument_by_id(*i)))
    }

    /// Returns `true` iff at least one argument defeats the given one.
    pub fn is_defeated(&self, arg: &Argument<T>) -> Result<bool> {
        let id = self.arguments.resolve_id(arg)?;
        Ok(!self.defeats_to[id].is_empty())
    }

    /// Returns `true` iff the first argument defeats the second one.
    pub fn has_defeat(&self, from: &Argument<T>, to: &Argument<T>) -> Result<bool> {
        let from_id = self.arguments.resolve_id(from)?;
        let to_id = self.arguments.resolve_id(to)?;
        Ok(self.defeats_by_ids(from_id, to_id))
    }

    /// Returns the number of arguments in this framework.
    pub fn n_arguments(&self) -> usize {
        self.arguments.len()
    }

    /// Returns the number of (distinct) defeats in this framework.
    pub fn n_defeats(&self) -> usize {
        self.defeats.len()
    }

    pub(crate) fn attacked_ids(&self, id: usize) -> &[usize] {
        &self.defeats_from[id]
    }

    pub(crate) fn attacker_ids(&self, id: usize) -> &[usize] {
        &self.defeats_to[id]
    }

    pub(crate) fn defeats_by_ids(&self, from: usize, to: usize) -> bool {
        self.defeats_from[from].binary_search(&to).is_ok()
    }

    // The argument ids, sorted by the order of their labels.
    pub(crate) fn ids_in_label_order(&self) -> &[usize] {
        &self.label_order
    }

    fn label_sets(&self) -> (BTreeSet<&T>, BTreeSet<(&T, &T)>) {
        let labels = self.arguments.iter().map(|a| a.label()).collect();
        let defeats = self
            .iter_defeats()
            .map(|d| (d.from().label(), d.to().label()))
            .collect();
        (labels, defeats)
    }
}

impl<T> Default for AAFramework<T>
where
    T: LabelType,
{
    fn default() -> Self {
        AAFrameworkBuilder::new("").build()
    }
}

impl<T> PartialEq for AAFramework<T>
where
    T: LabelType,
{
    fn eq(&self, other: &Self) -> bool {
        self.n_arguments() == other.n_arguments()
            && self.n_defeats() == other.n_defeats()
            && self.label_sets() == other.label_sets()
    }
}

impl<T> Eq for AAFramework<T> where T: LabelType {}

/// A builder for [`AAFramework`] objects.
///
/// Arguments and defeats are added incrementally; the framework is then produced by [build](Self::build).
/// Defeats are checked when they are added: their endpoints must already be arguments of the builder.
///
/// # Example
///
/// ```
/// # use argsem::aa::AAFrameworkBuilder;
/// let mut builder = AAFrameworkBuilder::new("scratch");
/// builder.new_argument("a");
/// builder.new_argument("b");
/// builder.new_defeat(&"a", &"b").unwrap();
/// assert!(builder.new_defeat(&"a", &"c").is_err());
/// builder.new_argument("c");
/// builder.new_defeat(&"a", &"c").unwrap();
/// let af = builder.build();
/// assert_eq!(3, af.n_arguments());
/// assert_eq!(2, af.n_defeats());
/// ```
pub struct AAFrameworkBuilder<T>
where
    T: LabelType,
{
    name: String,
    arguments: ArgumentSet<T>,
    defeats: Vec<(usize, usize)>,
}

impl<T> AAFrameworkBuilder<T>
where
    T: LabelType,
{
    /// Creates a builder for a framework with no arguments.
    pub fn new(name: &str) -> Self {
        Self::new_with_argument_set(name, ArgumentSet::default())
    }

    /// Creates a builder for a framework initialized with the provided set of arguments.
    pub fn new_with_argument_set(name: &str, arguments: ArgumentSet<T>) -> Self {
        AAFrameworkBuilder {
            name: name.to_string(),
            arguments,
            defeats: vec![],
        }
    }

    /// Adds a new argument.
    ///
    /// If an argument with the same label is already defined, nothing is added.
    pub fn new_argument(&mut self, label: T) {
        self.arguments.new_argument(label);
    }

    /// Adds a new defeat given the labels of the source and destination arguments.
    ///
    /// If one of the provided arguments is undefined,
    /// an [InconsistentConstruction](SemanticsError::InconsistentConstruction) error is returned.
    /// Adding a defeat twice has no effect on the built framework.
    pub fn new_defeat(&mut self, from: &T, to: &T) -> Result<()> {
        match (
            self.arguments.get_argument_index(from),
            self.arguments.get_argument_index(to),
        ) {
            (Ok(attacker_id), Ok(attacked_id)) => {
                self.defeats.push((attacker_id, attacked_id));
                Ok(())
            }
            _ => Err(SemanticsError::InconsistentConstruction {
                from: from.to_string(),
                to: to.to_string(),
            }
            .into()),
        }
    }

    /// Adds a new defeat given the ids of the source and destination arguments.
    ///
    /// If the provided ids are undefined,
    /// an [InconsistentConstruction](SemanticsError::InconsistentConstruction) error is returned.
    pub fn new_defeat_by_ids(&mut self, from: usize, to: usize) -> Result<()> {
        let n_arguments = self.arguments.len();
        if from >= n_arguments || to >= n_arguments {
            return Err(SemanticsError::InconsistentConstruction {
                from: format!("#{}", from),
                to: format!("#{}", to),
            })
            .with_context(|| {
                format!(
                    "cannot add a defeat from identifiers {} to {}; there are {} arguments",
                    from, to, n_arguments
                )
            });
        }
        self.defeats.push((from, to));
        Ok(())
    }

    /// Returns the number of arguments added so far.
    pub fn n_arguments(&self) -> usize {
        self.arguments.len()
    }

    /// Builds the framework, computing its defeat indices.
    pub fn build(mut self) -> AAFramework<T> {
        let n = self.arguments.len();
        self.defeats.sort_unstable();
        self.defeats.dedup();
        let mut defeats_from = vec![Vec::new(); n];
        let mut defeats_to = vec![Vec::new(); n];
        for (from, to) in self.defeats.iter() {
            defeats_from[*from].push(*to);
            defeats_to[*to].push(*from);
        }
        let mut label_order = (0..n).collect::<Vec<usize>>();
        label_order.sort_unstable_by(|i, j| {
            self.arguments
                .get_argument_by_id(*i)
                .cmp(self.arguments.get_argument_by_id(*j))
        });
        AAFramework {
            name: self.name,
            arguments: self.arguments,
            defeats: self.defeats,
            defeats_from,
            defeats_to,
            label_order,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels<'a, 'b, I>(iter: I) -> Vec<&'b str>
    where
        'b: 'a,
        I: Iterator<Item = &'a Argument<&'b str>>,
    {
        iter.map(|a| *a.label()).collect()
    }

    #[test]
    fn test_n_args() {
        let af = AAFramework::new("af", &["a", "b", "c"], &[]).unwrap();
        assert_eq!(3, af.n_arguments());
        assert_eq!(0, af.n_defeats());
        assert_eq!("af", af.name());
    }

    #[test]
    fn test_new_defeat_ok() {
        let mut builder = AAFrameworkBuilder::new_with_argument_set(
            "af",
            ArgumentSet::new_with_labels(&["a", "b", "c"]),
        );
        builder.new_defeat(&"a", &"a").unwrap();
        let af = builder.build();
        assert_eq!(1, af.n_defeats());
        assert_eq!((0, 0), af.defeats[0]);
    }

    #[test]
    fn test_new_defeat_unknown_label() {
        let mut builder = AAFrameworkBuilder::new_with_argument_set(
            "af",
            ArgumentSet::new_with_labels(&["a", "b", "c"]),
        );
        let err = builder.new_defeat(&"d", &"a").unwrap_err();
        assert_eq!(
            Some(&SemanticsError::InconsistentConstruction {
                from: "d".to_string(),
                to: "a".to_string()
            }),
            err.downcast_ref::<SemanticsError>()
        );
        builder.new_defeat(&"a", &"d").unwrap_err();
    }

    #[test]
    fn test_new_defeat_by_ids() {
        let mut builder = AAFrameworkBuilder::new_with_argument_set(
            "af",
            ArgumentSet::new_with_labels(&["a", "b", "c"]),
        );
        builder.new_defeat_by_ids(0, 2).unwrap();
        let err = builder.new_defeat_by_ids(3, 0).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<SemanticsError>(),
            Some(SemanticsError::InconsistentConstruction { .. })
        ));
        builder.new_defeat_by_ids(0, 3).unwrap_err();
        assert_eq!(1, builder.build().n_defeats());
    }

    #[test]
    fn test_new_framework_unknown_label() {
        let err = AAFramework::new("af", &["a"], &[("a", "b")]).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<SemanticsError>(),
            Some(SemanticsError::InconsistentConstruction { .. })
        ));
    }

    #[test]
    fn test_indices_are_inverse() {
        let af = AAFramework::new(
            "af",
            &["a", "b", "c", "d"],
            &[("a", "b"), ("b", "a"), ("c", "b"), ("d", "d"), ("a", "b")],
        )
        .unwrap();
        assert_eq!(4, af.n_defeats());
        for d in af.iter_defeats() {
            assert!(af
                .get_outgoing_defeat_arguments(d.from())
                .unwrap()
                .any(|a| a == d.to()));
            assert!(af
                .get_incoming_defeat_arguments(d.to())
                .unwrap()
                .any(|a| a == d.from()));
        }
        let total_out: usize = af
            .argument_set()
            .iter()
            .map(|a| af.get_outgoing_defeat_arguments(a).unwrap().count())
            .sum();
        let total_in: usize = af
            .argument_set()
            .iter()
            .map(|a| af.get_incoming_defeat_arguments(a).unwrap().count())
            .sum();
        assert_eq!(af.n_defeats(), total_out);
        assert_eq!(af.n_defeats(), total_in);
    }

    #[test]
    fn test_neighborhoods() {
        let af = AAFramework::new("af", &["a", "b", "c"], &[("a", "b"), ("c", "b")]).unwrap();
        let a = af.get_argument(&"a").unwrap();
        let b = af.get_argument(&"b").unwrap();
        assert_eq!(vec!["a", "c"], labels(af.get_incoming_defeat_arguments(b).unwrap()));
        assert_eq!(vec!["b"], labels(af.get_outgoing_defeat_arguments(a).unwrap()));
        assert_eq!(0, af.get_incoming_defeat_arguments(a).unwrap().count());
        assert!(af.is_defeated(b).unwrap());
        assert!(!af.is_defeated(a).unwrap());
        assert!(af.has_defeat(a, b).unwrap());
        assert!(!af.has_defeat(b, a).unwrap());
        assert_eq!(1, af.iter_defeats_from(a).unwrap().count());
        assert_eq!(2, af.iter_defeats_to(b).unwrap().count());
    }

    #[test]
    fn test_foreign_argument() {
        let af1 = AAFramework::new("af1", &["x", "a"], &[]).unwrap();
        let af2 = AAFramework::new("af2", &["a", "b"], &[("b", "a")]).unwrap();
        let foreign_a = af1.get_argument(&"a").unwrap();
        assert!(af2.is_defeated(foreign_a).unwrap());
        let foreign_x = af1.get_argument(&"x").unwrap();
        let err = af2.is_defeated(foreign_x).unwrap_err();
        assert_eq!(
            Some(&SemanticsError::NotFound("x".to_string())),
            err.downcast_ref::<SemanticsError>()
        );
    }

    #[test]
    fn test_structural_equality() {
        let af1 = AAFramework::new("af1", &["a", "b"], &[("a", "b")]).unwrap();
        let af2 = AAFramework::new("af2", &["b", "a"], &[("a", "b"), ("a", "b")]).unwrap();
        let af3 = AAFramework::new("af3", &["a", "b"], &[("b", "a")]).unwrap();
        let af4 = AAFramework::new("af4", &["a", "b", "c"], &[("a", "b")]).unwrap();
        assert_eq!(af1, af2);
        assert_ne!(af1, af3);
        assert_ne!(af1, af4);
    }

    #[test]
    fn test_label_order() {
        let af = AAFramework::new("af", &["c", "a", "b"], &[]).unwrap();
        let ordered = af
            .ids_in_label_order()
            .iter()
            .map(|i| *af.argument_set().get_argument_by_id(*i).label())
            .collect::<Vec<&str>>();
        assert_eq!(vec!["a", "b", "c"], ordered);
    }

    #[test]
    fn test_default() {
        let af = AAFramework::<String>::default();
        assert_eq!(0, af.n_arguments());
        assert_eq!(0, af.n_defeats());
    }
}
