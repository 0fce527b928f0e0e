use crate::aa::{AAFramework, Argument, Extension, ExtensionSet, LabelType, SemanticsError};
use anyhow::Result;

// Returns the argument of the framework sharing its label with the provided one.
pub(crate) fn framework_argument<'a, T>(
    af: &'a AAFramework<T>,
    arg: &Argument<T>,
) -> Result<&'a Argument<T>>
where
    T: LabelType,
{
    af.argument_set()
        .resolve_id(arg)
        .map(|id| af.argument_set().get_argument_by_id(id))
        .map_err(|_| SemanticsError::InvalidArgument(arg.to_string()).into())
}

// Adds an extension to a family of sets kept pairwise incomparable.
// The extension is dropped if it is included in a member of the family; the members it strictly includes are removed.
pub(crate) fn insert_if_maximal<'a, T>(family: &mut ExtensionSet<'a, T>, ext: Extension<'a, T>)
where
    T: LabelType,
{
    if family.iter().any(|other| ext.is_subset(other)) {
        return;
    }
    family.retain(|other| !other.is_subset(&ext));
    family.insert(ext);
}

// Keeps the members of a family that are maximal for set inclusion.
pub(crate) fn maximal_sets<'a, T>(family: ExtensionSet<'a, T>) -> ExtensionSet<'a, T>
where
    T: LabelType,
{
    family.into_iter().fold(ExtensionSet::new(), |mut acc, ext| {
        insert_if_maximal(&mut acc, ext);
        acc
    })
}
