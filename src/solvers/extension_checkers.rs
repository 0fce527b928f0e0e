//! Functions checking whether a set of arguments satisfies the properties underlying the semantics.

use super::utils::framework_argument;
use crate::{
    aa::{AAFramework, Argument, Extension, LabelType},
    utils::{self, resolve_ids},
};
use anyhow::Result;

// The membership vector of a candidate set, indexed by argument ids.
fn membership<T>(af: &AAFramework<T>, candidate: &Extension<'_, T>) -> Result<Vec<bool>>
where
    T: LabelType,
{
    let mut members = vec![false; af.n_arguments()];
    for id in resolve_ids(af, candidate)? {
        members[id] = true;
    }
    Ok(members)
}

fn is_conflict_free_by_ids<T>(af: &AAFramework<T>, members: &[bool]) -> bool
where
    T: LabelType,
{
    (0..af.n_arguments())
        .filter(|id| members[*id])
        .all(|id| af.attacked_ids(id).iter().all(|attacked| !members[*attacked]))
}

fn is_defended_by_ids<T>(af: &AAFramework<T>, members: &[bool], id: usize) -> bool
where
    T: LabelType,
{
    af.attacker_ids(id).iter().all(|attacker| {
        af.attacker_ids(*attacker)
            .iter()
            .any(|defender| members[*defender])
    })
}

fn is_admissible_by_ids<T>(af: &AAFramework<T>, members: &[bool]) -> bool
where
    T: LabelType,
{
    is_conflict_free_by_ids(af, members)
        && (0..af.n_arguments())
            .filter(|id| members[*id])
            .all(|id| is_defended_by_ids(af, members, id))
}

/// Checks whether a set of arguments is conflict-free.
///
/// A set is conflict-free iff none of its arguments defeats one of its arguments (including itself).
/// If the candidate contains an argument outside the framework,
/// an [InvalidArgument](crate::aa::SemanticsError::InvalidArgument) error is returned.
///
/// # Example
///
/// ```
/// # use argsem::aa::{AAFramework, Extension};
/// # use argsem::solvers::extension_checkers;
/// let af = AAFramework::new("af", &["a", "b", "c"], &[("a", "b")]).unwrap();
/// let candidate = ["a", "c"]
///     .iter()
///     .map(|l| af.get_argument(l).unwrap())
///     .collect::<Extension<&str>>();
/// assert!(extension_checkers::is_conflict_free(&af, &candidate).unwrap());
/// ```
pub fn is_conflict_free<T>(af: &AAFramework<T>, candidate: &Extension<'_, T>) -> Result<bool>
where
    T: LabelType,
{
    let members = membership(af, candidate)?;
    Ok(is_conflict_free_by_ids(af, &members))
}

/// Checks whether an argument is acceptable with respect to a set of arguments,
/// that is whether each of its defeaters is defeated by an argument of the set.
pub fn is_acceptable_with_respect_to<T>(
    af: &AAFramework<T>,
    arg: &Argument<T>,
    candidate: &Extension<'_, T>,
) -> Result<bool>
where
    T: LabelType,
{
    let arg = framework_argument(af, arg)?;
    let members = membership(af, candidate)?;
    Ok(is_defended_by_ids(af, &members, arg.id()))
}

/// Checks whether a set of arguments is admissible.
///
/// A set is admissible iff it is conflict-free and each of its arguments is acceptable with respect to it.
pub fn is_admissible<T>(af: &AAFramework<T>, candidate: &Extension<'_, T>) -> Result<bool>
where
    T: LabelType,
{
    let members = membership(af, candidate)?;
    Ok(is_admissible_by_ids(af, &members))
}

/// Checks whether a set of arguments is a complete extension.
///
/// A set is complete iff it is admissible and contains all the arguments acceptable with respect to it.
pub fn is_complete<T>(af: &AAFramework<T>, candidate: &Extension<'_, T>) -> Result<bool>
where
    T: LabelType,
{
    let members = membership(af, candidate)?;
    Ok(is_admissible_by_ids(af, &members)
        && (0..af.n_arguments())
            .filter(|id| !members[*id])
            .all(|id| !is_defended_by_ids(af, &members, id)))
}

/// Checks whether a set of arguments is the grounded extension.
pub fn is_grounded_extension<T>(af: &AAFramework<T>, candidate: &Extension<'_, T>) -> Result<bool>
where
    T: LabelType,
{
    let members = membership(af, candidate)?;
    let mut grounded = vec![false; af.n_arguments()];
    for id in utils::grounded_extension_ids(af) {
        grounded[id] = true;
    }
    Ok(members == grounded)
}

/// Checks whether a set of arguments is a stable extension.
///
/// A set is stable iff it is conflict-free and defeats all the arguments it does not contain.
pub fn is_stable_extension<T>(af: &AAFramework<T>, candidate: &Extension<'_, T>) -> Result<bool>
where
    T: LabelType,
{
    let members = membership(af, candidate)?;
    Ok(is_conflict_free_by_ids(af, &members)
        && (0..af.n_arguments()).filter(|id| !members[*id]).all(|id| {
            af.attacker_ids(id)
                .iter()
                .any(|attacker| members[*attacker])
        }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aa::SemanticsError;

    fn ext<'a>(af: &'a AAFramework<&'a str>, labels: &[&'a str]) -> Extension<'a, &'a str> {
        labels.iter().map(|l| af.get_argument(l).unwrap()).collect()
    }

    fn chain() -> AAFramework<&'static str> {
        AAFramework::new("chain", &["a", "b", "c"], &[("a", "b"), ("b", "c")]).unwrap()
    }

    #[test]
    fn test_conflict_free() {
        let af = chain();
        assert!(is_conflict_free(&af, &ext(&af, &[])).unwrap());
        assert!(is_conflict_free(&af, &ext(&af, &["a", "c"])).unwrap());
        assert!(!is_conflict_free(&af, &ext(&af, &["a", "b"])).unwrap());
        let af = AAFramework::new("af", &["a"], &[("a", "a")]).unwrap();
        assert!(!is_conflict_free(&af, &ext(&af, &["a"])).unwrap());
    }

    #[test]
    fn test_acceptable() {
        let af = chain();
        let c = af.get_argument(&"c").unwrap();
        assert!(is_acceptable_with_respect_to(&af, c, &ext(&af, &["a"])).unwrap());
        assert!(!is_acceptable_with_respect_to(&af, c, &ext(&af, &[])).unwrap());
        let a = af.get_argument(&"a").unwrap();
        assert!(is_acceptable_with_respect_to(&af, a, &ext(&af, &[])).unwrap());
    }

    #[test]
    fn test_admissible_and_complete() {
        let af = chain();
        assert!(is_admissible(&af, &ext(&af, &[])).unwrap());
        assert!(is_admissible(&af, &ext(&af, &["a"])).unwrap());
        assert!(!is_admissible(&af, &ext(&af, &["c"])).unwrap());
        assert!(!is_complete(&af, &ext(&af, &["a"])).unwrap());
        assert!(is_complete(&af, &ext(&af, &["a", "c"])).unwrap());
        assert!(!is_complete(&af, &ext(&af, &[])).unwrap());
    }

    #[test]
    fn test_grounded_and_stable() {
        let af = chain();
        assert!(is_grounded_extension(&af, &ext(&af, &["a", "c"])).unwrap());
        assert!(!is_grounded_extension(&af, &ext(&af, &["a"])).unwrap());
        assert!(is_stable_extension(&af, &ext(&af, &["a", "c"])).unwrap());
        let af = AAFramework::new("af", &["a", "b"], &[("a", "b"), ("b", "a")]).unwrap();
        assert!(is_stable_extension(&af, &ext(&af, &["b"])).unwrap());
        assert!(!is_stable_extension(&af, &ext(&af, &[])).unwrap());
        assert!(is_grounded_extension(&af, &ext(&af, &[])).unwrap());
    }

    #[test]
    fn test_invalid_argument() {
        let af = chain();
        let other = AAFramework::new("other", &["a", "z"], &[]).unwrap();
        let candidate = ext(&other, &["a", "z"]);
        let err = is_admissible(&af, &candidate).unwrap_err();
        assert_eq!(
            Some(&SemanticsError::InvalidArgument("z".to_string())),
            err.downcast_ref::<SemanticsError>()
        );
        let z = other.get_argument(&"z").unwrap();
        let err = is_acceptable_with_respect_to(&af, z, &ext(&af, &[])).unwrap_err();
        assert_eq!(
            Some(&SemanticsError::InvalidArgument("z".to_string())),
            err.downcast_ref::<SemanticsError>()
        );
    }

    #[test]
    fn test_foreign_arguments_sharing_labels() {
        let af = chain();
        let other = AAFramework::new("other", &["c", "a"], &[]).unwrap();
        assert!(is_complete(&af, &ext(&other, &["a", "c"])).unwrap());
    }
}
