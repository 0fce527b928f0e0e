use super::{Extension, ExtensionSet, LabelType, SemanticsError};
use anyhow::{anyhow, Result};
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, EnumIter, IntoStaticStr};

/// The semantics handled by the engine.
///
/// The variant names are the short codes used in ICCMA competitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, EnumIter, IntoStaticStr)]
pub enum Semantics {
    /// The conflict-free sets
    CF,
    /// The naive semantics
    NA,
    /// The admissible sets
    AD,
    /// The complete semantics
    CO,
    /// The grounded semantics
    GR,
    /// The preferred semantics
    PR,
    /// The stable semantics
    ST,
    /// The semi-stable semantics
    SST,
    /// The ideal semantics
    ID,
    /// The eager semantics
    EG,
}

impl Semantics {
    /// Returns `true` iff the semantics always admits exactly one extension.
    ///
    /// Acceptance reductions are useless for such semantics,
    /// since the single extension is both the credulous and the skeptical answer.
    pub fn is_single_extension(&self) -> bool {
        matches!(self, Semantics::GR | Semantics::ID | Semantics::EG)
    }

    /// Iterates over the short codes of all the semantics.
    ///
    /// # Example
    ///
    /// ```
    /// # use argsem::aa::Semantics;
    /// assert!(Semantics::iter_short_strs().any(|s| s == "SST"));
    /// ```
    pub fn iter_short_strs() -> impl Iterator<Item = &'static str> {
        Semantics::iter().map(<&'static str>::from)
    }
}

impl TryFrom<&str> for Semantics {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.to_ascii_lowercase().as_str() {
            "cf" | "conflict-free" => Ok(Semantics::CF),
            "na" | "naive" => Ok(Semantics::NA),
            "ad" | "admissible" => Ok(Semantics::AD),
            "co" | "complete" => Ok(Semantics::CO),
            "gr" | "grounded" => Ok(Semantics::GR),
            "pr" | "preferred" => Ok(Semantics::PR),
            "st" | "stable" => Ok(Semantics::ST),
            "sst" | "semi-stable" => Ok(Semantics::SST),
            "id" | "ideal" => Ok(Semantics::ID),
            "eg" | "eager" => Ok(Semantics::EG),
            _ => Err(anyhow!(r#"undefined semantics "{}""#, value)),
        }
    }
}

/// The way a family of extensions is collapsed into a single set of accepted arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, EnumIter)]
pub enum AcceptanceStrategy {
    /// An argument is accepted iff it belongs to at least one extension.
    Credulous,
    /// An argument is accepted iff it belongs to all the extensions.
    Skeptical,
}

impl AcceptanceStrategy {
    /// Reduces a family of extensions to the set of accepted arguments.
    ///
    /// Credulous acceptance returns the union of the extensions, while skeptical acceptance returns their intersection.
    /// Reducing an empty family makes no sense: in this case, an [EmptyFamily](SemanticsError::EmptyFamily) error is returned.
    ///
    /// # Example
    ///
    /// ```
    /// # use argsem::aa::{AAFramework, AcceptanceStrategy};
    /// # use argsem::solvers;
    /// let af = AAFramework::new("af", &["a", "b", "c"], &[("a", "b"), ("b", "a"), ("b", "c")]).unwrap();
    /// let preferred = solvers::preferred(&af).unwrap();
    /// let credulous = AcceptanceStrategy::Credulous.reduce(&preferred).unwrap();
    /// assert_eq!(3, credulous.len());
    /// let skeptical = AcceptanceStrategy::Skeptical.reduce(&preferred).unwrap();
    /// assert!(skeptical.is_empty());
    /// ```
    pub fn reduce<'a, T>(&self, extensions: &ExtensionSet<'a, T>) -> Result<Extension<'a, T>>
    where
        T: LabelType,
    {
        let mut iter = extensions.iter();
        let first = iter.next().ok_or(SemanticsError::EmptyFamily)?.clone();
        Ok(match self {
            AcceptanceStrategy::Credulous => iter.fold(first, |mut acc, ext| {
                acc.extend(ext.iter().copied());
                acc
            }),
            AcceptanceStrategy::Skeptical => iter.fold(first, |acc, ext| {
                acc.intersection(ext).copied().collect()
            }),
        })
    }
}

impl TryFrom<&str> for AcceptanceStrategy {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.to_ascii_lowercase().as_str() {
            "dc" | "credulous" => Ok(AcceptanceStrategy::Credulous),
            "ds" | "skeptical" => Ok(AcceptanceStrategy::Skeptical),
            _ => Err(anyhow!(r#"undefined acceptance strategy "{}""#, value)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aa::AAFramework;
    use std::collections::BTreeSet;

    #[test]
    fn test_read_semantics_ok() {
        assert_eq!(Semantics::ST, Semantics::try_from("ST").unwrap());
        assert_eq!(Semantics::SST, Semantics::try_from("sst").unwrap());
        assert_eq!(Semantics::EG, Semantics::try_from("eager").unwrap());
    }

    #[test]
    fn test_read_semantics_unknown() {
        assert!(Semantics::try_from("foo").is_err());
    }

    #[test]
    fn test_short_strs_roundtrip() {
        for (s, short) in Semantics::iter().zip(Semantics::iter_short_strs()) {
            assert_eq!(s.as_ref(), short);
            assert_eq!(s, Semantics::try_from(short).unwrap());
        }
        assert_eq!(
            vec!["CF", "NA", "AD", "CO", "GR", "PR", "ST", "SST", "ID", "EG"],
            Semantics::iter_short_strs().collect::<Vec<&str>>()
        );
    }

    #[test]
    fn test_single_extension_semantics() {
        let single = Semantics::iter()
            .filter(|s| s.is_single_extension())
            .collect::<Vec<Semantics>>();
        assert_eq!(vec![Semantics::GR, Semantics::ID, Semantics::EG], single);
    }

    #[test]
    fn test_read_strategy() {
        assert_eq!(
            AcceptanceStrategy::Credulous,
            AcceptanceStrategy::try_from("DC").unwrap()
        );
        assert_eq!(
            AcceptanceStrategy::Skeptical,
            AcceptanceStrategy::try_from("skeptical").unwrap()
        );
        assert!(AcceptanceStrategy::try_from("SE").is_err());
    }

    #[test]
    fn test_reduce() {
        let af = AAFramework::new("af", &["a", "b", "c"], &[]).unwrap();
        let a = af.get_argument(&"a").unwrap();
        let b = af.get_argument(&"b").unwrap();
        let c = af.get_argument(&"c").unwrap();
        let mut family = ExtensionSet::new();
        family.insert(vec![a, b].into_iter().collect::<Extension<&str>>());
        family.insert(vec![b, c].into_iter().collect::<Extension<&str>>());
        assert_eq!(
            vec![a, b, c].into_iter().collect::<BTreeSet<_>>(),
            AcceptanceStrategy::Credulous.reduce(&family).unwrap()
        );
        assert_eq!(
            vec![b].into_iter().collect::<BTreeSet<_>>(),
            AcceptanceStrategy::Skeptical.reduce(&family).unwrap()
        );
    }

    #[test]
    fn test_reduce_empty_family() {
        let family: ExtensionSet<&str> = ExtensionSet::new();
        for strategy in AcceptanceStrategy::iter() {
            let err = strategy.reduce(&family).unwrap_err();
            assert_eq!(
                Some(&SemanticsError::EmptyFamily),
                err.downcast_ref::<SemanticsError>()
            );
        }
    }

    #[test]
    fn test_reduce_family_of_empty_extension() {
        let mut family: ExtensionSet<&str> = ExtensionSet::new();
        family.insert(Extension::new());
        assert!(AcceptanceStrategy::Credulous
            .reduce(&family)
            .unwrap()
            .is_empty());
        assert!(AcceptanceStrategy::Skeptical
            .reduce(&family)
            .unwrap()
            .is_empty());
    }
}
