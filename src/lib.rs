//! Argsem is a labelling-based engine computing the extensions of Abstract Argumentation frameworks.
//!
//! Frameworks are defined in the [aa] module, and the semantics are handled by the [solvers] module.
//!
//! # Example
//!
//! ```
//! # use argsem::aa::{AAFramework, AcceptanceStrategy, Semantics};
//! # use argsem::solvers::SolverOptions;
//! let af = AAFramework::new("af", &["a", "b", "c"], &[("a", "b"), ("b", "a"), ("b", "c")]).unwrap();
//! let preferred = Semantics::PR.compute_extensions(&af, &SolverOptions::default()).unwrap();
//! let accepted = AcceptanceStrategy::Credulous.reduce(&preferred).unwrap();
//! assert_eq!(3, accepted.len());
//! ```

#![warn(missing_docs)]

pub mod aa;

pub mod solvers;

pub mod utils;
