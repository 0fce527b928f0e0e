//! This module contains the main material used to define Abstract Argumentation.

mod aa_framework;
pub use aa_framework::AAFramework;
pub use aa_framework::AAFrameworkBuilder;
pub use aa_framework::Defeat;

mod arguments;
pub use arguments::Argument;
pub use arguments::ArgumentSet;
pub use arguments::Extension;
pub use arguments::ExtensionSet;
pub use arguments::LabelType;

mod errors;
pub use errors::SemanticsError;

mod problem;
pub use problem::AcceptanceStrategy;
pub use problem::Semantics;
