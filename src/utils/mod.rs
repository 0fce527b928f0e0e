//! Miscellaneous components used in the library.

mod grounded_extension_computer;
pub use grounded_extension_computer::grounded_extension;
pub(crate) use grounded_extension_computer::grounded_extension_ids;

mod labelling;
pub use labelling::Label;
pub use labelling::Labelling;
pub(crate) use labelling::{resolve_ids, PartialLabelling, SearchLabel};
