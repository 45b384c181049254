//! Input-source model and size resolution for reduplan.
//!
//! Architecture role:
//! - models a step's input as a `Leaf`/`Composite` source tree
//! - abstracts the filesystem-metadata service behind [`FileSystemMetadata`]
//! - computes all-or-nothing byte totals via [`SourceSizeResolver`]
//!
//! Key modules:
//! - [`input`]
//! - [`fsmeta`]
//! - [`resolver`]

pub mod fsmeta;
pub mod input;
pub mod resolver;

pub use fsmeta::{FileSystemMetadata, LocalFsMetadata};
pub use input::{InputSource, LeafSource, FILES_FORMAT};
pub use resolver::SourceSizeResolver;
