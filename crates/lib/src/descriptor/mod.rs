//! Resolved module descriptors and the fragments they are folded from.
//!
//! A [`ModuleDescriptor`] is what the toolchain layer consumes: include search
//! paths, modules to link (publicly or privately), modules the host loads at
//! runtime, and the optimization policy for the module's translation units.
//!
//! Descriptors are never edited by hand. The resolver starts from an empty
//! descriptor, folds in the module's baseline [`DescriptorFragment`] and then
//! the fragment of every rule whose condition matched. Folding only ever adds:
//!
//! - include paths are appended in order, skipping entries already present
//! - dependency sets are unioned
//! - an optimization policy of [`OptimizationPolicy::Never`] wins over
//!   [`OptimizationPolicy::Default`]
//!
//! After folding, names declared both public and private are kept public only
//! (see [`ModuleDescriptor::resolve_visibility_conflicts`]).

mod types;

pub use types::*;
