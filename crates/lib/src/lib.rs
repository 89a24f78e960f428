//! modrules-lib: module descriptor resolution
//!
//! This crate computes how one module of a larger application is built for a
//! given build context:
//! - `BuildContext`: what kind of binary is being produced (editor or not,
//!   target type, configuration, platform)
//! - `ModuleTable`: the versioned registry of module baselines and
//!   context-gated rules
//! - `Resolver`: folds a module's baseline and matching rules into a
//!   `ModuleDescriptor`
//! - `ModuleDescriptor`: include paths, linked and dynamically loaded modules,
//!   and the optimization policy handed to the toolchain
//!
//! # Example
//!
//! ```
//! use modrules_lib::{BuildContext, ModuleTable, OptimizationPolicy, Resolver, TargetType};
//!
//! let table = ModuleTable::builtin();
//! let resolver = Resolver::new(&table);
//!
//! let editor = resolver.resolve("AbleCoreSP", &BuildContext::editor()).unwrap();
//! assert_eq!(editor.optimization_policy, OptimizationPolicy::Never);
//! assert!(editor.private_dependencies.contains("UnrealEd"));
//!
//! let game = resolver.resolve("AbleCoreSP", &BuildContext::new(TargetType::Game)).unwrap();
//! assert!(!game.private_dependencies.contains("UnrealEd"));
//! ```

pub mod consts;
pub mod context;
pub mod descriptor;
pub mod platform;
pub mod resolve;
pub mod rules;
pub mod table;
pub mod util;

pub use context::{BuildConfiguration, BuildContext, ContextError, ContextSpec, TargetType};
pub use descriptor::{DescriptorFragment, ModuleDescriptor, OptimizationPolicy};
pub use resolve::{ResolveError, Resolver, resolve};
pub use rules::{Condition, Rule};
pub use table::{ModuleEntry, ModuleTable, TableError, TableSource};
