//! Context-gated rules.
//!
//! A module's behavior across build contexts is described by a list of
//! [`Rule`]s. Each rule pairs a [`Condition`] over the [`BuildContext`] with a
//! [`DescriptorFragment`] that is folded into the descriptor when the
//! condition holds. Rules only add; nothing a rule contributes can remove what
//! the baseline or an earlier rule established.
//!
//! # Serialization
//!
//! Conditions use serde's externally tagged form:
//!
//! ```json
//! {
//!   "name": "editor-debugging",
//!   "when": { "all": ["editorBuild", { "targetType": "editor" }] },
//!   "adds": { "optimizationPolicy": "never" }
//! }
//! ```

mod condition;

pub use condition::*;

use serde::{Deserialize, Serialize};

use crate::context::BuildContext;
use crate::descriptor::DescriptorFragment;

/// A named, conditional contribution to a module descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
  pub name: String,
  #[serde(default)]
  pub when: Condition,
  #[serde(default)]
  pub adds: DescriptorFragment,
}

impl Rule {
  pub fn new(name: impl Into<String>, when: Condition, adds: DescriptorFragment) -> Self {
    Self {
      name: name.into(),
      when,
      adds,
    }
  }

  /// Whether this rule contributes to a descriptor resolved for `ctx`.
  pub fn applies(&self, ctx: &BuildContext) -> bool {
    self.when.matches(ctx)
  }
}
