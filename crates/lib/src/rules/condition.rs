use serde::{Deserialize, Serialize};

use crate::context::{BuildConfiguration, BuildContext, TargetType};
use crate::platform::Platform;

/// A predicate over a [`BuildContext`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Condition {
  #[default]
  Always,
  /// `is_editor_build` is set.
  EditorBuild,
  TargetType(TargetType),
  Configuration(BuildConfiguration),
  /// Matches only contexts that carry exactly this platform.
  Platform(Platform),
  /// True when every inner condition holds; an empty list is true.
  All(Vec<Condition>),
  /// True when any inner condition holds; an empty list is false.
  Any(Vec<Condition>),
  Not(Box<Condition>),
}

impl Condition {
  pub fn all(conditions: impl IntoIterator<Item = Condition>) -> Self {
    Self::All(conditions.into_iter().collect())
  }

  pub fn any(conditions: impl IntoIterator<Item = Condition>) -> Self {
    Self::Any(conditions.into_iter().collect())
  }

  pub fn negate(condition: Condition) -> Self {
    Self::Not(Box::new(condition))
  }

  /// True when switching `is_editor_build` on can never make this condition
  /// stop matching, i.e. `editorBuild` only appears under an even number of
  /// negations. Rules gated on such conditions only ever add to editor builds.
  pub fn is_editor_monotone(&self) -> bool {
    self.editor_polarity_holds(false)
  }

  fn editor_polarity_holds(&self, negated: bool) -> bool {
    match self {
      Self::EditorBuild => !negated,
      Self::All(conditions) | Self::Any(conditions) => conditions.iter().all(|c| c.editor_polarity_holds(negated)),
      Self::Not(condition) => condition.editor_polarity_holds(!negated),
      Self::Always | Self::TargetType(_) | Self::Configuration(_) | Self::Platform(_) => true,
    }
  }

  pub fn matches(&self, ctx: &BuildContext) -> bool {
    match self {
      Self::Always => true,
      Self::EditorBuild => ctx.is_editor_build,
      Self::TargetType(target) => ctx.target_type == *target,
      Self::Configuration(configuration) => ctx.configuration == *configuration,
      Self::Platform(platform) => ctx.platform == Some(*platform),
      Self::All(conditions) => conditions.iter().all(|c| c.matches(ctx)),
      Self::Any(conditions) => conditions.iter().any(|c| c.matches(ctx)),
      Self::Not(condition) => !condition.matches(ctx),
    }
  }
}
