//! The module table shipped with the crate.

use crate::consts::TABLE_VERSION;
use crate::context::TargetType;
use crate::descriptor::{DescriptorFragment, OptimizationPolicy};
use crate::rules::{Condition, Rule};

use super::{ModuleEntry, ModuleTable};

/// Name of the ability-system runtime module.
pub const ABLE_CORE_SP: &str = "AbleCoreSP";

/// Development UI and tooling modules linked only into editor builds:
/// editor framework, UI framework and its core primitives, sequence
/// recording, tag editing.
pub const EDITOR_SUPPORT_MODULES: [&str; 5] = [
  "UnrealEd",
  "Slate",
  "SlateCore",
  "SequenceRecorder",
  "GameplayTagsEditor",
];

/// Rule name of the optimization gate.
pub const EDITOR_DEBUGGING_RULE: &str = "editor-debugging";

/// Rule name of the editor tooling gate.
pub const EDITOR_SUPPORT_RULE: &str = "editor-support";

/// Editor tooling code is compiled unoptimized so it stays debuggable.
pub fn editor_debugging_rule() -> Rule {
  Rule::new(
    EDITOR_DEBUGGING_RULE,
    Condition::all([Condition::EditorBuild, Condition::TargetType(TargetType::Editor)]),
    DescriptorFragment::new().with_optimization_policy(OptimizationPolicy::Never),
  )
}

/// Editor support modules, gated on `is_editor_build` alone.
pub fn editor_support_rule() -> Rule {
  Rule::new(
    EDITOR_SUPPORT_RULE,
    Condition::EditorBuild,
    DescriptorFragment::new().with_private_dependencies(EDITOR_SUPPORT_MODULES),
  )
}

pub fn able_core_sp() -> ModuleEntry {
  let baseline = DescriptorFragment::new()
    .with_public_include_paths(["Classes", "Public"])
    .with_private_include_paths(["Private"])
    .with_public_dependencies([
      "AIModule",
      "Core",
      "CoreUObject",
      "Engine",
      "EnhancedInput",
      "GameplayTags",
      "GameplayTasks",
      "InputCore",
      "NavigationSystem",
    ])
    .with_private_dependencies(["UnLua", "MoeGameCore"]);

  ModuleEntry::new(format!("Source/{ABLE_CORE_SP}"), baseline)
    .with_rule(editor_debugging_rule())
    .with_rule(editor_support_rule())
}

pub fn builtin_table() -> ModuleTable {
  ModuleTable {
    version: TABLE_VERSION,
    editor_only_modules: EDITOR_SUPPORT_MODULES.iter().map(|m| m.to_string()).collect(),
    modules: Default::default(),
  }
  .with_module(ABLE_CORE_SP, able_core_sp())
}
