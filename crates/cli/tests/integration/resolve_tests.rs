//! Tests for `modrules resolve`.

use predicates::prelude::*;

use super::common::{TestEnv, fixture_path, strings};

const EDITOR_SUPPORT: [&str; 5] = [
  "UnrealEd",
  "Slate",
  "SlateCore",
  "SequenceRecorder",
  "GameplayTagsEditor",
];

#[test]
fn game_build_keeps_default_optimization_and_no_editor_modules() {
  let env = TestEnv::new();
  let out = env.json(["resolve", "AbleCoreSP"]);

  let desc = &out[0];
  assert_eq!(desc["moduleName"], "AbleCoreSP");
  assert_eq!(desc["optimizationPolicy"], "default");
  let private = strings(&desc["privateDependencies"]);
  assert_eq!(private, vec!["MoeGameCore", "UnLua"]);
  for module in EDITOR_SUPPORT {
    assert!(!desc.to_string().contains(module), "{} leaked", module);
  }
}

#[test]
fn editor_build_disables_optimization() {
  let env = TestEnv::new();
  let out = env.json(["resolve", "AbleCoreSP", "--editor", "--target", "editor"]);

  let desc = &out[0];
  assert_eq!(desc["optimizationPolicy"], "never");
  let private = strings(&desc["privateDependencies"]);
  for module in EDITOR_SUPPORT {
    assert!(private.contains(&module.to_string()), "{} missing", module);
  }
}

#[test]
fn editor_server_build_gets_tooling_without_disabling_optimization() {
  let env = TestEnv::new();
  let out = env.json(["resolve", "AbleCoreSP", "--editor", "--target", "server"]);

  let desc = &out[0];
  assert_eq!(desc["optimizationPolicy"], "default");
  assert!(strings(&desc["privateDependencies"]).contains(&"SequenceRecorder".to_string()));
}

#[test]
fn editor_target_without_editor_build_is_optimized() {
  let env = TestEnv::new();
  let out = env.json(["resolve", "AbleCoreSP", "--target", "editor"]);
  assert_eq!(out[0]["optimizationPolicy"], "default");
  assert!(!strings(&out[0]["privateDependencies"]).contains(&"UnrealEd".to_string()));
}

#[test]
fn unknown_module_fails() {
  let env = TestEnv::new();
  env
    .cmd()
    .args(["resolve", "UnknownModule"])
    .assert()
    .failure()
    .stderr(predicate::str::contains("unknown module 'UnknownModule'"));
}

#[test]
fn unknown_target_type_fails() {
  let env = TestEnv::new();
  env
    .cmd()
    .args(["resolve", "AbleCoreSP", "--target", "toaster"])
    .assert()
    .failure()
    .stderr(predicate::str::contains(
      "Failed to resolve module descriptor: invalid build context: unknown target type 'toaster'",
    ));
}

#[test]
fn bad_platform_fails() {
  let env = TestEnv::new();
  env
    .cmd()
    .args(["resolve", "AbleCoreSP", "--platform", "x86_64"])
    .assert()
    .failure()
    .stderr(predicate::str::contains("malformed platform triple"));
}

#[test]
fn resolution_is_reproducible() {
  let env = TestEnv::new();
  let args = ["resolve", "AbleCoreSP", "--editor", "--target", "editor"];
  assert_eq!(env.json(args), env.json(args));
}

#[test]
fn context_file_is_validated_and_recorded() {
  let env = TestEnv::new();
  let context = fixture_path("editor_context.json");
  let out = env.json(["resolve", "AbleCoreSP", "--context", context.to_str().unwrap()]);

  let desc = &out[0];
  assert_eq!(desc["optimizationPolicy"], "never");
  assert_eq!(desc["configuration"], "debugGame");
  assert_eq!(desc["platform"], "x86_64-windows");
}

#[test]
fn invalid_context_file_fails() {
  let env = TestEnv::new();
  let context = fixture_path("bad_context.json");
  env
    .cmd()
    .args(["resolve", "AbleCoreSP", "--context", context.to_str().unwrap()])
    .assert()
    .failure()
    .stderr(predicate::str::contains("invalid build context: unknown target type 'toaster'"));
}

#[test]
fn context_file_conflicts_with_flags() {
  let env = TestEnv::new();
  let context = fixture_path("editor_context.json");
  env
    .cmd()
    .args(["resolve", "AbleCoreSP", "--editor", "--context", context.to_str().unwrap()])
    .assert()
    .failure();
}

#[test]
fn custom_table_resolves_conflicts_publicly() {
  let env = TestEnv::new();
  let table = fixture_path("custom_table.json");
  let out = env.json(["resolve", "NetTools", "--table", table.to_str().unwrap()]);

  let desc = &out[0];
  assert_eq!(strings(&desc["publicDependencies"]), vec!["Core", "Sockets"]);
  assert_eq!(strings(&desc["privateDependencies"]), vec!["Json"]);
  assert_eq!(strings(&desc["dynamicallyLoadedModules"]), vec!["OnlineSubsystem"]);
  assert_eq!(
    strings(&desc["publicIncludePaths"]),
    vec!["Plugins/NetTools/Source/NetTools/Public"]
  );
}

#[test]
fn custom_table_rules_follow_context() {
  let env = TestEnv::new();
  let table = fixture_path("custom_table.json");
  let table = table.to_str().unwrap();

  let editor = env.json(["resolve", "NetTools", "--editor", "--table", table]);
  let private = strings(&editor[0]["privateDependencies"]);
  assert!(private.contains(&"PropertyEditor".to_string()));
  assert!(!private.contains(&"Telemetry".to_string()));

  let shipping = env.json(["resolve", "NetTools", "-c", "shipping", "--table", table]);
  assert!(strings(&shipping[0]["privateDependencies"]).contains(&"Telemetry".to_string()));

  let program = env.json(["resolve", "NetTools", "-c", "shipping", "-t", "program", "--table", table]);
  assert!(!strings(&program[0]["privateDependencies"]).contains(&"Telemetry".to_string()));
}

#[test]
fn resolves_several_modules_in_order() {
  let env = TestEnv::new();
  let table = fixture_path("custom_table.json");
  let out = env.json(["resolve", "Standalone", "NetTools", "--table", table.to_str().unwrap()]);

  let names: Vec<_> = out
    .as_array()
    .unwrap()
    .iter()
    .map(|d| d["moduleName"].as_str().unwrap().to_string())
    .collect();
  assert_eq!(names, vec!["Standalone", "NetTools"]);
  assert_eq!(out[0]["fingerprint"].as_str().unwrap().len(), 20);
}

#[test]
fn text_output_lists_sections() {
  let env = TestEnv::new();
  env
    .cmd()
    .args(["resolve", "AbleCoreSP", "--editor", "--target", "editor"])
    .assert()
    .success()
    .stdout(predicate::str::contains("AbleCoreSP (editor, development, editor build)"))
    .stdout(predicate::str::contains("Optimization: never"))
    .stdout(predicate::str::contains("Source/AbleCoreSP/Private"))
    .stdout(predicate::str::contains("GameplayTagsEditor"));
}
