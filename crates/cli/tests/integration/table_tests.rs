//! Tests for module table discovery, `modrules init` and `modrules modules`.

use predicates::prelude::*;

use super::common::{TestEnv, fixture_path, strings};

#[test]
fn init_writes_default_table() {
  let env = TestEnv::new();

  env
    .cmd()
    .arg("init")
    .assert()
    .success()
    .stdout(predicate::str::contains("Wrote module table"));

  assert!(env.default_table().exists());
}

#[test]
fn init_refuses_to_overwrite() {
  let env = TestEnv::new();
  env.cmd().arg("init").assert().success();

  env
    .cmd()
    .arg("init")
    .assert()
    .failure()
    .stderr(predicate::str::contains("already exists"));

  env.cmd().args(["init", "--force"]).assert().success();
}

#[test]
fn default_table_is_discovered() {
  let env = TestEnv::new();
  let path = env.default_table();
  std::fs::create_dir_all(path.parent().unwrap()).unwrap();
  std::fs::copy(fixture_path("custom_table.json"), &path).unwrap();

  let out = env.json(["modules"]);
  let names: Vec<_> = out["modules"]
    .as_array()
    .unwrap()
    .iter()
    .map(|m| m["name"].as_str().unwrap().to_string())
    .collect();
  assert_eq!(names, vec!["NetTools", "Standalone"]);
  assert_eq!(out["source"], path.to_str().unwrap());
}

#[test]
fn env_var_selects_table() {
  let env = TestEnv::new();
  let out = env
    .cmd()
    .args(["-o", "json", "modules"])
    .env("MODRULES_TABLE", fixture_path("custom_table.json"))
    .output()
    .unwrap();
  assert!(out.status.success());

  let json: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
  let rules = strings(&json["modules"][0]["rules"]);
  assert_eq!(rules, vec!["editor-panels", "shipping-telemetry"]);
}

#[test]
fn initialized_table_resolves_like_builtin() {
  let env = TestEnv::new();
  let path = env.path("exported.json");
  env.cmd().arg("init").arg(&path).assert().success();

  let from_file = env.json(["resolve", "AbleCoreSP", "--editor", "--table", path.to_str().unwrap()]);
  let builtin = env.json(["resolve", "AbleCoreSP", "--editor"]);
  assert_eq!(from_file, builtin);
}

#[test]
fn unsupported_table_version_fails() {
  let env = TestEnv::new();
  let path = env.path("future.json");
  std::fs::write(&path, r#"{ "version": 2, "modules": {} }"#).unwrap();

  env
    .cmd()
    .args(["modules", "--table", path.to_str().unwrap()])
    .assert()
    .failure()
    .stderr(predicate::str::contains("unsupported module table version 2"));
}

#[test]
fn runtime_only_rule_is_rejected() {
  let env = TestEnv::new();
  let path = env.path("runtime_only.json");
  std::fs::write(
    &path,
    r#"{
      "version": 1,
      "modules": {
        "Sample": {
          "rules": [{ "name": "runtime-only", "when": { "not": "editorBuild" }, "adds": { "privateDependencies": ["RuntimeOnly"] } }]
        }
      }
    }"#,
  )
  .unwrap();

  env
    .cmd()
    .args(["resolve", "Sample", "--table", path.to_str().unwrap()])
    .assert()
    .failure()
    .stderr(predicate::str::contains("rule 'runtime-only' of module 'Sample'"));
}

#[test]
fn missing_table_file_fails() {
  let env = TestEnv::new();
  env
    .cmd()
    .args(["resolve", "AbleCoreSP", "--table", "/nonexistent/modules.json"])
    .assert()
    .failure()
    .stderr(predicate::str::contains("Failed to load module table"));
}

#[test]
fn modules_text_output_counts_rules() {
  let env = TestEnv::new();
  env
    .cmd()
    .arg("modules")
    .assert()
    .success()
    .stdout(predicate::str::contains("AbleCoreSP (2 rules)"))
    .stdout(predicate::str::contains("built-in"));
}

#[test]
fn info_reports_table_fingerprint() {
  let env = TestEnv::new();
  let json = env.json(["info"]);
  assert_eq!(json["table"]["source"], "built-in");
  assert_eq!(json["table"]["version"], 1);
  assert_eq!(json["table"]["modules"], 1);
  assert_eq!(json["table"]["fingerprint"].as_str().unwrap().len(), 20);
}
