use jsonschema::validator_for;

fn compile_schema(name: &str) -> jsonschema::Validator {
  let manifest_dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"));
  let path = manifest_dir.join("tests").join("schemas").join(name);
  let data = std::fs::read(&path).expect("schema file");
  let schema: serde_json::Value = serde_json::from_slice(&data).expect("valid schema JSON");
  validator_for(&schema).expect("compile schema")
}

fn report_for(fixture: &str, extra: &[&str]) -> serde_json::Value {
  let input = test_support::fixture_path(fixture);
  let out = test_support::cmd_bin("flow-transition-report")
    .args(["--input", &input, "--tz", "utc"])
    .args(extra)
    .output()
    .unwrap();
  assert!(out.status.success(), "cli run failed: {}", String::from_utf8_lossy(&out.stderr));
  serde_json::from_slice(&out.stdout).unwrap()
}

#[test]
fn native_report_conforms_to_schema() {
  let compiled = compile_schema("flow-transition-report.report.schema.json");
  let v = report_for("board_native.json", &["--show-name"]);
  compiled.validate(&v).expect("schema validation failed for native report");
}

#[test]
fn jira_report_conforms_to_schema() {
  let compiled = compile_schema("flow-transition-report.report.schema.json");
  let v = report_for("board_jira.json", &["--input-format", "jira", "--boundary", "max-column"]);
  compiled.validate(&v).expect("schema validation failed for jira report");
  assert_eq!(v["issues"][0]["link"], "https://jira.example.com:8443/browse/OPS-12");
}
