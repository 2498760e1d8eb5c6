//! # CI Workflow Tests / CI 工作流测试
//!
//! Structural checks on `.github/workflows/ci.yml`: triggers, the version
//! matrix and the order of steps in every job.
//!
//! 对 `.github/workflows/ci.yml` 的结构检查：触发条件、版本矩阵以及每个作业中步骤的顺序。

use serde_yaml::Value;
use std::fs;
use std::path::Path;

fn workflow() -> Value {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join(".github/workflows/ci.yml");
    let content = fs::read_to_string(&path).expect("Failed to read CI workflow");
    serde_yaml::from_str(&content).expect("CI workflow is not valid YAML")
}

/// Index of the first step whose `uses` or `run` contains `needle`.
fn step_index(steps: &[Value], needle: &str) -> Option<usize> {
    steps.iter().position(|step| {
        ["uses", "run"].iter().any(|key| {
            step.get(key)
                .and_then(Value::as_str)
                .is_some_and(|value| value.contains(needle))
        })
    })
}

#[test]
fn test_triggers_on_master_push_and_pull_requests() {
    let wf = workflow();
    let on = &wf["on"];
    let branches = on["push"]["branches"].as_sequence().expect("push branches");
    assert_eq!(branches, &vec![Value::from("master")]);
    assert!(on.get("pull_request").is_some());
}

#[test]
fn test_matrix_job_does_not_fail_fast() {
    let wf = workflow();
    let strategy = &wf["jobs"]["test"]["strategy"];
    assert_eq!(strategy["fail-fast"].as_bool(), Some(false));

    let versions = strategy["matrix"]["rust"].as_sequence().expect("rust matrix");
    assert!(versions.len() > 1);
    assert!(versions.contains(&Value::from("stable")));
}

#[test]
fn test_container_job_pins_a_fixed_toolchain() {
    let wf = workflow();
    let container = wf["jobs"]["msrv-container"]["container"]
        .as_str()
        .expect("container image");
    assert!(container.starts_with("rust:1."), "unexpected image {container}");
}

#[test]
fn test_every_job_checks_out_then_builds_then_tests() {
    let wf = workflow();
    let jobs = wf["jobs"].as_mapping().expect("jobs mapping");
    assert_eq!(jobs.len(), 2);

    for (name, job) in jobs {
        let steps = job["steps"].as_sequence().expect("steps");
        let checkout = step_index(steps, "actions/checkout").expect("checkout step");
        let build = step_index(steps, "cargo build").expect("build step");
        let test = step_index(steps, "cargo test").expect("test step");
        assert!(
            checkout < build && build < test,
            "job {name:?} runs steps out of order"
        );
    }
}
