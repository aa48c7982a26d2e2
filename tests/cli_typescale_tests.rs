//! End-to-end tests for `tokensmith typescale`.

mod fixtures;
use fixtures::*;

#[test]
fn test_typescale_default_text() {
    let output = run(&["typescale"]);
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));

    let text = stdout(&output);
    assert!(text.contains("ratio perfect-fourth (1.333)"));
    assert!(text.contains("step-0"));
    assert!(text.contains("16.00px"));
    assert!(text.contains("12.80px"));
    assert!(text.contains("clamp(0.80rem, 0.73rem + 0.33vw, 1.00rem)"));
    assert!(text.contains("step--2"));
    assert!(text.contains("step-5"));
}

#[test]
fn test_typescale_json() {
    let output = run(&["typescale", "--format", "json"]);
    assert_eq!(output.status.code(), Some(0));

    let result = stdout_json(&output);
    assert_eq!(result["base_size"], 16.0);
    assert_eq!(result["min_viewport"], 320.0);
    assert_eq!(result["max_viewport"], 1280.0);

    let steps = result["steps"].as_array().unwrap();
    let indices: Vec<i64> = steps.iter().map(|s| s["step"].as_i64().unwrap()).collect();
    assert_eq!(indices, [-2, -1, 0, 1, 2, 3, 4, 5]);
    assert_eq!(steps[3]["clamp"], "clamp(1.07rem, 0.98rem + 0.44vw, 1.33rem)");
    assert_eq!(steps[3]["max_size_px"], 21.33);
}

#[test]
fn test_typescale_flags() {
    let output = run(&[
        "typescale",
        "--base",
        "18",
        "--ratio",
        "golden-ratio",
        "--steps",
        "-1,0,2",
        "--format",
        "json",
    ]);
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));

    let result = stdout_json(&output);
    assert_eq!(result["base_size"], 18.0);
    assert_eq!(result["ratio"], "golden-ratio");
    assert_eq!(result["ratio_value"], 1.618);

    let labels: Vec<&str> = result["steps"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["label"].as_str().unwrap())
        .collect();
    assert_eq!(labels, ["step--1", "step-0", "step-2"]);
}

#[test]
fn test_typescale_numeric_ratio() {
    let output = run(&["typescale", "--ratio", "1.2", "--steps", "0", "--format", "json"]);
    let result = stdout_json(&output);
    assert_eq!(result["ratio_value"], 1.2);
    assert_eq!(result["steps"].as_array().unwrap().len(), 1);
}

#[test]
fn test_typescale_unknown_ratio() {
    let output = run(&["typescale", "--ratio", "enormous"]);
    assert_ne!(output.status.code(), Some(0));
    assert!(stderr(&output).contains("unknown ratio"), "stderr: {}", stderr(&output));
}

#[test]
fn test_typescale_invalid_viewport() {
    let output = run(&["typescale", "--min-viewport", "1280", "--max-viewport", "320"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Configuration error"));
    assert!(stdout(&output).is_empty());
}

#[test]
fn test_typescale_overflowing_step_fails() {
    for args in [
        ["typescale", "--steps", "3000"],
        ["typescale", "--ratio", "1e300"],
    ] {
        let output = run(&args);
        assert_eq!(output.status.code(), Some(1), "args: {args:?}");
        assert!(stderr(&output).contains("Configuration error"));
        assert!(stdout(&output).is_empty());
    }
}

#[test]
fn test_typescale_css() {
    let output = run(&["typescale", "--format", "css"]);
    assert_eq!(output.status.code(), Some(0));

    let css = stdout(&output);
    assert!(css.contains("--step-0: clamp(0.80rem, 0.73rem + 0.33vw, 1.00rem);"));
    assert!(css.contains("--leading-normal: 1.5;"));
    assert!(css.contains("--font-bold: 700;"));
    assert!(css.contains(".text-step-0 { font-size: var(--step-0); }"));
}

#[test]
fn test_typescale_tailwind() {
    let output = run(&["typescale", "--format", "tailwind"]);
    assert_eq!(output.status.code(), Some(0));

    let module = stdout(&output);
    assert!(module.starts_with("module.exports = {"));
    assert!(module.contains("\"fontSize\""));
    assert!(module.contains("\"0\": \"clamp(0.80rem, 0.73rem + 0.33vw, 1.00rem)\""));
    assert!(module.contains("\"lineHeight\""));
}

#[test]
fn test_typescale_uses_configured_defaults() {
    let env = TestEnv::with_config("[typography]\nbase_size = 20.0\nratio = \"major-third\"\n");

    let result = stdout_json(&env.run(&["typescale", "--format", "json"]));
    assert_eq!(result["base_size"], 20.0);
    assert_eq!(result["ratio"], "major-third");

    let result = stdout_json(&env.run(&["typescale", "--base", "16", "--format", "json"]));
    assert_eq!(result["base_size"], 16.0);
    assert_eq!(result["ratio"], "major-third");
}
