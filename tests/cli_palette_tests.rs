//! End-to-end tests for `tokensmith palette`.

mod fixtures;
use fixtures::*;

#[test]
fn test_palette_default_text() {
    let output = run(&["palette"]);
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));

    let text = stdout(&output);
    assert!(text.contains("Base hue: 220°"));
    for name in ["primary", "secondary", "accent", "neutral"] {
        assert!(text.contains(&format!("{name} (11 shades")), "missing {name}: {text}");
    }
    assert!(text.contains("#f0f5ff"));
    assert!(text.contains("#255ed0"));
}

#[test]
fn test_palette_json() {
    let output = run(&["palette", "220", "--format", "json"]);
    assert_eq!(output.status.code(), Some(0));

    let result = stdout_json(&output);
    assert_eq!(result["base_hue"], 220.0);

    let palettes = result["palettes"].as_array().unwrap();
    let names: Vec<&str> = palettes.iter().map(|p| p["name"].as_str().unwrap()).collect();
    assert_eq!(names, ["primary", "secondary", "accent", "neutral"]);
    assert_eq!(palettes[1]["hue"], 40.0);
    assert_eq!(palettes[2]["hue"], 265.0);

    let shades = palettes[0]["shades"].as_array().unwrap();
    let keys: Vec<u64> = shades.iter().map(|s| s["shade"].as_u64().unwrap()).collect();
    assert_eq!(keys, [50, 100, 200, 300, 400, 500, 600, 700, 800, 900, 950]);
    assert_eq!(shades[5]["hex"], "#255ed0");
    assert_eq!(shades[5]["rgb"], "rgb(37, 94, 208)");
}

#[test]
fn test_palette_json_contrast_ordering() {
    let output = run(&["palette", "95", "--format", "json"]);
    let result = stdout_json(&output);

    for palette in result["palettes"].as_array().unwrap() {
        let shades = palette["shades"].as_array().unwrap();
        for pair in shades.windows(2) {
            let (light, dark) = (&pair[0], &pair[1]);
            assert!(
                dark["contrast_on_white"].as_f64().unwrap()
                    >= light["contrast_on_white"].as_f64().unwrap()
            );
            assert!(
                dark["contrast_on_black"].as_f64().unwrap()
                    <= light["contrast_on_black"].as_f64().unwrap()
            );
        }
    }
}

#[test]
fn test_palette_hue_wraps() {
    let wrapped = stdout_json(&run(&["palette", "580", "--format", "json"]));
    let plain = stdout_json(&run(&["palette", "220", "--format", "json"]));
    assert_eq!(wrapped, plain);

    let negative = stdout_json(&run(&["palette", "-140", "--format", "json"]));
    assert_eq!(negative, plain);
}

#[test]
fn test_palette_single_name() {
    let output = run(&["palette", "220", "--name", "brand", "--format", "json"]);
    let result = stdout_json(&output);

    let palettes = result["palettes"].as_array().unwrap();
    assert_eq!(palettes.len(), 1);
    assert_eq!(palettes[0]["name"], "brand");
    assert_eq!(palettes[0]["kind"], "chromatic");

    let output = run(&["palette", "220", "--name", "Neutral", "--format", "json"]);
    assert_eq!(stdout_json(&output)["palettes"][0]["kind"], "neutral");
}

#[test]
fn test_palette_empty_name_rejected() {
    let output = run(&["palette", "--name", " "]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_palette_css() {
    let output = run(&["palette", "220", "--format", "css"]);
    assert_eq!(output.status.code(), Some(0));

    let css = stdout(&output);
    assert!(css.starts_with(":root {"));
    assert!(css.contains("/* Primary Palette */"));
    assert!(css.contains("--color-primary-50: #f0f5ff;"));
    assert!(css.contains("--color-neutral-950:"));
}

#[test]
fn test_palette_tailwind() {
    let output = run(&["palette", "220", "--format", "tailwind"]);
    assert_eq!(output.status.code(), Some(0));

    let module = stdout(&output);
    assert!(module.starts_with("module.exports = {"));
    assert!(module.contains("\"colors\""));
    assert!(module.contains("\"500\": \"#255ed0\""));
}

#[test]
fn test_palette_uses_configured_hue() {
    let env = TestEnv::with_config("[palette]\nbase_hue = 10.0\n");
    let result = stdout_json(&env.run(&["palette", "--format", "json"]));
    assert_eq!(result["base_hue"], 10.0);

    let result = stdout_json(&env.run(&["palette", "300", "--format", "json"]));
    assert_eq!(result["base_hue"], 300.0);
}

#[test]
fn test_palette_invalid_format() {
    let output = run(&["palette", "--format", "yaml"]);
    assert_ne!(output.status.code(), Some(0));
}
