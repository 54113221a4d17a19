// End-to-end checks of the exported CSS for typical form states

use wave_engine::number::round_to_hundredths;
use wave_engine::{sample_wave, try_sample_wave, WaveConfig, WaveError, WaveGenerator};

#[test]
fn test_default_css_block() {
    let result = sample_wave(&WaveConfig::default());
    let lines: Vec<&str> = result.css_block.lines().collect();

    assert_eq!(lines.len(), 7);
    assert_eq!(lines[0], "{");
    assert_eq!(lines[1], "  width: 500;");
    assert_eq!(lines[2], "  height: 200;");
    assert!(lines[3].starts_with("  clip-path:polygon(100% 0%, 0% 0%, 0% 40%, 1% "));
    assert!(lines[3].ends_with(", 100% 31.12%);"));
    assert_eq!(lines[4], "  background-color: #2386be;");
    assert_eq!(lines[5], "  transform: rotate(180deg);");
    assert_eq!(lines[6], "}");
}

#[test]
fn test_polygon_has_103_points() {
    let config = WaveConfig { width: 1280.0, height: 90.0, frequency: 4.0, ..WaveConfig::default() };
    let result = sample_wave(&config);
    assert_eq!(result.vertices.len(), 103);
    assert_eq!(result.polygon.split(", ").count(), 103);
}

#[test]
fn test_every_sample_matches_the_formula() {
    let config = WaveConfig { width: 640.0, height: 320.0, offset: 120.0, amplitude: 75.0, frequency: 2.0, ..WaveConfig::default() };
    let units = (config.frequency * config.width) / 100.0;
    let result = sample_wave(&config);

    for (i, p) in result.vertices[2..].iter().enumerate() {
        let v = config.offset + config.amplitude * (i as f64 / units).cos();
        assert_eq!(p.x, i as f64);
        assert_eq!(p.y, round_to_hundredths((v / config.height) * 100.0));
    }
}

#[test]
fn test_strict_and_permissive_policies() {
    let config = WaveConfig { height: 0.0, ..WaveConfig::default() };
    assert!(sample_wave(&config).polygon.contains("Infinity"));
    assert!(matches!(try_sample_wave(&config), Err(WaveError::InvalidConfiguration { field: "height", .. })));
}

#[test]
fn test_generator_follows_form_edits() {
    let mut generator = WaveGenerator::default();
    for (field, text) in [("width", "300"), ("height", "100"), ("offset", "50"), ("amplitude", "0")] {
        generator.set_field(field, text).expect("field update should succeed");
    }
    generator.set_color("#00000080").expect("color update should succeed");

    let css = generator.css_text();
    assert!(css.contains("width: 300;"));
    assert!(css.contains(", 100% 50%);"));
    assert!(css.contains("background-color: #00000080;"));
    assert!(generator.export_svg().contains("fill-opacity=\"0.5019607843137255\""));
}
