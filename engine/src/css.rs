use kurbo::Point;
use crate::number::format_number;
use crate::types::WaveConfig;

/// `x% y%, x% y%, ...`, the argument of `polygon()`.
pub fn polygon_points(vertices: &[Point]) -> String {
    vertices
        .iter()
        .map(|p| format!("{}% {}%", format_number(p.x), format_number(p.y)))
        .collect::<Vec<_>>()
        .join(", ")
}

/// The rule body users copy out.
pub fn css_block(config: &WaveConfig, polygon: &str) -> String {
    format!(
        "{{\n  width: {};\n  height: {};\n  clip-path:polygon({});\n  background-color: {};\n  transform: rotate({}deg);\n}}",
        format_number(config.width),
        format_number(config.height),
        polygon,
        config.color,
        format_number(config.rotate),
    )
}

/// Inline style for the live preview element.
pub fn preview_style(config: &WaveConfig, polygon: &str) -> String {
    format!(
        "width: {}px; height: {}px; background: {}; transform: rotate({}deg); clip-path: polygon({});",
        format_number(config.width),
        format_number(config.height),
        config.color,
        format_number(config.rotate),
        polygon,
    )
}
