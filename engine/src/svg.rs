use wasm_bindgen::prelude::*;
use kurbo::{Affine, BezPath};
use crate::color::Color;
use crate::generator::WaveGenerator;
use crate::number::format_number;
use crate::types::{PolygonResult, WaveConfig};

/// Maps the percent vertices onto the container in pixels.
pub fn clip_path(config: &WaveConfig, result: &PolygonResult) -> BezPath {
    let mut path = BezPath::new();
    for (i, p) in result.vertices.iter().enumerate() {
        if i == 0 { path.move_to(*p); } else { path.line_to(*p); }
    }
    path.close_path();
    path.apply_affine(Affine::scale_non_uniform(config.width / 100.0, config.height / 100.0));
    path
}

/// Standalone SVG equivalent of the preview element.
pub fn render_svg(config: &WaveConfig, result: &PolygonResult) -> String {
    let w = format_number(config.width);
    let h = format_number(config.height);
    let fill = match Color::parse(&config.color) {
        Ok(c) => format!("fill=\"{}\" fill-opacity=\"{}\"", c.to_rgb_hex(), format_number(c.opacity())),
        Err(_) => format!("fill=\"{}\"", escape_attr(&config.color)),
    };
    format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\"><defs><clipPath id=\"wave-clip\"><path d=\"{d}\" /></clipPath></defs><g transform=\"rotate({r} {cx} {cy})\"><rect width=\"{w}\" height=\"{h}\" {fill} clip-path=\"url(#wave-clip)\" /></g></svg>",
        w = w,
        h = h,
        d = clip_path(config, result).to_svg(),
        r = format_number(config.rotate),
        cx = format_number(config.width / 2.0),
        cy = format_number(config.height / 2.0),
        fill = fill,
    )
}

fn escape_attr(text: &str) -> String {
    text.replace('&', "&amp;").replace('"', "&quot;").replace('<', "&lt;")
}

#[wasm_bindgen]
impl WaveGenerator {
    pub fn export_svg(&self) -> String {
        render_svg(&self.config, &self.result)
    }
}
