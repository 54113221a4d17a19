use kurbo::Point;
use crate::css::{css_block, polygon_points};
use crate::error::WaveError;
use crate::number::round_to_hundredths;
use crate::types::{PolygonResult, WaveConfig};

/// Horizontal samples run from 0% to this value inclusive.
pub const LAST_SAMPLE: u32 = 100;

/// Top-right and top-left corners that close the polygon along the top edge.
pub const TOP_CORNERS: [Point; 2] = [Point::new(100.0, 0.0), Point::new(0.0, 0.0)];

/// Samples `offset + amplitude * cos(i / units)` at every whole percent of
/// the width and expresses it as a percent of the height.
///
/// Nothing is validated or clamped: a zero height or frequency yields NaN or
/// infinite coordinates, and offsets past the container edges yield
/// percentages outside 0..=100.
pub fn sample_vertices(config: &WaveConfig) -> Vec<Point> {
    let units = (config.frequency * config.width) / 100.0;

    let mut vertices = Vec::with_capacity(TOP_CORNERS.len() + LAST_SAMPLE as usize + 1);
    vertices.extend_from_slice(&TOP_CORNERS);
    for i in 0..=LAST_SAMPLE {
        let x = i as f64;
        let value = config.offset + config.amplitude * (x / units).cos();
        vertices.push(Point::new(x, round_to_hundredths((value / config.height) * 100.0)));
    }
    vertices
}

pub fn sample_wave(config: &WaveConfig) -> PolygonResult {
    let vertices = sample_vertices(config);
    let polygon = polygon_points(&vertices);
    let css_block = css_block(config, &polygon);
    PolygonResult { vertices, polygon, css_block }
}

/// Like [`sample_wave`], but refuses configurations that [`WaveConfig::validate`] rejects.
pub fn try_sample_wave(config: &WaveConfig) -> Result<PolygonResult, WaveError> {
    config.validate()?;
    Ok(sample_wave(config))
}
