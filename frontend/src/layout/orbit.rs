use std::f64::consts::TAU;

use crate::config::OrbitConfig;

/// Viewport readings for the orbit section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionViewport {
    /// Distance of the section's top edge from the top of the viewport.
    pub section_top: f64,
    pub section_height: f64,
    pub viewport_height: f64,
}

/// How far the section has travelled through the viewport: 0 when its top
/// edge touches the viewport bottom, 1 once its bottom edge leaves the top.
pub fn progress(viewport: &SectionViewport) -> f64 {
    let travelled = viewport.viewport_height - viewport.section_top;
    let total = viewport.section_height + viewport.viewport_height;
    if !travelled.is_finite() || !total.is_finite() || total <= 0.0 {
        return 0.0;
    }
    (travelled / total).clamp(0.0, 1.0)
}

/// Bubbles start at `base_radius` and contract to `min_radius` as progress reaches 1.
pub fn radius(progress: f64, config: &OrbitConfig) -> f64 {
    let progress = progress.clamp(0.0, 1.0);
    config.min_radius + (config.base_radius - config.min_radius) * (1.0 - progress)
}

pub fn angle(index: usize, count: usize) -> f64 {
    if count == 0 {
        return 0.0;
    }
    index as f64 / count as f64 * TAU
}

/// Offset of bubble `index` from the orbit center, in pixels.
pub fn bubble_offset(index: usize, count: usize, radius: f64) -> (f64, f64) {
    let theta = angle(index, count);
    (theta.cos() * radius, theta.sin() * radius)
}
