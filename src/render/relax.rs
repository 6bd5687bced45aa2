//! Overlap resolution for placed roles.
//!
//! Pairwise relaxation: every pair closer than `min_distance` is pushed apart
//! along the line joining them, each side by `push_fraction` of the overlap,
//! then re-clamped into the map bounds. Passes repeat until one makes no
//! adjustment or the pass budget runs out.
//!
//! Convergence is best effort. Each push closes 80% of the remaining overlap,
//! so a pair approaches `min_distance` geometrically and can stay a rounding
//! error short of it for the whole budget; dense sets pinned against the
//! bounds may never separate. Exactly coincident pairs have no direction and
//! are skipped.

use crate::render::layout::PlacedRole;
use crate::render::{MapGeometry, Point};

/// Relaxation parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RelaxConfig {
    /// Minimum center-to-center separation in pixels.
    pub min_distance: f32,
    /// Maximum number of full sweeps over all pairs.
    pub max_passes: usize,
    /// Fraction of the overlap each point of a pair moves per adjustment.
    pub push_fraction: f32,
}

impl Default for RelaxConfig {
    fn default() -> Self {
        Self {
            min_distance: 128.0,
            max_passes: 70,
            push_fraction: 0.4,
        }
    }
}

/// Outcome of a relaxation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RelaxReport {
    /// Passes executed, including the final quiet one when converged.
    pub passes: usize,
    /// Total pair adjustments across all passes.
    pub adjustments: usize,
    /// A pass completed without any adjustment.
    pub converged: bool,
}

/// Resolve overlaps between placed roles.
///
/// The input is left untouched; relaxation runs on a private buffer and the
/// result is returned as a new list in the same order.
pub fn resolve_overlaps(
    roles: &[PlacedRole],
    cfg: &RelaxConfig,
    geometry: &MapGeometry,
) -> (Vec<PlacedRole>, RelaxReport) {
    let mut points: Vec<Point> = roles.iter().map(|r| r.position).collect();
    let report = relax_points(&mut points, cfg, geometry);

    if !report.converged && !roles.is_empty() {
        log::warn!(
            "Overlap resolution stopped after {} passes without converging ({} roles)",
            report.passes,
            roles.len()
        );
    }

    let resolved = roles
        .iter()
        .zip(points)
        .map(|(role, position)| PlacedRole {
            position,
            ..role.clone()
        })
        .collect();
    (resolved, report)
}

/// Relax a point buffer in place.
pub fn relax_points(points: &mut [Point], cfg: &RelaxConfig, geometry: &MapGeometry) -> RelaxReport {
    let mut report = RelaxReport::default();
    for _ in 0..cfg.max_passes {
        report.passes += 1;
        let adjusted = relax_pass(points, cfg, geometry);
        report.adjustments += adjusted;
        if adjusted == 0 {
            report.converged = true;
            break;
        }
    }
    report
}

/// One sweep over every unordered pair. Returns the number of adjustments.
fn relax_pass(points: &mut [Point], cfg: &RelaxConfig, geometry: &MapGeometry) -> usize {
    let mut adjusted = 0;
    for i in 0..points.len() {
        for j in (i + 1)..points.len() {
            let dx = points[j].x - points[i].x;
            let dy = points[j].y - points[i].y;
            let distance = (dx * dx + dy * dy).sqrt();

            if distance > 0.0 && distance < cfg.min_distance {
                let overlap = cfg.min_distance - distance;
                let angle = dy.atan2(dx);
                let push_x = angle.cos() * overlap * cfg.push_fraction;
                let push_y = angle.sin() * overlap * cfg.push_fraction;

                points[i] = geometry.clamp(Point {
                    x: points[i].x - push_x,
                    y: points[i].y - push_y,
                });
                points[j] = geometry.clamp(Point {
                    x: points[j].x + push_x,
                    y: points[j].y + push_y,
                });
                adjusted += 1;
            }
        }
    }
    adjusted
}
