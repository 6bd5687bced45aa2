//! Role map layout: metric projection and radial placement.
//!
//! Pipeline per layout request:
//!
//! ```text
//!   Role metrics ─▶ project_metrics ─▶ place_radial ─▶ relax::resolve_overlaps ─▶ RoleMap
//! ```
//!
//! Axes: x runs from people-focused (left) to systems-focused (right),
//! y from strategic (top) to tactical (bottom).

use crate::model::{Metrics, Role, RoleSet};
use crate::render::relax::{resolve_overlaps, RelaxConfig, RelaxReport};
use crate::render::{MapGeometry, Point};

/// Upper bound of every metric score.
pub const METRIC_MAX: f32 = 10.0;

/// Added to the angle of the n-th role so identical metric vectors fan out.
pub const ANGLE_PERTURBATION: f32 = 0.1;

/// Pixels of radius per unit of distance hint.
pub const DISTANCE_SCALE: f32 = 35.0;

/// Normalized position of a role on the two map axes, each in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisRatios {
    pub x: f32,
    pub y: f32,
}

impl AxisRatios {
    pub const NEUTRAL: AxisRatios = AxisRatios { x: 0.5, y: 0.5 };
}

/// Absent or non-finite scores count as 0; the rest are clamped into `[0, 10]`.
fn score(value: Option<f32>) -> f32 {
    value
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
        .clamp(0.0, METRIC_MAX)
}

/// `part / (part + other)`, or 0.5 when both sides are zero.
fn ratio(part: f32, other: f32) -> f32 {
    let total = part + other;
    if total > 0.0 {
        part / total
    } else {
        0.5
    }
}

/// Project a metric vector onto the two map axes.
pub fn project_metrics(metrics: &Metrics) -> AxisRatios {
    let technical = score(metrics.technical);
    let creative = score(metrics.creative);
    let business = score(metrics.business);
    let customer = score(metrics.customer);

    let people = (business + creative) * 0.5;
    let systems = (technical + (METRIC_MAX - business)) * 0.5;

    let strategic = (creative + business) * 0.5;
    let tactical = (technical + customer) * 0.5;

    AxisRatios {
        x: ratio(systems, people),
        y: ratio(tactical, strategic),
    }
}

/// Angle of a role around the canvas center, including the per-index fan-out.
pub fn placement_angle(ratios: AxisRatios, index: usize) -> f32 {
    (ratios.y - 0.5).atan2(ratios.x - 0.5) + index as f32 * ANGLE_PERTURBATION
}

/// Initial coordinate of a role: polar around the canvas center, clamped into bounds.
pub fn place_radial(
    ratios: AxisRatios,
    distance: f32,
    index: usize,
    geometry: &MapGeometry,
) -> Point {
    let angle = placement_angle(ratios, index);
    let radius = distance * DISTANCE_SCALE;
    let center = geometry.center();
    geometry.clamp(Point {
        x: center.x + radius * angle.cos(),
        y: center.y + radius * angle.sin(),
    })
}

/// A role with its computed map position.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedRole {
    pub name: String,
    pub color: String,
    /// Distance hint with the default applied.
    pub distance: f32,
    pub ratios: AxisRatios,
    pub position: Point,
}

/// Project and place every role, without overlap resolution.
pub fn place_roles(roles: &[Role], geometry: &MapGeometry) -> Vec<PlacedRole> {
    roles
        .iter()
        .enumerate()
        .map(|(index, role)| {
            let ratios = project_metrics(&role.metrics);
            let distance = role.distance_or_default();
            PlacedRole {
                name: role.name.clone(),
                color: role.color.clone(),
                distance,
                ratios,
                position: place_radial(ratios, distance, index, geometry),
            }
        })
        .collect()
}

/// Final, overlap-resolved role map.
#[derive(Debug, Clone)]
pub struct RoleMap {
    pub roles: Vec<PlacedRole>,
    pub personalized: bool,
    pub report: RelaxReport,
    pub geometry: MapGeometry,
}

impl RoleMap {
    /// Run the full layout over a role set.
    pub fn build(set: &RoleSet, geometry: MapGeometry, relax: &RelaxConfig) -> Self {
        let initial = place_roles(&set.roles, &geometry);
        let (roles, report) = resolve_overlaps(&initial, relax, &geometry);
        log::debug!(
            "Role map: {} roles, {} passes, {} adjustments, converged={}",
            roles.len(),
            report.passes,
            report.adjustments,
            report.converged
        );
        Self {
            roles,
            personalized: set.personalized,
            report,
            geometry,
        }
    }

    /// Name of the role whose dot lies within `radius` of `point`, nearest first.
    pub fn role_at(&self, point: Point, radius: f32) -> Option<&str> {
        self.roles
            .iter()
            .map(|r| (r, r.position.distance(point)))
            .filter(|(_, d)| *d <= radius)
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(r, _)| r.name.as_str())
    }

    /// Header subtitle for the map view.
    pub fn subtitle(&self, current_role: &str) -> String {
        if self.personalized {
            format!("Personalized roles based on {}", current_role)
        } else {
            String::from("Roles positioned by work style and focus area")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn role(name: &str, t: f32, c: f32, b: f32, cu: f32) -> Role {
        Role {
            name: name.to_string(),
            metrics: Metrics::new(t, c, b, cu),
            distance: None,
            color: String::from("#3b82f6"),
        }
    }

    #[test]
    fn test_projection_balanced() {
        let r = project_metrics(&Metrics::new(5.0, 5.0, 5.0, 5.0));
        assert!((r.x - 0.5).abs() < 1e-6);
        assert!((r.y - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_projection_systems_heavy() {
        // people = (0 + 0) / 2 = 0, systems = (10 + 10) / 2 = 10
        let r = project_metrics(&Metrics::new(10.0, 0.0, 0.0, 0.0));
        assert!((r.x - 1.0).abs() < 1e-6);
        // strategic = 0, tactical = 5
        assert!((r.y - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_projection_degenerate_is_neutral() {
        let r = project_metrics(&Metrics::default());
        // people = 0, systems = 5 → x = 1; strategic = tactical = 0 → neutral y
        assert!((r.x - 1.0).abs() < 1e-6);
        assert!((r.y - 0.5).abs() < 1e-6);
        assert!(r.x.is_finite() && r.y.is_finite());
    }

    #[test]
    fn test_projection_invalid_values() {
        let m = Metrics {
            technical: Some(f32::NAN),
            creative: Some(-3.0),
            business: Some(42.0),
            customer: None,
        };
        let r = project_metrics(&m);
        assert!((0.0..=1.0).contains(&r.x));
        assert!((0.0..=1.0).contains(&r.y));
    }

    #[test]
    fn test_projection_grid_in_unit_square() {
        let steps = [0.0, 2.5, 5.0, 7.5, 10.0];
        for &t in &steps {
            for &c in &steps {
                for &b in &steps {
                    for &cu in &steps {
                        let r = project_metrics(&Metrics::new(t, c, b, cu));
                        assert!((0.0..=1.0).contains(&r.x), "x={} for {:?}", r.x, (t, c, b, cu));
                        assert!((0.0..=1.0).contains(&r.y), "y={} for {:?}", r.y, (t, c, b, cu));
                    }
                }
            }
        }
    }

    #[test]
    fn test_place_radial_center_direction() {
        let g = MapGeometry::default();
        // x ratio > 0.5, y neutral → angle 0 → straight right
        let p = place_radial(AxisRatios { x: 0.8, y: 0.5 }, 5.0, 0, &g);
        assert!((p.x - (600.0 + 175.0)).abs() < 1e-3);
        assert!((p.y - 375.0).abs() < 1e-3);
    }

    #[test]
    fn test_place_radial_clamps() {
        let g = MapGeometry::default();
        let p = place_radial(AxisRatios { x: 0.5, y: 1.0 }, 10.0, 0, &g);
        // straight down, radius 350 → y = 725 clamped to 590
        assert!((p.y - 590.0).abs() < 1e-3);
        assert!(g.contains(p));
    }

    #[test]
    fn test_identical_metrics_fan_out() {
        let ratios = project_metrics(&Metrics::new(6.0, 4.0, 3.0, 7.0));
        let a0 = placement_angle(ratios, 0);
        let a1 = placement_angle(ratios, 1);
        let a2 = placement_angle(ratios, 2);
        assert!((a1 - a0 - 0.1).abs() < 1e-5);
        assert!((a2 - a1 - 0.1).abs() < 1e-5);
    }

    #[test]
    fn test_placement_is_deterministic() {
        let g = MapGeometry::default();
        let roles = vec![
            role("Backend Engineer", 9.0, 3.0, 2.0, 3.0),
            role("Product Manager", 5.0, 6.0, 9.0, 7.0),
            role("UX Designer", 4.0, 9.0, 4.0, 8.0),
        ];
        assert_eq!(place_roles(&roles, &g), place_roles(&roles, &g));
    }

    #[test]
    fn test_single_role_end_to_end() {
        let set = RoleSet {
            roles: vec![Role {
                distance: Some(5.0),
                ..role("A", 5.0, 5.0, 5.0, 5.0)
            }],
            personalized: false,
        };
        let map = RoleMap::build(&set, MapGeometry::default(), &RelaxConfig::default());
        assert_eq!(map.roles.len(), 1);
        assert!(map.geometry.contains(map.roles[0].position));
        assert_eq!(map.report.adjustments, 0);
        assert_eq!(map.report.passes, 1);
        assert!(map.report.converged);
    }

    #[test]
    fn test_full_layout_stays_in_bounds() {
        let set = RoleSet {
            roles: vec![
                role("Backend Engineer", 9.0, 3.0, 2.0, 3.0),
                role("Frontend Engineer", 8.0, 6.0, 3.0, 5.0),
                role("Data Scientist", 8.0, 5.0, 5.0, 3.0),
                role("Product Manager", 5.0, 6.0, 9.0, 7.0),
                role("UX Designer", 4.0, 9.0, 4.0, 8.0),
                role("Solutions Architect", 8.0, 5.0, 7.0, 8.0),
                role("Technical Writer", 5.0, 8.0, 3.0, 6.0),
                role("DevOps Engineer", 9.0, 2.0, 2.0, 4.0),
            ],
            personalized: true,
        };
        let map = RoleMap::build(&set, MapGeometry::default(), &RelaxConfig::default());
        for r in &map.roles {
            assert!(map.geometry.contains(r.position), "{} at {:?}", r.name, r.position);
        }
    }

    #[test]
    fn test_role_at() {
        let set = RoleSet {
            roles: vec![role("Solo", 5.0, 5.0, 5.0, 5.0)],
            personalized: false,
        };
        let map = RoleMap::build(&set, MapGeometry::default(), &RelaxConfig::default());
        let p = map.roles[0].position;
        assert_eq!(map.role_at(Point::new(p.x + 3.0, p.y), 10.0), Some("Solo"));
        assert_eq!(map.role_at(Point::new(p.x + 30.0, p.y), 10.0), None);
    }

    #[test]
    fn test_subtitle() {
        let mut map = RoleMap::build(&RoleSet::default(), MapGeometry::default(), &RelaxConfig::default());
        assert_eq!(
            map.subtitle("Analyst"),
            "Roles positioned by work style and focus area"
        );
        map.personalized = true;
        assert_eq!(map.subtitle("Analyst"), "Personalized roles based on Analyst");
    }
}
