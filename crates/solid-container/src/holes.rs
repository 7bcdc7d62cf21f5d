//! Hole, support, and brace geometry derivation.
//!
//! Three optional cutouts can be carved out of a resolved container: a base
//! hole in the floor (given directly or derived from symmetric support
//! legs), and window-style cutouts through the left/right and front/back
//! walls limited by brace reservations.
//!
//! Cutouts are candidates, not guarantees: a candidate whose brace
//! parameters are absent or whose computed dimensions are not all strictly
//! positive and finite is simply omitted. Only an oversized support length
//! is an error, because it asks for a negative amount of floor.

use nalgebra::Vector3;
use serde::Serialize;
use tracing::debug;

use crate::axis::{Axis, ResolvedAxis};
use crate::config::HoleConfig;
use crate::error::{ConfigError, ConfigResult};
use crate::height::ResolvedHeight;

/// A candidate subtractive box: a size and the offset of its minimum corner
/// from the container's minimum corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Cutout {
    pub size: Vector3<f64>,
    pub offset: Vector3<f64>,
}

impl Cutout {
    /// Whether this cutout can participate in the final solid.
    ///
    /// The filter predicate for the operation graph: every dimension must be
    /// strictly positive and finite. Zero, negative, or non-finite means
    /// "omit this cutout", never an error.
    pub fn is_realizable(&self) -> bool {
        self.size.iter().all(|d| d.is_finite() && *d > 0.0)
    }

    fn realizable(self) -> Option<Self> {
        self.is_realizable().then_some(self)
    }
}

/// The derived cutouts of a container; `None` means the cutout is omitted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HoleGeometry {
    /// Hole through the floor, centered in the outer footprint.
    pub base_hole: Option<Cutout>,

    /// Window through both the left and right walls (full outer width).
    pub left_right: Option<Cutout>,

    /// Window through both the front and back walls (full outer depth).
    pub front_back: Option<Cutout>,
}

/// Derive all optional cutout geometry from a resolved container.
pub fn compute_holes(
    width: &ResolvedAxis,
    depth: &ResolvedAxis,
    height: &ResolvedHeight,
    holes: &HoleConfig,
) -> ConfigResult<HoleGeometry> {
    let hole_width = base_hole_size(Axis::X, width, holes.support_length_x, holes.base_hole_width)?;
    let hole_depth = base_hole_size(Axis::Y, depth, holes.support_length_y, holes.base_hole_depth)?;

    let base_hole = Cutout {
        size: Vector3::new(hole_width, hole_depth, height.base_thickness),
        offset: Vector3::new(
            (width.outer - hole_width) / 2.0,
            (depth.outer - hole_depth) / 2.0,
            0.0,
        ),
    }
    .realizable();

    let left_right = wall_cutout(holes.brace_length_y, holes.brace_height).and_then(
        |(brace_length, brace_height)| {
            Cutout {
                size: Vector3::new(
                    width.outer,
                    depth.inner - 2.0 * brace_length,
                    height.outer_height - brace_height - height.base_thickness,
                ),
                offset: Vector3::new(
                    0.0,
                    depth.wall_thickness + brace_length,
                    height.base_thickness + brace_height,
                ),
            }
            .realizable()
        },
    );

    let front_back = wall_cutout(holes.brace_length_x, holes.brace_height).and_then(
        |(brace_length, brace_height)| {
            Cutout {
                size: Vector3::new(
                    width.inner - 2.0 * brace_length,
                    depth.outer,
                    height.outer_height - brace_height - height.base_thickness,
                ),
                offset: Vector3::new(
                    width.wall_thickness + brace_length,
                    0.0,
                    height.base_thickness + brace_height,
                ),
            }
            .realizable()
        },
    );

    let geometry = HoleGeometry {
        base_hole,
        left_right,
        front_back,
    };
    debug!(
        base_hole = geometry.base_hole.is_some(),
        left_right = geometry.left_right.is_some(),
        front_back = geometry.front_back.is_some(),
        "hole geometry derived"
    );
    Ok(geometry)
}

/// Base-hole size for one axis: derived from the support length when one is
/// set, otherwise the explicit footprint.
fn base_hole_size(
    axis: Axis,
    resolved: &ResolvedAxis,
    support_length: Option<f64>,
    explicit: f64,
) -> ConfigResult<f64> {
    match support_length {
        Some(support) => {
            let size = resolved.inner - 2.0 * support;
            if size < 0.0 {
                return Err(ConfigError::SupportTooLong {
                    support_param: axis.support_param(),
                    inner_param: axis.inner_param(),
                    support,
                    inner: resolved.inner,
                });
            }
            Ok(size)
        }
        None => Ok(explicit),
    }
}

/// A wall cutout needs both its brace length and the brace height; either
/// one absent means "no cutout".
fn wall_cutout(brace_length: Option<f64>, brace_height: Option<f64>) -> Option<(f64, f64)> {
    Some((brace_length?, brace_height?))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolved(inner: f64, wall: f64) -> ResolvedAxis {
        ResolvedAxis {
            inner,
            outer: inner + 2.0 * wall,
            wall_thickness: wall,
        }
    }

    fn heights() -> ResolvedHeight {
        ResolvedHeight {
            outer_height: 10.0,
            inner_height: 8.0,
            base_thickness: 2.0,
        }
    }

    fn no_holes() -> HoleConfig {
        HoleConfig {
            base_hole_width: 0.0,
            base_hole_depth: 0.0,
            support_length_x: None,
            support_length_y: None,
            brace_length_x: None,
            brace_length_y: None,
            brace_height: None,
        }
    }

    #[test]
    fn defaults_produce_no_cutouts() {
        let geometry = compute_holes(
            &resolved(10.0, 1.0),
            &resolved(10.0, 1.0),
            &heights(),
            &no_holes(),
        )
        .unwrap();
        assert!(geometry.base_hole.is_none());
        assert!(geometry.left_right.is_none());
        assert!(geometry.front_back.is_none());
    }

    #[test]
    fn support_length_derives_centered_base_hole() {
        let geometry = compute_holes(
            &resolved(10.0, 1.0),
            &resolved(20.0, 1.0),
            &heights(),
            &HoleConfig {
                support_length_x: Some(2.0),
                support_length_y: Some(3.0),
                ..no_holes()
            },
        )
        .unwrap();

        let hole = geometry.base_hole.unwrap();
        assert_eq!(hole.size, Vector3::new(6.0, 14.0, 2.0));
        // Centered in the 12 x 22 outer footprint.
        assert_eq!(hole.offset, Vector3::new(3.0, 4.0, 0.0));
    }

    #[test]
    fn oversized_support_fails() {
        let err = compute_holes(
            &resolved(10.0, 1.0),
            &resolved(10.0, 1.0),
            &heights(),
            &HoleConfig {
                support_length_x: Some(5.1),
                ..no_holes()
            },
        )
        .unwrap_err();
        assert!(err.to_string().contains("base_support_length_x"));
    }

    #[test]
    fn support_consuming_whole_floor_is_omitted_not_an_error() {
        let geometry = compute_holes(
            &resolved(10.0, 1.0),
            &resolved(10.0, 1.0),
            &heights(),
            &HoleConfig {
                support_length_x: Some(5.0),
                support_length_y: Some(2.0),
                ..no_holes()
            },
        )
        .unwrap();
        // Width collapses to exactly zero: degenerate, so no cutout.
        assert!(geometry.base_hole.is_none());
    }

    #[test]
    fn wall_cutouts_span_the_full_outer_size() {
        let geometry = compute_holes(
            &resolved(10.0, 1.0),
            &resolved(20.0, 2.0),
            &heights(),
            &HoleConfig {
                brace_length_x: Some(2.0),
                brace_length_y: Some(3.0),
                brace_height: Some(1.5),
                ..no_holes()
            },
        )
        .unwrap();

        let left_right = geometry.left_right.unwrap();
        assert_eq!(left_right.size, Vector3::new(12.0, 14.0, 6.5));
        assert_eq!(left_right.offset, Vector3::new(0.0, 5.0, 3.5));

        let front_back = geometry.front_back.unwrap();
        assert_eq!(front_back.size, Vector3::new(6.0, 24.0, 6.5));
        assert_eq!(front_back.offset, Vector3::new(3.0, 0.0, 3.5));
    }

    #[test]
    fn missing_brace_height_omits_both_wall_cutouts() {
        let geometry = compute_holes(
            &resolved(10.0, 1.0),
            &resolved(10.0, 1.0),
            &heights(),
            &HoleConfig {
                brace_length_x: Some(1.0),
                brace_length_y: Some(1.0),
                ..no_holes()
            },
        )
        .unwrap();
        assert!(geometry.left_right.is_none());
        assert!(geometry.front_back.is_none());
    }

    #[test]
    fn brace_swallowing_the_wall_omits_the_cutout() {
        let geometry = compute_holes(
            &resolved(10.0, 1.0),
            &resolved(10.0, 1.0),
            &heights(),
            &HoleConfig {
                brace_length_y: Some(6.0),
                brace_height: Some(1.0),
                ..no_holes()
            },
        )
        .unwrap();
        // 10 - 12 < 0: nothing left to cut.
        assert!(geometry.left_right.is_none());
    }

    #[test]
    fn realizability_rejects_non_finite_dimensions() {
        let cutout = Cutout {
            size: Vector3::new(f64::INFINITY, 1.0, 1.0),
            offset: Vector3::zeros(),
        };
        assert!(!cutout.is_realizable());

        let cutout = Cutout {
            size: Vector3::new(1.0, 1.0, 1.0),
            offset: Vector3::zeros(),
        };
        assert!(cutout.is_realizable());
    }
}
