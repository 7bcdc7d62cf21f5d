//! Terse container configuration and its cascading-default expansion.
//!
//! Callers describe a container with the short option set from the original
//! parameter surface: `inner_length` defaults both `inner_width` and
//! `inner_depth`, a blanket `wall_thickness` defaults the per-axis
//! overrides, and so on. [`ContainerConfig::expanded`] applies that cascade
//! in one explicit pre-processing pass, producing fully-populated per-axis
//! and height constraints before any validation runs.
//!
//! Values the original expressed as `Infinity` sentinels ("disabled") are
//! plain `Option`s here, so no infinite arithmetic ever reaches geometry.

use serde::Deserialize;

use crate::axis::{AxisConstraint, ExpandStrategy};
use crate::height::HeightConstraint;

/// Default wall thickness in mm, a common two-pass FDM perimeter.
pub const DEFAULT_WALL_THICKNESS: f64 = 0.8;

/// The full recognized option set for a container request.
///
/// All dimensional fields are millimeters. Absent means "not provided", and
/// the cascade in [`ContainerConfig::expanded`] fills per-axis fields from
/// their blanket counterparts. Deserializable so the CLI can load a request
/// from a JSON file.
///
/// # Example
///
/// ```
/// use solid_container::{Container, ContainerConfig};
///
/// let config = ContainerConfig {
///     inner_length: Some(20.0),
///     outer_height: Some(12.0),
///     base_thickness: Some(1.2),
///     ..Default::default()
/// };
/// let container = Container::from_config(&config).unwrap();
/// assert_eq!(container.spec().width.outer, 21.6);
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContainerConfig {
    /// Inner size for both horizontal axes unless overridden.
    pub inner_length: Option<f64>,
    pub inner_width: Option<f64>,
    pub inner_depth: Option<f64>,

    /// Outer size for both horizontal axes unless overridden.
    pub outer_length: Option<f64>,
    pub outer_width: Option<f64>,
    pub outer_depth: Option<f64>,

    /// Rounding modulus for both horizontal axes unless overridden.
    pub side_multiple: Option<f64>,
    pub width_multiple: Option<f64>,
    pub depth_multiple: Option<f64>,

    /// Wall thickness, defaulting the per-axis overrides.
    pub wall_thickness: f64,
    pub wall_thickness_x: Option<f64>,
    pub wall_thickness_y: Option<f64>,

    /// Expansion strategy, defaulting the per-axis overrides.
    pub expand: ExpandStrategy,
    pub expand_x: Option<ExpandStrategy>,
    pub expand_y: Option<ExpandStrategy>,

    /// Explicit base-hole footprint (used when no support length is given).
    pub base_hole_length: Option<f64>,
    pub base_hole_width: Option<f64>,
    pub base_hole_depth: Option<f64>,

    /// Material kept at the base perimeter; presence derives the base hole.
    pub base_support_length: Option<f64>,
    pub base_support_length_x: Option<f64>,
    pub base_support_length_y: Option<f64>,

    /// Wall material preserved beside the wall cutouts. Absent = no cutout.
    pub brace_length: Option<f64>,
    pub brace_length_x: Option<f64>,
    pub brace_length_y: Option<f64>,

    /// Wall material preserved below the wall cutouts. Absent = no cutout.
    pub brace_height: Option<f64>,

    /// Heights: the caller must supply exactly two of these three.
    pub base_thickness: Option<f64>,
    pub inner_height: Option<f64>,
    pub outer_height: Option<f64>,
}

impl Default for ContainerConfig {
    fn default() -> Self {
        Self {
            inner_length: None,
            inner_width: None,
            inner_depth: None,
            outer_length: None,
            outer_width: None,
            outer_depth: None,
            side_multiple: None,
            width_multiple: None,
            depth_multiple: None,
            wall_thickness: DEFAULT_WALL_THICKNESS,
            wall_thickness_x: None,
            wall_thickness_y: None,
            expand: ExpandStrategy::None,
            expand_x: None,
            expand_y: None,
            base_hole_length: None,
            base_hole_width: None,
            base_hole_depth: None,
            base_support_length: None,
            base_support_length_x: None,
            base_support_length_y: None,
            brace_length: None,
            brace_length_x: None,
            brace_length_y: None,
            brace_height: None,
            base_thickness: None,
            inner_height: None,
            outer_height: None,
        }
    }
}

/// Hole, support, and brace parameters after cascading, fully per-axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoleConfig {
    /// Explicit base-hole footprint, used when no support length is set.
    pub base_hole_width: f64,
    pub base_hole_depth: f64,

    /// Support-leg lengths; when present they derive the base hole instead.
    pub support_length_x: Option<f64>,
    pub support_length_y: Option<f64>,

    /// Brace reservations limiting the wall cutouts.
    pub brace_length_x: Option<f64>,
    pub brace_length_y: Option<f64>,
    pub brace_height: Option<f64>,
}

/// A configuration with every cascading default applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExpandedConfig {
    pub width: AxisConstraint,
    pub depth: AxisConstraint,
    pub height: HeightConstraint,
    pub holes: HoleConfig,
}

impl ContainerConfig {
    /// Apply the cascading defaults, producing fully-populated per-axis
    /// constraints.
    ///
    /// Pure bookkeeping: no validation happens here, so an expanded config
    /// can still be rejected by resolution.
    pub fn expanded(&self) -> ExpandedConfig {
        let wall_x = self.wall_thickness_x.unwrap_or(self.wall_thickness);
        let wall_y = self.wall_thickness_y.unwrap_or(self.wall_thickness);

        let width = AxisConstraint {
            inner: self.inner_width.or(self.inner_length),
            outer: self.outer_width.or(self.outer_length),
            multiple: self.width_multiple.or(self.side_multiple),
            wall_thickness: wall_x,
            expand: self.expand_x.unwrap_or(self.expand),
        };
        let depth = AxisConstraint {
            inner: self.inner_depth.or(self.inner_length),
            outer: self.outer_depth.or(self.outer_length),
            multiple: self.depth_multiple.or(self.side_multiple),
            wall_thickness: wall_y,
            expand: self.expand_y.unwrap_or(self.expand),
        };

        let height = HeightConstraint {
            outer_height: self.outer_height,
            inner_height: self.inner_height,
            base_thickness: self.base_thickness,
        };

        let holes = HoleConfig {
            base_hole_width: self.base_hole_width.or(self.base_hole_length).unwrap_or(0.0),
            base_hole_depth: self.base_hole_depth.or(self.base_hole_length).unwrap_or(0.0),
            support_length_x: self.base_support_length_x.or(self.base_support_length),
            support_length_y: self.base_support_length_y.or(self.base_support_length),
            brace_length_x: self.brace_length_x.or(self.brace_length),
            brace_length_y: self.brace_length_y.or(self.brace_length),
            brace_height: self.brace_height,
        };

        ExpandedConfig {
            width,
            depth,
            height,
            holes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_cascades_to_width_and_depth() {
        let expanded = ContainerConfig {
            inner_length: Some(20.0),
            inner_depth: Some(30.0),
            ..Default::default()
        }
        .expanded();

        assert_eq!(expanded.width.inner, Some(20.0));
        // Explicit per-axis value wins over the cascade.
        assert_eq!(expanded.depth.inner, Some(30.0));
    }

    #[test]
    fn blanket_values_cascade_per_axis() {
        let expanded = ContainerConfig {
            side_multiple: Some(5.0),
            wall_thickness: 1.2,
            expand: ExpandStrategy::Inside,
            expand_y: Some(ExpandStrategy::Wall),
            base_support_length: Some(2.0),
            brace_length: Some(3.0),
            ..Default::default()
        }
        .expanded();

        assert_eq!(expanded.width.multiple, Some(5.0));
        assert_eq!(expanded.depth.multiple, Some(5.0));
        assert_eq!(expanded.width.wall_thickness, 1.2);
        assert_eq!(expanded.width.expand, ExpandStrategy::Inside);
        assert_eq!(expanded.depth.expand, ExpandStrategy::Wall);
        assert_eq!(expanded.holes.support_length_x, Some(2.0));
        assert_eq!(expanded.holes.brace_length_y, Some(3.0));
    }

    #[test]
    fn holes_default_to_zero_footprint_and_disabled_supports() {
        let expanded = ContainerConfig::default().expanded();
        assert_eq!(expanded.holes.base_hole_width, 0.0);
        assert_eq!(expanded.holes.base_hole_depth, 0.0);
        assert_eq!(expanded.holes.support_length_x, None);
        assert_eq!(expanded.holes.brace_height, None);
    }

    #[test]
    fn config_deserializes_from_json() {
        let config: ContainerConfig = serde_json::from_str(
            r#"{
                "inner_width": 10.0,
                "wall_thickness": 1.0,
                "expand": "inside",
                "outer_width": 12.0,
                "outer_height": 5.0,
                "base_thickness": 2.0
            }"#,
        )
        .unwrap();
        assert_eq!(config.inner_width, Some(10.0));
        assert_eq!(config.expand, ExpandStrategy::Inside);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let result = serde_json::from_str::<ContainerConfig>(r#"{"iner_width": 10.0}"#);
        assert!(result.is_err());
    }
}
