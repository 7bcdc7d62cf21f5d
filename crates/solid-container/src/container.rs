//! The resolved container and its construction pipeline.

use serde::Serialize;
use tracing::info;

use solid_csg::CsgNode;

use crate::assemble::assemble;
use crate::axis::{Axis, ResolvedAxis, resolve_axis};
use crate::config::ContainerConfig;
use crate::error::ConfigResult;
use crate::height::{ResolvedHeight, resolve_height};
use crate::holes::{HoleGeometry, compute_holes};

/// A fully resolved, mutually consistent container specification.
///
/// Immutable once created: both horizontal axes satisfy
/// `outer == inner + 2 * wall_thickness` and the heights satisfy
/// `outer_height == inner_height + base_thickness`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ContainerSpec {
    /// Resolved X axis (width).
    pub width: ResolvedAxis,
    /// Resolved Y axis (depth).
    pub depth: ResolvedAxis,
    /// Resolved vertical dimensions.
    pub height: ResolvedHeight,
}

/// A hollow rectangular container resolved from partial constraints.
///
/// Construction runs the whole pipeline eagerly: cascading defaults, both
/// axis resolutions, height resolution, and hole derivation. Any
/// contradiction rejects the entire request before a spec exists, so a
/// `Container` is always internally consistent.
///
/// # Example
///
/// ```
/// use solid_container::{Container, ContainerConfig};
///
/// let container = Container::from_config(&ContainerConfig {
///     inner_width: Some(10.0),
///     inner_depth: Some(10.0),
///     wall_thickness: 1.0,
///     outer_height: Some(5.0),
///     inner_height: Some(3.0),
///     ..Default::default()
/// })
/// .unwrap();
///
/// assert_eq!(container.spec().width.outer, 12.0);
/// assert_eq!(container.spec().height.base_thickness, 2.0);
///
/// let solid = container.solid();
/// assert!(solid.contains_named("Outer Box"));
/// ```
#[derive(Debug, Clone)]
pub struct Container {
    spec: ContainerSpec,
    holes: HoleGeometry,
}

impl Container {
    /// Resolve a container from a terse configuration.
    pub fn from_config(config: &ContainerConfig) -> ConfigResult<Self> {
        let expanded = config.expanded();

        let width = resolve_axis(Axis::X, &expanded.width)?;
        let depth = resolve_axis(Axis::Y, &expanded.depth)?;
        let height = resolve_height(&expanded.height)?;
        let holes = compute_holes(&width, &depth, &height, &expanded.holes)?;

        let spec = ContainerSpec {
            width,
            depth,
            height,
        };
        info!(
            outer_width = spec.width.outer,
            outer_depth = spec.depth.outer,
            outer_height = spec.height.outer_height,
            "container resolved"
        );
        Ok(Self { spec, holes })
    }

    /// The resolved dimensional specification.
    pub fn spec(&self) -> &ContainerSpec {
        &self.spec
    }

    /// The derived optional cutouts.
    pub fn holes(&self) -> &HoleGeometry {
        &self.holes
    }

    /// Compose the operation graph for this container.
    ///
    /// Pure and deterministic; calling it twice yields equal graphs.
    pub fn solid(&self) -> CsgNode {
        assemble(&self.spec, &self.holes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solid_is_deterministic() {
        let container = Container::from_config(&ContainerConfig {
            inner_length: Some(10.0),
            wall_thickness: 1.0,
            inner_height: Some(3.0),
            base_thickness: Some(2.0),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(container.solid(), container.solid());
    }

    #[test]
    fn axis_invariant_holds_after_resolution() {
        let container = Container::from_config(&ContainerConfig {
            inner_width: Some(7.5),
            inner_depth: Some(4.25),
            wall_thickness: 0.8,
            outer_height: Some(6.0),
            base_thickness: Some(1.0),
            ..Default::default()
        })
        .unwrap();

        let spec = container.spec();
        assert_eq!(
            spec.width.outer,
            spec.width.inner + 2.0 * spec.width.wall_thickness
        );
        assert_eq!(
            spec.depth.outer,
            spec.depth.inner + 2.0 * spec.depth.wall_thickness
        );
        assert_eq!(
            spec.height.outer_height,
            spec.height.inner_height + spec.height.base_thickness
        );
    }
}
