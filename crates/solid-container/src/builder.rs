//! Fluent builder API for container generation.
//!
//! [`ContainerBuilder`] is the ergonomic front door: chain the constraints
//! you know, then [`build`](ContainerBuilder::build). It is a thin layer over
//! [`ContainerConfig`]; everything it can express, a config literal can too.
//!
//! # Example
//!
//! ```
//! use solid_container::{ContainerBuilder, ExpandStrategy};
//!
//! let container = ContainerBuilder::new()
//!     .outer_width(20.0)
//!     .outer_depth(20.0)
//!     .wall_thickness(2.0)
//!     .expand(ExpandStrategy::Inside)
//!     .inner_height(5.0)
//!     .base_thickness(1.0)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(container.spec().width.inner, 16.0);
//! assert_eq!(container.spec().height.outer_height, 6.0);
//! ```

use crate::axis::ExpandStrategy;
use crate::config::ContainerConfig;
use crate::container::Container;
use crate::error::ConfigResult;

/// Fluent builder over [`ContainerConfig`].
#[derive(Debug, Clone, Default)]
pub struct ContainerBuilder {
    config: ContainerConfig,
}

macro_rules! option_setter {
    ($(#[$doc:meta])* $name:ident: $ty:ty) => {
        $(#[$doc])*
        pub fn $name(mut self, value: $ty) -> Self {
            self.config.$name = Some(value);
            self
        }
    };
}

impl ContainerBuilder {
    /// Start from the default configuration (0.8mm walls, no holes).
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration.
    pub fn from_config(config: ContainerConfig) -> Self {
        Self { config }
    }

    option_setter!(
        /// Inner size for both horizontal axes unless overridden.
        inner_length: f64
    );
    option_setter!(inner_width: f64);
    option_setter!(inner_depth: f64);

    option_setter!(
        /// Outer size for both horizontal axes unless overridden.
        outer_length: f64
    );
    option_setter!(outer_width: f64);
    option_setter!(outer_depth: f64);

    option_setter!(
        /// Rounding modulus for both horizontal axes unless overridden.
        side_multiple: f64
    );
    option_setter!(width_multiple: f64);
    option_setter!(depth_multiple: f64);

    /// Wall thickness for both axes unless overridden.
    pub fn wall_thickness(mut self, thickness: f64) -> Self {
        self.config.wall_thickness = thickness;
        self
    }

    option_setter!(wall_thickness_x: f64);
    option_setter!(wall_thickness_y: f64);

    /// Expansion strategy for both axes unless overridden.
    pub fn expand(mut self, strategy: ExpandStrategy) -> Self {
        self.config.expand = strategy;
        self
    }

    option_setter!(expand_x: ExpandStrategy);
    option_setter!(expand_y: ExpandStrategy);

    option_setter!(
        /// Explicit base-hole footprint for both axes unless overridden.
        base_hole_length: f64
    );
    option_setter!(base_hole_width: f64);
    option_setter!(base_hole_depth: f64);

    option_setter!(
        /// Support-leg length for both axes unless overridden; setting one
        /// derives the base hole from the inner size.
        base_support_length: f64
    );
    option_setter!(base_support_length_x: f64);
    option_setter!(base_support_length_y: f64);

    option_setter!(
        /// Brace length beside the wall cutouts, both axes unless overridden.
        brace_length: f64
    );
    option_setter!(brace_length_x: f64);
    option_setter!(brace_length_y: f64);
    option_setter!(
        /// Brace height below the wall cutouts; required for any wall cutout.
        brace_height: f64
    );

    option_setter!(base_thickness: f64);
    option_setter!(inner_height: f64);
    option_setter!(outer_height: f64);

    /// The accumulated configuration, without resolving it.
    pub fn config(&self) -> &ContainerConfig {
        &self.config
    }

    /// Resolve the accumulated constraints into a [`Container`].
    pub fn build(self) -> ConfigResult<Container> {
        Container::from_config(&self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_WALL_THICKNESS;

    #[test]
    fn builder_defaults_match_config_defaults() {
        let builder = ContainerBuilder::new();
        assert_eq!(builder.config().wall_thickness, DEFAULT_WALL_THICKNESS);
        assert_eq!(builder.config().expand, ExpandStrategy::None);
        assert!(builder.config().inner_width.is_none());
    }

    #[test]
    fn chaining_accumulates_settings() {
        let builder = ContainerBuilder::new()
            .inner_length(15.0)
            .inner_depth(25.0)
            .wall_thickness(1.2)
            .expand_y(ExpandStrategy::Wall)
            .brace_length(2.0)
            .brace_height(3.0);

        let config = builder.config();
        assert_eq!(config.inner_length, Some(15.0));
        assert_eq!(config.inner_depth, Some(25.0));
        assert_eq!(config.wall_thickness, 1.2);
        assert_eq!(config.expand_y, Some(ExpandStrategy::Wall));
        assert_eq!(config.brace_height, Some(3.0));
    }

    #[test]
    fn build_runs_the_full_pipeline() {
        let container = ContainerBuilder::new()
            .inner_length(10.0)
            .wall_thickness(1.0)
            .outer_height(5.0)
            .inner_height(3.0)
            .build()
            .unwrap();

        assert_eq!(container.spec().depth.outer, 12.0);
        assert_eq!(container.spec().height.base_thickness, 2.0);
    }

    #[test]
    fn build_propagates_configuration_errors() {
        let result = ContainerBuilder::new()
            .inner_width(10.0)
            .inner_depth(10.0)
            .build();
        // No heights provided.
        assert!(result.is_err());
    }
}
