//! Parametric hollow rectangular container solids from partial constraints.
//!
//! This crate resolves a flexible, partially-redundant set of dimensional
//! constraints into a fully-consistent container specification, then
//! composes it into a declarative CSG operation graph (via [`solid_csg`])
//! for an external geometry backend to realize.
//!
//! # The resolution model
//!
//! Each horizontal axis accepts any sufficient subset of {inner size, outer
//! size, rounding multiple} plus a wall thickness and an
//! [`ExpandStrategy`]:
//!
//! - `none`: every given value must already agree exactly
//! - `inside`: the outer size (possibly rounded up to the multiple) wins;
//!   the inner size is recomputed
//! - `wall`: inner and outer both win; the wall thickness is recomputed
//!
//! Heights take exactly two of {outer height, inner height, base thickness}.
//! Contradictions fail eagerly with a [`ConfigError`] naming the offending
//! parameters; no partially resolved container is ever observable.
//!
//! # Units and Scale
//!
//! **Millimeters.** The default wall thickness (0.8mm) is a common two-pass
//! FDM perimeter width.
//!
//! # Quick Start
//!
//! ```
//! use solid_container::ContainerBuilder;
//! use solid_csg::to_scad;
//!
//! let container = ContainerBuilder::new()
//!     .inner_width(42.0)
//!     .inner_depth(64.0)
//!     .wall_thickness(1.2)
//!     .inner_height(20.0)
//!     .base_thickness(1.6)
//!     .build()
//!     .unwrap();
//!
//! let scad = to_scad(&container.solid());
//! assert!(scad.contains("Outer Box"));
//! ```
//!
//! # Grid-friendly sizing
//!
//! A rounding multiple snaps the outer size up to the next exact multiple,
//! letting the cavity absorb the slack:
//!
//! ```
//! use solid_container::{ContainerBuilder, ExpandStrategy};
//!
//! // Outer footprint on a 5mm grid; walls stay 1mm, the inside grows.
//! let container = ContainerBuilder::new()
//!     .inner_length(9.0)
//!     .side_multiple(5.0)
//!     .wall_thickness(1.0)
//!     .expand(ExpandStrategy::Inside)
//!     .inner_height(10.0)
//!     .base_thickness(1.0)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(container.spec().width.outer, 15.0);
//! assert_eq!(container.spec().width.inner, 13.0);
//! ```
//!
//! # Error Handling
//!
//! Operations return [`ConfigResult<T>`], which is
//! `Result<T, ConfigError>`. Every error carries a `CONTAINER-XXXX` code
//! and remediation help:
//!
//! ```
//! use solid_container::{ConfigErrorCode, ContainerBuilder};
//!
//! let err = ContainerBuilder::new()
//!     .inner_width(10.0)
//!     .outer_width(14.0) // 10 + 2*0.8 != 14
//!     .inner_depth(10.0)
//!     .inner_height(5.0)
//!     .base_thickness(1.0)
//!     .build()
//!     .unwrap_err();
//!
//! assert_eq!(err.code(), ConfigErrorCode::InconsistentAxis);
//! ```

mod assemble;
mod axis;
mod builder;
mod config;
mod container;
mod error;
mod height;
mod holes;

pub use assemble::assemble;
pub use axis::{Axis, AxisConstraint, ExpandStrategy, ResolvedAxis, next_multiple, resolve_axis};
pub use builder::ContainerBuilder;
pub use config::{ContainerConfig, DEFAULT_WALL_THICKNESS, ExpandedConfig, HoleConfig};
pub use container::{Container, ContainerSpec};
pub use error::{ConfigError, ConfigErrorCode, ConfigResult};
pub use height::{HeightConstraint, ResolvedHeight, resolve_height};
pub use holes::{Cutout, HoleGeometry, compute_holes};
