//! Declarative CSG operation graphs for parametric solid modeling.
//!
//! This crate separates *describing* a solid from *building* it. Models are
//! immutable [`CsgNode`] trees of named primitives and boolean operations,
//! composed with fluent combinators; a [`SolidBackend`] later realizes a
//! graph into whatever a concrete geometry kernel produces.
//!
//! # Features
//!
//! - **Primitives**: named cuboids and cylinders
//! - **Booleans**: n-ary union, difference, intersection
//! - **Transforms**: translation, per-axis rotation, centering
//! - **Backends**: the [`SolidBackend`] capability trait plus a reference
//!   OpenSCAD emitter ([`ScadBackend`])
//! - **Introspection**: named-node lookup, node counts, conservative bounds
//!
//! # Units and Scale
//!
//! Dimensions are unit-agnostic but the crates built on top of this one
//! assume millimeters.
//!
//! # Example
//!
//! ```
//! use solid_csg::{CsgNode, to_scad};
//!
//! let tray = CsgNode::cuboid("Outer Box", 40.0, 30.0, 10.0)
//!     .difference([CsgNode::cuboid("Inner Hole", 38.0, 28.0, 9.0).translate(1.0, 1.0, 1.0)]);
//!
//! let scad = to_scad(&tray);
//! assert!(scad.contains("difference()"));
//! ```

mod backend;
mod node;
mod scad;

pub use backend::{SolidBackend, realize};
pub use node::{BooleanOp, CsgNode, RotationAxis};
pub use scad::{ScadBackend, to_scad};
