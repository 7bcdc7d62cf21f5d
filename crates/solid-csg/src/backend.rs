//! The capability contract between operation graphs and geometry kernels.
//!
//! A [`SolidBackend`] is anything that can build primitive solids and combine
//! them with boolean operations, translation, rotation, and centering. That
//! capability set is the *only* contract a backend must satisfy; the core
//! never depends on a concrete kernel.
//!
//! [`realize`] walks a [`CsgNode`] graph bottom-up and drives a backend to
//! produce its native solid value.

use nalgebra::Vector3;
use tracing::trace;

use crate::node::{BooleanOp, CsgNode, RotationAxis};

/// Capability interface implemented by geometry backends.
///
/// `Solid` is the backend's native model value. Implementations may be as
/// heavy as a mesh kernel or as light as a source-code emitter (see
/// [`crate::scad::ScadBackend`]).
pub trait SolidBackend {
    type Solid;

    /// Build an axis-aligned cuboid with its minimum corner at the origin.
    fn cuboid(&mut self, name: &str, size: Vector3<f64>) -> Self::Solid;

    /// Build a cylinder standing on the XY plane, centered on the Z axis.
    fn cylinder(&mut self, name: &str, radius: f64, height: f64) -> Self::Solid;

    /// Combine two or more solids with a boolean operation.
    fn boolean(&mut self, op: BooleanOp, children: Vec<Self::Solid>) -> Self::Solid;

    /// Shift a solid by a fixed offset.
    fn translate(&mut self, solid: Self::Solid, offset: Vector3<f64>) -> Self::Solid;

    /// Rotate a solid about one axis through the origin.
    fn rotate(&mut self, solid: Self::Solid, axis: RotationAxis, degrees: f64) -> Self::Solid;

    /// Re-center a solid on the origin along the selected axes.
    ///
    /// Backends that track geometry can center exactly; declarative backends
    /// may rely on [`CsgNode::bounds`] computed by the caller. The default
    /// graph walker passes the midpoint shift it derived from conservative
    /// bounds via [`SolidBackend::translate`], so most backends never need to
    /// override this.
    fn center(&mut self, solid: Self::Solid, shift: Vector3<f64>) -> Self::Solid {
        self.translate(solid, shift)
    }
}

/// Realize an operation graph into a backend's native solid value.
///
/// The walk is depth-first and purely functional; the same graph realized
/// twice against the same backend state produces the same solid.
pub fn realize<B: SolidBackend>(node: &CsgNode, backend: &mut B) -> B::Solid {
    trace!(node_count = node.node_count(), "realizing CSG graph");
    realize_node(node, backend)
}

fn realize_node<B: SolidBackend>(node: &CsgNode, backend: &mut B) -> B::Solid {
    match node {
        CsgNode::Cuboid { name, size } => backend.cuboid(name, *size),
        CsgNode::Cylinder {
            name,
            radius,
            height,
        } => backend.cylinder(name, *radius, *height),
        CsgNode::Boolean { op, children } => {
            let realized = children
                .iter()
                .map(|child| realize_node(child, backend))
                .collect();
            backend.boolean(*op, realized)
        }
        CsgNode::Translate { offset, child } => {
            let solid = realize_node(child, backend);
            backend.translate(solid, *offset)
        }
        CsgNode::Rotate {
            axis,
            degrees,
            child,
        } => {
            let solid = realize_node(child, backend);
            backend.rotate(solid, *axis, *degrees)
        }
        CsgNode::Center { axes, child } => {
            let solid = realize_node(child, backend);
            let (lo, hi) = child.bounds();
            let mid = (lo + hi) / 2.0;
            let shift = Vector3::new(
                if axes[0] { -mid.x } else { 0.0 },
                if axes[1] { -mid.y } else { 0.0 },
                if axes[2] { -mid.z } else { 0.0 },
            );
            backend.center(solid, shift)
        }
    }
}
