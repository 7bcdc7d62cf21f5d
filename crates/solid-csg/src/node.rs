//! The declarative CSG operation graph.
//!
//! A [`CsgNode`] is an immutable tree of primitive solids and boolean
//! operations. Nothing here touches an actual mesh kernel; the graph is a
//! pure value describing *what* to build, and a geometry backend realizes it
//! later (see [`crate::backend`]).
//!
//! Primitives carry human-readable names that survive into the realized
//! model, which makes composed solids debuggable ("which box is this?").
//!
//! # Coordinate conventions
//!
//! Right-handed, millimeters. A cuboid sits with its minimum corner at the
//! origin and extends along +X (width), +Y (depth), +Z (height). A cylinder
//! stands on the XY plane, centered on the Z axis.
//!
//! # Example
//!
//! ```
//! use solid_csg::CsgNode;
//!
//! let plate = CsgNode::cuboid("Plate", 40.0, 40.0, 3.0)
//!     .difference([CsgNode::cylinder("Bolt Hole", 2.0, 3.0).translate_xy(20.0, 20.0)]);
//!
//! assert!(plate.find_named("Bolt Hole").is_some());
//! ```

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Boolean operation applied to two or more child solids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BooleanOp {
    /// A ∪ B ∪ … (combines all children).
    Union,

    /// A − B − … (subtracts every later child from the first).
    Difference,

    /// A ∩ B ∩ … (keeps only the common region).
    Intersection,
}

/// A rotation axis for [`CsgNode::Rotate`] nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RotationAxis {
    X,
    Y,
    Z,
}

/// One node in a CSG operation graph.
///
/// Construct graphs through the combinator methods rather than the variants
/// directly; the variants are public so backends can pattern-match during
/// realization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "node", rename_all = "snake_case")]
pub enum CsgNode {
    /// Axis-aligned rectangular prism, minimum corner at the origin.
    Cuboid { name: String, size: Vector3<f64> },

    /// Circular cylinder standing on the XY plane, centered on the Z axis.
    Cylinder {
        name: String,
        radius: f64,
        height: f64,
    },

    /// N-ary boolean combination of child solids.
    Boolean {
        op: BooleanOp,
        children: Vec<CsgNode>,
    },

    /// Child solid shifted by a fixed offset.
    Translate {
        offset: Vector3<f64>,
        child: Box<CsgNode>,
    },

    /// Child solid rotated about one axis through the origin.
    Rotate {
        axis: RotationAxis,
        degrees: f64,
        child: Box<CsgNode>,
    },

    /// Child solid re-centered on the origin along the selected axes.
    Center {
        axes: [bool; 3],
        child: Box<CsgNode>,
    },
}

impl CsgNode {
    /// Create a named cuboid with the given width (X), depth (Y), height (Z).
    pub fn cuboid(name: impl Into<String>, width: f64, depth: f64, height: f64) -> Self {
        CsgNode::Cuboid {
            name: name.into(),
            size: Vector3::new(width, depth, height),
        }
    }

    /// Create a named cylinder with the given radius and height.
    pub fn cylinder(name: impl Into<String>, radius: f64, height: f64) -> Self {
        CsgNode::Cylinder {
            name: name.into(),
            radius,
            height,
        }
    }

    /// Union this solid with one or more others.
    pub fn union(self, others: impl IntoIterator<Item = CsgNode>) -> Self {
        self.boolean(BooleanOp::Union, others)
    }

    /// Subtract one or more solids from this one.
    pub fn difference(self, subtrahends: impl IntoIterator<Item = CsgNode>) -> Self {
        self.boolean(BooleanOp::Difference, subtrahends)
    }

    /// Intersect this solid with one or more others.
    pub fn intersection(self, others: impl IntoIterator<Item = CsgNode>) -> Self {
        self.boolean(BooleanOp::Intersection, others)
    }

    fn boolean(self, op: BooleanOp, others: impl IntoIterator<Item = CsgNode>) -> Self {
        let mut children = vec![self];
        children.extend(others);
        CsgNode::Boolean { op, children }
    }

    /// Translate by the given offsets along X, Y, Z.
    pub fn translate(self, x: f64, y: f64, z: f64) -> Self {
        CsgNode::Translate {
            offset: Vector3::new(x, y, z),
            child: Box::new(self),
        }
    }

    /// Translate along X only.
    pub fn translate_x(self, x: f64) -> Self {
        self.translate(x, 0.0, 0.0)
    }

    /// Translate along Y only.
    pub fn translate_y(self, y: f64) -> Self {
        self.translate(0.0, y, 0.0)
    }

    /// Translate along Z only.
    pub fn translate_z(self, z: f64) -> Self {
        self.translate(0.0, 0.0, z)
    }

    /// Translate in the XY plane.
    pub fn translate_xy(self, x: f64, y: f64) -> Self {
        self.translate(x, y, 0.0)
    }

    /// Translate in the XZ plane.
    pub fn translate_xz(self, x: f64, z: f64) -> Self {
        self.translate(x, 0.0, z)
    }

    /// Translate in the YZ plane.
    pub fn translate_yz(self, y: f64, z: f64) -> Self {
        self.translate(0.0, y, z)
    }

    /// Rotate about the X axis by the given angle in degrees.
    pub fn rotate_x(self, degrees: f64) -> Self {
        self.rotate(RotationAxis::X, degrees)
    }

    /// Rotate about the Y axis by the given angle in degrees.
    pub fn rotate_y(self, degrees: f64) -> Self {
        self.rotate(RotationAxis::Y, degrees)
    }

    /// Rotate about the Z axis by the given angle in degrees.
    pub fn rotate_z(self, degrees: f64) -> Self {
        self.rotate(RotationAxis::Z, degrees)
    }

    fn rotate(self, axis: RotationAxis, degrees: f64) -> Self {
        CsgNode::Rotate {
            axis,
            degrees,
            child: Box::new(self),
        }
    }

    /// Center on the origin along all three axes.
    pub fn center(self) -> Self {
        self.center_axes([true, true, true])
    }

    /// Center on the origin in the XY plane, leaving Z untouched.
    pub fn center_xy(self) -> Self {
        self.center_axes([true, true, false])
    }

    /// Center on the origin along the selected axes.
    pub fn center_axes(self, axes: [bool; 3]) -> Self {
        CsgNode::Center {
            axes,
            child: Box::new(self),
        }
    }

    /// The name of this node, if it is a primitive.
    pub fn name(&self) -> Option<&str> {
        match self {
            CsgNode::Cuboid { name, .. } | CsgNode::Cylinder { name, .. } => Some(name),
            _ => None,
        }
    }

    /// Find the first primitive in the graph with the given name.
    ///
    /// Depth-first, pre-order. Useful for asserting graph shape in tests and
    /// for debugging composed models.
    pub fn find_named(&self, name: &str) -> Option<&CsgNode> {
        if self.name() == Some(name) {
            return Some(self);
        }
        for child in self.children() {
            if let Some(found) = child.find_named(name) {
                return Some(found);
            }
        }
        None
    }

    /// Whether the graph contains a primitive with the given name.
    pub fn contains_named(&self, name: &str) -> bool {
        self.find_named(name).is_some()
    }

    /// Total number of nodes in the graph, including this one.
    pub fn node_count(&self) -> usize {
        1 + self.children().iter().map(CsgNode::node_count).sum::<usize>()
    }

    /// Direct children of this node (empty for primitives).
    pub fn children(&self) -> &[CsgNode] {
        match self {
            CsgNode::Cuboid { .. } | CsgNode::Cylinder { .. } => &[],
            CsgNode::Boolean { children, .. } => children,
            CsgNode::Translate { child, .. }
            | CsgNode::Rotate { child, .. }
            | CsgNode::Center { child, .. } => std::slice::from_ref(child),
        }
    }

    /// Conservative axis-aligned bounding box of the solid, `(min, max)`.
    ///
    /// Boolean differences report the bounds of the minuend, intersections
    /// the overlap of child bounds, rotations the box around the rotated
    /// corners of the child box. The result contains the solid but may be
    /// larger than its tight bounds.
    pub fn bounds(&self) -> (Vector3<f64>, Vector3<f64>) {
        match self {
            CsgNode::Cuboid { size, .. } => (Vector3::zeros(), *size),
            CsgNode::Cylinder { radius, height, .. } => (
                Vector3::new(-radius, -radius, 0.0),
                Vector3::new(*radius, *radius, *height),
            ),
            CsgNode::Boolean { op, children } => match op {
                // Subtrahends only remove material.
                BooleanOp::Difference => children
                    .first()
                    .map(CsgNode::bounds)
                    .unwrap_or((Vector3::zeros(), Vector3::zeros())),
                BooleanOp::Union => {
                    let mut iter = children.iter().map(CsgNode::bounds);
                    let first = iter.next().unwrap_or((Vector3::zeros(), Vector3::zeros()));
                    iter.fold(first, |(lo, hi), (clo, chi)| (lo.inf(&clo), hi.sup(&chi)))
                }
                BooleanOp::Intersection => {
                    let mut iter = children.iter().map(CsgNode::bounds);
                    let first = iter.next().unwrap_or((Vector3::zeros(), Vector3::zeros()));
                    iter.fold(first, |(lo, hi), (clo, chi)| (lo.sup(&clo), hi.inf(&chi)))
                }
            },
            CsgNode::Translate { offset, child } => {
                let (lo, hi) = child.bounds();
                (lo + offset, hi + offset)
            }
            CsgNode::Rotate {
                axis,
                degrees,
                child,
            } => {
                let (lo, hi) = child.bounds();
                let rotation = axis.rotation(degrees.to_radians());
                let corners = [
                    Vector3::new(lo.x, lo.y, lo.z),
                    Vector3::new(hi.x, lo.y, lo.z),
                    Vector3::new(lo.x, hi.y, lo.z),
                    Vector3::new(hi.x, hi.y, lo.z),
                    Vector3::new(lo.x, lo.y, hi.z),
                    Vector3::new(hi.x, lo.y, hi.z),
                    Vector3::new(lo.x, hi.y, hi.z),
                    Vector3::new(hi.x, hi.y, hi.z),
                ];
                let mut min = rotation * corners[0];
                let mut max = min;
                for corner in &corners[1..] {
                    let p = rotation * corner;
                    min = min.inf(&p);
                    max = max.sup(&p);
                }
                (min, max)
            }
            CsgNode::Center { axes, child } => {
                let (lo, hi) = child.bounds();
                let mid = (lo + hi) / 2.0;
                let shift = Vector3::new(
                    if axes[0] { -mid.x } else { 0.0 },
                    if axes[1] { -mid.y } else { 0.0 },
                    if axes[2] { -mid.z } else { 0.0 },
                );
                (lo + shift, hi + shift)
            }
        }
    }
}

impl RotationAxis {
    fn rotation(self, radians: f64) -> nalgebra::Rotation3<f64> {
        let axis = match self {
            RotationAxis::X => Vector3::x_axis(),
            RotationAxis::Y => Vector3::y_axis(),
            RotationAxis::Z => Vector3::z_axis(),
        };
        nalgebra::Rotation3::from_axis_angle(&axis, radians)
    }
}
