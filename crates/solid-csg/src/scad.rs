//! Reference backend emitting OpenSCAD source.
//!
//! [`ScadBackend`] realizes an operation graph as human-readable OpenSCAD
//! text, preserving primitive names as comments. It is the backend used by
//! the CLI for `.scad` export and by tests that want to see an entire
//! composed model at a glance.

use nalgebra::Vector3;

use crate::backend::{SolidBackend, realize};
use crate::node::{BooleanOp, CsgNode, RotationAxis};

/// Backend producing OpenSCAD source text.
#[derive(Debug)]
pub struct ScadBackend {
    /// Decimal places for emitted coordinates.
    pub precision: usize,
}

impl Default for ScadBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl ScadBackend {
    pub fn new() -> Self {
        Self { precision: 3 }
    }

    fn fmt(&self, value: f64) -> String {
        let s = format!("{:.*}", self.precision, value);
        // 12.000 -> 12
        let trimmed = s.trim_end_matches('0').trim_end_matches('.');
        if trimmed.is_empty() { "0".into() } else { trimmed.into() }
    }

    fn fmt_vec(&self, v: Vector3<f64>) -> String {
        format!("[{}, {}, {}]", self.fmt(v.x), self.fmt(v.y), self.fmt(v.z))
    }

    fn indent(block: &str) -> String {
        block
            .lines()
            .map(|line| format!("  {line}"))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn wrap(&self, head: String, children: &[String]) -> String {
        let body = children
            .iter()
            .map(|c| Self::indent(c))
            .collect::<Vec<_>>()
            .join("\n");
        format!("{head} {{\n{body}\n}}")
    }
}

impl SolidBackend for ScadBackend {
    type Solid = String;

    fn cuboid(&mut self, name: &str, size: Vector3<f64>) -> String {
        format!("cube({}); // {}", self.fmt_vec(size), name)
    }

    fn cylinder(&mut self, name: &str, radius: f64, height: f64) -> String {
        format!(
            "cylinder(r = {}, h = {}); // {}",
            self.fmt(radius),
            self.fmt(height),
            name
        )
    }

    fn boolean(&mut self, op: BooleanOp, children: Vec<String>) -> String {
        let keyword = match op {
            BooleanOp::Union => "union()",
            BooleanOp::Difference => "difference()",
            BooleanOp::Intersection => "intersection()",
        };
        self.wrap(keyword.to_string(), &children)
    }

    fn translate(&mut self, solid: String, offset: Vector3<f64>) -> String {
        self.wrap(format!("translate({})", self.fmt_vec(offset)), &[solid])
    }

    fn rotate(&mut self, solid: String, axis: RotationAxis, degrees: f64) -> String {
        let angles = match axis {
            RotationAxis::X => Vector3::new(degrees, 0.0, 0.0),
            RotationAxis::Y => Vector3::new(0.0, degrees, 0.0),
            RotationAxis::Z => Vector3::new(0.0, 0.0, degrees),
        };
        self.wrap(format!("rotate({})", self.fmt_vec(angles)), &[solid])
    }
}

/// Render an operation graph as a complete OpenSCAD program.
pub fn to_scad(node: &CsgNode) -> String {
    let mut backend = ScadBackend::new();
    let body = realize(node, &mut backend);
    format!("// generated by solid-csg\n{body}\n")
}
