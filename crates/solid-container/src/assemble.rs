//! Final boolean composition of the container solid.
//!
//! The assembler turns a resolved container into a declarative operation
//! graph: one outer box minus the inner cavity and whichever optional
//! cutouts survived the realizability filter. Node names are preserved for
//! debuggability and mirror the classic layout: "Outer Box", "Inner Hole",
//! "Base Hole", "Left/Right Wall Holes", "Front/Back Wall Holes".

use solid_csg::CsgNode;
use tracing::debug;

use crate::container::ContainerSpec;
use crate::holes::{Cutout, HoleGeometry};

pub(crate) const OUTER_BOX: &str = "Outer Box";
pub(crate) const INNER_HOLE: &str = "Inner Hole";
pub(crate) const BASE_HOLE: &str = "Base Hole";
pub(crate) const LEFT_RIGHT_WALL_HOLES: &str = "Left/Right Wall Holes";
pub(crate) const FRONT_BACK_WALL_HOLES: &str = "Front/Back Wall Holes";

/// Compose the operation graph for a resolved container.
///
/// Purely declarative; nothing here talks to a geometry kernel. The graph is
/// a single n-ary difference whose first child is the outer box.
pub fn assemble(spec: &ContainerSpec, holes: &HoleGeometry) -> CsgNode {
    let outer_box = CsgNode::cuboid(
        OUTER_BOX,
        spec.width.outer,
        spec.depth.outer,
        spec.height.outer_height,
    );

    let inner_cavity = CsgNode::cuboid(
        INNER_HOLE,
        spec.width.inner,
        spec.depth.inner,
        spec.height.inner_height,
    )
    .translate(
        spec.width.wall_thickness,
        spec.depth.wall_thickness,
        spec.height.base_thickness,
    );

    // The cavity is always cut; the rest are filtered candidates.
    let mut subtrahends = vec![inner_cavity];
    subtrahends.extend(cutout_node(BASE_HOLE, holes.base_hole));
    subtrahends.extend(cutout_node(LEFT_RIGHT_WALL_HOLES, holes.left_right));
    subtrahends.extend(cutout_node(FRONT_BACK_WALL_HOLES, holes.front_back));

    debug!(subtrahends = subtrahends.len(), "assembling container solid");
    outer_box.difference(subtrahends)
}

fn cutout_node(name: &str, cutout: Option<Cutout>) -> Option<CsgNode> {
    cutout.map(|c| {
        CsgNode::cuboid(name, c.size.x, c.size.y, c.size.z).translate(
            c.offset.x,
            c.offset.y,
            c.offset.z,
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::axis::ResolvedAxis;
    use crate::height::ResolvedHeight;
    use nalgebra::Vector3;
    use solid_csg::BooleanOp;

    fn spec() -> ContainerSpec {
        ContainerSpec {
            width: ResolvedAxis {
                inner: 10.0,
                outer: 12.0,
                wall_thickness: 1.0,
            },
            depth: ResolvedAxis {
                inner: 10.0,
                outer: 12.0,
                wall_thickness: 1.0,
            },
            height: ResolvedHeight {
                outer_height: 5.0,
                inner_height: 3.0,
                base_thickness: 2.0,
            },
        }
    }

    fn no_holes() -> HoleGeometry {
        HoleGeometry {
            base_hole: None,
            left_right: None,
            front_back: None,
        }
    }

    #[test]
    fn minimal_container_is_box_minus_cavity() {
        let graph = assemble(&spec(), &no_holes());

        match &graph {
            CsgNode::Boolean { op, children } => {
                assert_eq!(*op, BooleanOp::Difference);
                assert_eq!(children.len(), 2);
                assert_eq!(children[0].name(), Some(OUTER_BOX));
            }
            other => panic!("expected difference node, got {:?}", other),
        }
        assert!(graph.contains_named(INNER_HOLE));
        assert!(!graph.contains_named(BASE_HOLE));
    }

    #[test]
    fn cavity_sits_on_the_base_inside_the_walls() {
        let graph = assemble(&spec(), &no_holes());
        let (lo, hi) = match &graph {
            CsgNode::Boolean { children, .. } => children[1].bounds(),
            other => panic!("expected difference node, got {:?}", other),
        };
        assert_eq!(lo, Vector3::new(1.0, 1.0, 2.0));
        assert_eq!(hi, Vector3::new(11.0, 11.0, 5.0));
    }

    #[test]
    fn present_cutouts_appear_as_named_subtrahends() {
        let holes = HoleGeometry {
            base_hole: Some(Cutout {
                size: Vector3::new(4.0, 4.0, 2.0),
                offset: Vector3::new(4.0, 4.0, 0.0),
            }),
            left_right: None,
            front_back: Some(Cutout {
                size: Vector3::new(6.0, 12.0, 2.0),
                offset: Vector3::new(3.0, 0.0, 3.0),
            }),
        };
        let graph = assemble(&spec(), &holes);

        assert!(graph.contains_named(BASE_HOLE));
        assert!(graph.contains_named(FRONT_BACK_WALL_HOLES));
        assert!(!graph.contains_named(LEFT_RIGHT_WALL_HOLES));
        match &graph {
            CsgNode::Boolean { children, .. } => assert_eq!(children.len(), 4),
            other => panic!("expected difference node, got {:?}", other),
        }
    }
}
