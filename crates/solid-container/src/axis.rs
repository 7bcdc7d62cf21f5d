//! Per-axis dimension resolution.
//!
//! Each horizontal axis (X = width, Y = depth) is resolved independently
//! from a partial set of {inner size, outer size, rounding multiple} plus a
//! wall thickness and an expansion strategy. Many input combinations are
//! legal; each gets its own validation rule so a contradiction fails fast
//! with the exact parameter names, before any geometry is derived.
//!
//! Comparisons are exact, not epsilon-based: with `expand = none` the caller
//! is claiming the numbers already agree, and a silent tolerance would let
//! subtly wrong physical geometry through.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ConfigError, ConfigResult};

/// One horizontal axis of the container footprint.
///
/// Only used to pick parameter names for diagnostics; the resolution logic
/// is identical for both axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// X: width (left/right).
    X,
    /// Y: depth (front/back).
    Y,
}

impl Axis {
    pub(crate) fn inner_param(self) -> &'static str {
        match self {
            Axis::X => "inner_width",
            Axis::Y => "inner_depth",
        }
    }

    pub(crate) fn outer_param(self) -> &'static str {
        match self {
            Axis::X => "outer_width",
            Axis::Y => "outer_depth",
        }
    }

    pub(crate) fn multiple_param(self) -> &'static str {
        match self {
            Axis::X => "width_multiple",
            Axis::Y => "depth_multiple",
        }
    }

    pub(crate) fn wall_param(self) -> &'static str {
        match self {
            Axis::X => "wall_thickness_x",
            Axis::Y => "wall_thickness_y",
        }
    }

    pub(crate) fn expand_param(self) -> &'static str {
        match self {
            Axis::X => "expand_x",
            Axis::Y => "expand_y",
        }
    }

    pub(crate) fn support_param(self) -> &'static str {
        match self {
            Axis::X => "base_support_length_x",
            Axis::Y => "base_support_length_y",
        }
    }
}

/// Policy for resolving an otherwise over- or under-constrained axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpandStrategy {
    /// All given values must already agree exactly.
    #[default]
    None,

    /// The outer size (given directly or rounded up to a multiple) is
    /// authoritative; the inner size is recomputed from it.
    Inside,

    /// Inner and outer sizes are both authoritative; the wall thickness is
    /// recomputed as half their difference.
    Wall,
}

impl std::fmt::Display for ExpandStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ExpandStrategy::None => "none",
            ExpandStrategy::Inside => "inside",
            ExpandStrategy::Wall => "wall",
        };
        write!(f, "{s}")
    }
}

/// Partial dimensional constraints for one axis.
///
/// At least one of `inner`, `outer`, `multiple` must be present.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisConstraint {
    /// Inner (cavity) size.
    pub inner: Option<f64>,

    /// Outer (envelope) size.
    pub outer: Option<f64>,

    /// Rounding modulus: the outer size must be, or is rounded up to, an
    /// exact multiple of this.
    pub multiple: Option<f64>,

    /// Wall material on each side; always strictly positive.
    pub wall_thickness: f64,

    /// How to reconcile redundant or missing dimensions.
    pub expand: ExpandStrategy,
}

/// Fully resolved dimensions for one axis.
///
/// Always satisfies `outer == inner + 2 * wall_thickness` exactly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ResolvedAxis {
    pub inner: f64,
    pub outer: f64,
    pub wall_thickness: f64,
}

/// Smallest multiple of `multiple` that is >= `value`.
///
/// Exact multiples are returned unchanged.
pub fn next_multiple(value: f64, multiple: f64) -> f64 {
    (value / multiple).ceil() * multiple
}

fn is_exact_multiple(value: f64, multiple: f64) -> bool {
    (value / multiple).fract() == 0.0
}

/// Resolve one axis from partial constraints.
///
/// Validation runs in full before any derivation, each rule failing fast
/// with a [`ConfigError`] naming the per-axis parameters. See the module
/// docs for why comparisons are exact.
pub fn resolve_axis(axis: Axis, constraint: &AxisConstraint) -> ConfigResult<ResolvedAxis> {
    let AxisConstraint {
        inner,
        outer,
        multiple,
        mut wall_thickness,
        expand,
    } = *constraint;

    validate_axis(axis, constraint)?;

    // Placeholder for pure expansion: the cavity grows out from nothing.
    let mut inner = inner.unwrap_or(0.0);

    let outer = match outer {
        Some(outer) => outer,
        None => {
            let computed = inner + 2.0 * wall_thickness;
            match multiple {
                Some(multiple) => next_multiple(computed, multiple),
                None => computed,
            }
        }
    };

    match expand {
        ExpandStrategy::Inside => {
            // May go negative; degenerate cavities surface downstream in the
            // hole math or the final geometry rather than here.
            inner = outer - 2.0 * wall_thickness;
        }
        ExpandStrategy::Wall => {
            wall_thickness = (outer - inner) / 2.0;
        }
        ExpandStrategy::None => {
            // Validation already proved the given values agree exactly.
        }
    }

    let resolved = ResolvedAxis {
        inner,
        outer,
        wall_thickness,
    };
    debug!(
        axis = axis.inner_param(),
        inner = resolved.inner,
        outer = resolved.outer,
        wall = resolved.wall_thickness,
        strategy = %expand,
        "axis resolved"
    );
    Ok(resolved)
}

fn validate_axis(axis: Axis, constraint: &AxisConstraint) -> ConfigResult<()> {
    let AxisConstraint {
        inner,
        outer,
        multiple,
        wall_thickness,
        expand,
    } = *constraint;

    if wall_thickness <= 0.0 {
        return Err(ConfigError::NonPositiveWallThickness {
            wall_param: axis.wall_param(),
            value: wall_thickness,
        });
    }

    if inner.is_none() && outer.is_none() && multiple.is_none() {
        return Err(ConfigError::MissingAxisDimension {
            inner_param: axis.inner_param(),
            outer_param: axis.outer_param(),
            multiple_param: axis.multiple_param(),
        });
    }

    // Expansion with only an inner size has no target to expand toward.
    if inner.is_some()
        && outer.is_none()
        && multiple.is_none()
        && expand != ExpandStrategy::None
    {
        return Err(ConfigError::ExpandWithoutTarget {
            expand_param: axis.expand_param(),
            inner_param: axis.inner_param(),
        });
    }

    if let (Some(outer), Some(multiple)) = (outer, multiple) {
        if !is_exact_multiple(outer, multiple) {
            return Err(ConfigError::OuterNotOnMultiple {
                outer_param: axis.outer_param(),
                multiple_param: axis.multiple_param(),
                outer,
                multiple,
            });
        }
    }

    // Without an inner size, only "inside" expansion can absorb the
    // difference between walls and the given/derived outer size.
    if inner.is_none()
        && (outer.is_some() || multiple.is_some())
        && expand != ExpandStrategy::Inside
    {
        return Err(ConfigError::ExpandMustBeInside {
            expand_param: axis.expand_param(),
            inner_param: axis.inner_param(),
        });
    }

    if let (Some(inner), Some(outer)) = (inner, outer) {
        if expand == ExpandStrategy::None && inner + 2.0 * wall_thickness != outer {
            return Err(ConfigError::InconsistentAxis {
                inner_param: axis.inner_param(),
                wall_param: axis.wall_param(),
                outer_param: axis.outer_param(),
                expand_param: axis.expand_param(),
                inner,
                wall: wall_thickness,
                outer,
            });
        }
    }

    if let (Some(inner), None, Some(multiple)) = (inner, outer, multiple) {
        if expand == ExpandStrategy::None {
            let computed = inner + 2.0 * wall_thickness;
            if computed != next_multiple(computed, multiple) {
                return Err(ConfigError::InnerNotOnMultiple {
                    inner_param: axis.inner_param(),
                    wall_param: axis.wall_param(),
                    multiple_param: axis.multiple_param(),
                    expand_param: axis.expand_param(),
                    computed,
                    multiple,
                });
            }
        }
    }

    Ok(())
}
