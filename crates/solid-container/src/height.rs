//! Height resolution.
//!
//! Heights are simpler than the horizontal axes: exactly two of
//! {outer height, inner height, base thickness} must be given and the third
//! follows by subtraction. No rounding, no expansion strategies.

use serde::Serialize;
use tracing::debug;

use crate::error::{ConfigError, ConfigResult};

/// Partial height constraints; exactly one field must be absent.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HeightConstraint {
    pub outer_height: Option<f64>,
    pub inner_height: Option<f64>,
    pub base_thickness: Option<f64>,
}

/// Fully resolved heights, satisfying
/// `outer_height == inner_height + base_thickness`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ResolvedHeight {
    pub outer_height: f64,
    pub inner_height: f64,
    pub base_thickness: f64,
}

/// Resolve the vertical dimensions from exactly two given values.
pub fn resolve_height(constraint: &HeightConstraint) -> ConfigResult<ResolvedHeight> {
    let HeightConstraint {
        outer_height,
        inner_height,
        base_thickness,
    } = *constraint;

    let provided = [outer_height, inner_height, base_thickness]
        .iter()
        .filter(|v| v.is_some())
        .count();
    if provided != 2 {
        return Err(ConfigError::HeightParameterCount { provided });
    }

    let resolved = match (outer_height, inner_height, base_thickness) {
        (None, Some(inner), Some(base)) => ResolvedHeight {
            outer_height: inner + base,
            inner_height: inner,
            base_thickness: base,
        },
        (Some(outer), None, Some(base)) => ResolvedHeight {
            outer_height: outer,
            inner_height: outer - base,
            base_thickness: base,
        },
        (Some(outer), Some(inner), None) => ResolvedHeight {
            outer_height: outer,
            inner_height: inner,
            base_thickness: outer - inner,
        },
        // provided == 2 rules everything else out
        _ => unreachable!("height parameter count already validated"),
    };

    debug!(
        outer = resolved.outer_height,
        inner = resolved.inner_height,
        base = resolved.base_thickness,
        "height resolved"
    );
    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigErrorCode;

    #[test]
    fn derives_each_missing_value() {
        let from_inner_base = resolve_height(&HeightConstraint {
            inner_height: Some(3.0),
            base_thickness: Some(2.0),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(from_inner_base.outer_height, 5.0);

        let from_outer_base = resolve_height(&HeightConstraint {
            outer_height: Some(6.0),
            base_thickness: Some(1.0),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(from_outer_base.inner_height, 5.0);

        let from_outer_inner = resolve_height(&HeightConstraint {
            outer_height: Some(5.0),
            inner_height: Some(3.0),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(from_outer_inner.base_thickness, 2.0);
    }

    #[test]
    fn wrong_parameter_counts_are_rejected() {
        for constraint in [
            HeightConstraint::default(),
            HeightConstraint {
                outer_height: Some(5.0),
                ..Default::default()
            },
            HeightConstraint {
                outer_height: Some(5.0),
                inner_height: Some(3.0),
                base_thickness: Some(2.0),
            },
        ] {
            let err = resolve_height(&constraint).unwrap_err();
            assert_eq!(err.code(), ConfigErrorCode::HeightParameterCount);
        }
    }
}
