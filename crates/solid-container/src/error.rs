//! Error types for container configuration with rich diagnostics.
//!
//! Every failure here is a rejection of the whole build request: the
//! configuration over- or under-constrains the geometry and no partial
//! container spec is ever exposed. Errors carry:
//! - Machine-readable `CONTAINER-XXXX` codes for programmatic handling
//! - The offending parameter names, per axis
//! - Remediation hints (change `expand`, provide fewer or exact dimensions)
//! - Terminal display via miette

use miette::Diagnostic;
use thiserror::Error;

/// Result type alias for container configuration.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Machine-readable error codes for configuration failures.
///
/// Codes follow the pattern `CONTAINER-XXXX` where:
/// - 10xx = per-axis dimension errors
/// - 11xx = height errors
/// - 12xx = hole/support errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigErrorCode {
    /// CONTAINER-1001: Wall thickness is zero or negative
    NonPositiveWallThickness = 1001,
    /// CONTAINER-1002: No inner size, outer size, or multiple given
    MissingAxisDimension = 1002,
    /// CONTAINER-1003: Expansion requested with nothing to expand toward
    ExpandWithoutTarget = 1003,
    /// CONTAINER-1004: Outer size is not a multiple of the rounding modulus
    OuterNotOnMultiple = 1004,
    /// CONTAINER-1005: Inner size absent but expand is not "inside"
    ExpandMustBeInside = 1005,
    /// CONTAINER-1006: inner + 2*wall != outer with expand "none"
    InconsistentAxis = 1006,
    /// CONTAINER-1007: inner + 2*wall is not already on the multiple with expand "none"
    InnerNotOnMultiple = 1007,

    /// CONTAINER-1101: Not exactly two height parameters given
    HeightParameterCount = 1101,

    /// CONTAINER-1201: Support length exceeds half the inner size
    SupportTooLong = 1201,
}

impl ConfigErrorCode {
    /// Returns the error code as a string in the format `CONTAINER-XXXX`.
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigErrorCode::NonPositiveWallThickness => "CONTAINER-1001",
            ConfigErrorCode::MissingAxisDimension => "CONTAINER-1002",
            ConfigErrorCode::ExpandWithoutTarget => "CONTAINER-1003",
            ConfigErrorCode::OuterNotOnMultiple => "CONTAINER-1004",
            ConfigErrorCode::ExpandMustBeInside => "CONTAINER-1005",
            ConfigErrorCode::InconsistentAxis => "CONTAINER-1006",
            ConfigErrorCode::InnerNotOnMultiple => "CONTAINER-1007",
            ConfigErrorCode::HeightParameterCount => "CONTAINER-1101",
            ConfigErrorCode::SupportTooLong => "CONTAINER-1201",
        }
    }
}

impl std::fmt::Display for ConfigErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A configuration rejected by dimension resolution.
///
/// Parameter names in messages are the per-axis spellings the caller used
/// (`inner_width` vs `inner_depth`), so diagnostics point at the exact
/// offending input.
#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    /// Wall thickness must be strictly positive.
    #[error("\"{wall_param}\" must be greater than zero (got {value})")]
    #[diagnostic(
        code(container::axis::wall_thickness),
        help("Walls need physical material; use a small positive thickness such as 0.8")
    )]
    NonPositiveWallThickness { wall_param: &'static str, value: f64 },

    /// An axis with no dimension at all cannot be resolved.
    #[error(
        "at least one of \"{inner_param}\", \"{outer_param}\", \"{multiple_param}\" must be provided"
    )]
    #[diagnostic(code(container::axis::missing_dimension))]
    MissingAxisDimension {
        inner_param: &'static str,
        outer_param: &'static str,
        multiple_param: &'static str,
    },

    /// Expansion is meaningless when only the inner size is known.
    #[error("\"{expand_param}\" must be \"none\" when only \"{inner_param}\" is provided")]
    #[diagnostic(
        code(container::axis::expand_without_target),
        help("Provide an outer size or a multiple to expand toward, or set the strategy to \"none\"")
    )]
    ExpandWithoutTarget {
        expand_param: &'static str,
        inner_param: &'static str,
    },

    /// An explicit outer size must land exactly on the rounding modulus.
    #[error("\"{outer_param}\" ({outer}) is not a multiple of \"{multiple_param}\" ({multiple})")]
    #[diagnostic(code(container::axis::outer_not_on_multiple))]
    OuterNotOnMultiple {
        outer_param: &'static str,
        multiple_param: &'static str,
        outer: f64,
        multiple: f64,
    },

    /// Without an inner size there is nothing to hold fixed unless the
    /// inside expands.
    #[error("\"{expand_param}\" must be \"inside\" when \"{inner_param}\" is not provided")]
    #[diagnostic(code(container::axis::expand_must_be_inside))]
    ExpandMustBeInside {
        expand_param: &'static str,
        inner_param: &'static str,
    },

    /// Inner, wall, and outer were all given but disagree.
    #[error(
        "invalid \"{inner_param}\", \"{wall_param}\", \"{outer_param}\" combination for \"{expand_param}\" set to \"none\": {inner} + 2 * {wall} != {outer}"
    )]
    #[diagnostic(
        code(container::axis::inconsistent),
        help(
            "Either change \"{expand_param}\" to \"wall\" or \"inside\", provide fewer dimensions, or provide exact dimensions"
        )
    )]
    InconsistentAxis {
        inner_param: &'static str,
        wall_param: &'static str,
        outer_param: &'static str,
        expand_param: &'static str,
        inner: f64,
        wall: f64,
        outer: f64,
    },

    /// The derived outer size does not sit on the modulus and nothing may
    /// expand to absorb the difference.
    #[error(
        "invalid \"{inner_param}\", \"{wall_param}\", \"{multiple_param}\" combination for \"{expand_param}\" set to \"none\": {computed} is not a multiple of {multiple}"
    )]
    #[diagnostic(
        code(container::axis::inner_not_on_multiple),
        help(
            "Either change \"{expand_param}\" to \"wall\" or \"inside\", provide fewer dimensions, or provide exact dimensions"
        )
    )]
    InnerNotOnMultiple {
        inner_param: &'static str,
        wall_param: &'static str,
        multiple_param: &'static str,
        expand_param: &'static str,
        computed: f64,
        multiple: f64,
    },

    /// Heights are resolved from exactly two of the three parameters.
    #[error(
        "exactly two of \"outer_height\", \"inner_height\", \"base_thickness\" must be provided (got {provided})"
    )]
    #[diagnostic(code(container::height::parameter_count))]
    HeightParameterCount { provided: usize },

    /// A support length so large the base hole footprint would be negative.
    #[error("\"{support_param}\" ({support}) is too large for \"{inner_param}\" ({inner})")]
    #[diagnostic(
        code(container::holes::support_too_long),
        help("Support legs are kept on both sides; the length must not exceed half the inner size")
    )]
    SupportTooLong {
        support_param: &'static str,
        inner_param: &'static str,
        support: f64,
        inner: f64,
    },
}

impl ConfigError {
    /// Returns the machine-readable error code.
    pub fn code(&self) -> ConfigErrorCode {
        match self {
            ConfigError::NonPositiveWallThickness { .. } => {
                ConfigErrorCode::NonPositiveWallThickness
            }
            ConfigError::MissingAxisDimension { .. } => ConfigErrorCode::MissingAxisDimension,
            ConfigError::ExpandWithoutTarget { .. } => ConfigErrorCode::ExpandWithoutTarget,
            ConfigError::OuterNotOnMultiple { .. } => ConfigErrorCode::OuterNotOnMultiple,
            ConfigError::ExpandMustBeInside { .. } => ConfigErrorCode::ExpandMustBeInside,
            ConfigError::InconsistentAxis { .. } => ConfigErrorCode::InconsistentAxis,
            ConfigError::InnerNotOnMultiple { .. } => ConfigErrorCode::InnerNotOnMultiple,
            ConfigError::HeightParameterCount { .. } => ConfigErrorCode::HeightParameterCount,
            ConfigError::SupportTooLong { .. } => ConfigErrorCode::SupportTooLong,
        }
    }
}
