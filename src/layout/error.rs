//! Error types for decoding, building and validating layouts.
//!
//! Uses `thiserror` for ergonomic error handling with typed variants
//! that can be inspected by callers.

use super::domain::SurfaceKind;
use std::fmt;
use thiserror::Error;

/// The dispatch level at which a `type` discriminator was read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KindPosition {
    /// A top-level surface (message, modal, home tab).
    Surface,
    /// A block inside a surface.
    Block,
    /// An element inside a block.
    Element,
    /// A text object.
    TextObject,
}

impl fmt::Display for KindPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Surface => "surface",
            Self::Block => "block",
            Self::Element => "element",
            Self::TextObject => "text object",
        };
        f.write_str(label)
    }
}

/// Errors raised while decoding a payload or building a surface.
///
/// Decoding is fail-fast: the first defect found in document order is the
/// one reported.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// The payload string is not well-formed JSON.
    #[error("invalid JSON payload: {0}")]
    InvalidJson(String),

    /// A value does not have the JSON type its position requires.
    #[error("invalid shape at {location}: expected {expected}")]
    InvalidShape {
        /// Dotted path to the offending value.
        location: String,
        /// Description of the expected JSON type.
        expected: &'static str,
    },

    /// A field required by a variant is absent, null or empty.
    #[error("{kind} is missing required field '{field}'")]
    MissingRequiredField {
        /// The variant that requires the field.
        kind: String,
        /// The missing field name.
        field: &'static str,
    },

    /// A `type` discriminator names no known variant at its position.
    #[error("unsupported {position} type '{kind}'")]
    UnsupportedKind {
        /// The dispatch level.
        position: KindPosition,
        /// The unrecognised discriminator.
        kind: String,
    },

    /// A known variant appears where the platform forbids it.
    #[error("invalid kind at {location}: expected {expected}, found '{actual}'")]
    InvalidKind {
        /// Dotted path to the offending value.
        location: String,
        /// The kind the position accepts.
        expected: &'static str,
        /// The kind that was supplied.
        actual: String,
    },

    /// A string outside a closed set of accepted values.
    #[error("invalid value '{value}' at {location}: expected one of {expected}")]
    InvalidValue {
        /// Dotted path to the offending value.
        location: String,
        /// The rejected value.
        value: String,
        /// The accepted values.
        expected: &'static str,
    },

    /// A surface holds more blocks than its kind allows.
    #[error("{surface} has {actual} blocks, exceeds limit of {max}")]
    LimitExceeded {
        /// The surface kind whose ceiling was exceeded.
        surface: SurfaceKind,
        /// The ceiling for that surface kind.
        max: usize,
        /// The actual number of blocks.
        actual: usize,
    },

    /// The typed model could not be flattened to JSON.
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl LayoutError {
    /// Creates an invalid shape error.
    #[must_use]
    pub fn invalid_shape(location: impl Into<String>, expected: &'static str) -> Self {
        Self::InvalidShape {
            location: location.into(),
            expected,
        }
    }

    /// Creates a missing required field error.
    #[must_use]
    pub fn missing(kind: impl Into<String>, field: &'static str) -> Self {
        Self::MissingRequiredField {
            kind: kind.into(),
            field,
        }
    }

    /// Creates an unsupported kind error.
    #[must_use]
    pub fn unsupported(position: KindPosition, kind: impl Into<String>) -> Self {
        Self::UnsupportedKind {
            position,
            kind: kind.into(),
        }
    }
}

impl From<serde_json::Error> for LayoutError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

/// Errors reported by the constraint validator.
///
/// Unlike [`LayoutError`], validation collects every violation it finds.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A surface holds more blocks than its kind allows.
    #[error("{surface} has {actual} blocks, exceeds limit of {max}")]
    TooManyBlocks {
        /// The surface kind.
        surface: SurfaceKind,
        /// The ceiling for that surface kind.
        max: usize,
        /// The actual number of blocks.
        actual: usize,
    },

    /// A string exceeds its character limit.
    #[error("{location} is {actual} characters, exceeds limit of {max}")]
    TextTooLong {
        /// Dotted path to the string.
        location: String,
        /// The character limit.
        max: usize,
        /// The actual character count.
        actual: usize,
    },

    /// A list holds more entries than allowed.
    #[error("{location} has {actual} items, exceeds limit of {max}")]
    TooManyItems {
        /// Dotted path to the list.
        location: String,
        /// The item limit.
        max: usize,
        /// The actual item count.
        actual: usize,
    },

    /// A list holds fewer entries than required.
    #[error("{location} has {actual} items, requires at least {min}")]
    TooFewItems {
        /// Dotted path to the list.
        location: String,
        /// The required minimum.
        min: usize,
        /// The actual item count.
        actual: usize,
    },

    /// A string that must carry content is empty.
    #[error("{0} cannot be empty")]
    EmptyValue(String),

    /// Two mutually exclusive fields are both set.
    #[error("{location} cannot set both '{first}' and '{second}'")]
    ConflictingFields {
        /// Dotted path to the owning value.
        location: String,
        /// The first field.
        first: &'static str,
        /// The second field.
        second: &'static str,
    },

    /// Two blocks in one surface share a `block_id`.
    #[error("duplicate block_id '{0}'")]
    DuplicateBlockId(String),

    /// Multiple validation errors occurred.
    #[error("multiple validation errors: {}", format_errors(.0))]
    Multiple(Vec<Self>),
}

fn format_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationError {
    /// Combines validation errors into a single error.
    ///
    /// A single error is returned as-is and nested `Multiple` values are
    /// flattened. Returns `None` when `errors` is empty.
    #[must_use]
    pub fn multiple(errors: Vec<Self>) -> Option<Self> {
        let mut flat = Vec::with_capacity(errors.len());
        for error in errors {
            match error {
                Self::Multiple(inner) => flat.extend(inner),
                other => flat.push(other),
            }
        }
        if flat.len() > 1 {
            return Some(Self::Multiple(flat));
        }
        flat.pop()
    }

    /// Returns `true` if this error represents multiple validation failures.
    #[must_use]
    pub const fn is_multiple(&self) -> bool {
        matches!(self, Self::Multiple(_))
    }

    /// Returns the individual errors, or a one-element slice for a single error.
    #[must_use]
    pub fn errors(&self) -> &[Self] {
        match self {
            Self::Multiple(errors) => errors,
            other => std::slice::from_ref(other),
        }
    }
}
