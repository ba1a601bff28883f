//! Validator port for surface validation.
//!
//! Decoding only checks shape and the block ceiling. The validator checks a
//! surface against the rest of the platform's published limits.

use crate::layout::{domain::Surface, error::ValidationError};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Port for surface validation operations.
///
/// Validation occurs in two layers:
/// 1. Structure validation (block count, block IDs, surface fields)
/// 2. Content validation (per-block and per-element limits)
///
/// # Implementation Notes
///
/// Implementations should:
/// - Collect all validation errors before returning (not fail-fast)
/// - Use `ValidationError::multiple` to combine errors
/// - Be stateless and thread-safe
pub trait LayoutValidator: Send + Sync {
    /// Validates a surface against all rules.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any validation rule fails.
    /// Multiple failures are combined using `ValidationError::Multiple`.
    fn validate(&self, surface: &Surface) -> ValidationResult<()>;

    /// Validates only the structural aspects of a surface.
    ///
    /// Checks:
    /// - The block count is within the surface ceiling
    /// - Block IDs are within length and unique
    /// - Modal and view fields are within length
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if structural validation fails.
    fn validate_structure(&self, surface: &Surface) -> ValidationResult<()>;

    /// Validates the blocks of a surface and everything nested in them.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if content validation fails.
    fn validate_content(&self, surface: &Surface) -> ValidationResult<()>;
}
