//! Validation service implementation.
//!
//! Provides the default implementation of the `LayoutValidator` port,
//! combining individual validation rules into a comprehensive validator.

use crate::layout::{
    constraints::LayoutConstraints,
    domain::Surface,
    error::ValidationError,
    ports::validator::{LayoutValidator, ValidationResult},
    validation::rules,
};

/// Default implementation of the layout validator.
///
/// Applies all validation rules in order, collecting errors to provide
/// comprehensive feedback rather than failing on the first error.
///
/// # Examples
///
/// ```
/// use blocksmith::layout::domain::{Header, Message, PlainText, Surface};
/// use blocksmith::layout::ports::validator::LayoutValidator;
/// use blocksmith::layout::validation::DefaultLayoutValidator;
///
/// let mut message = Message::new();
/// message.push_block(Header::new(PlainText::new("Deploy finished")));
///
/// let validator = DefaultLayoutValidator::new();
/// assert!(validator.validate(&Surface::from(message)).is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct DefaultLayoutValidator {
    constraints: LayoutConstraints,
}

impl DefaultLayoutValidator {
    /// Creates a new validator with Slack's limits.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            constraints: LayoutConstraints::SLACK,
        }
    }

    /// Creates a new validator with custom limits.
    #[must_use]
    pub const fn with_config(constraints: LayoutConstraints) -> Self {
        Self { constraints }
    }

    /// Returns the limits in force.
    #[must_use]
    pub const fn config(&self) -> &LayoutConstraints {
        &self.constraints
    }
}

impl Default for DefaultLayoutValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutValidator for DefaultLayoutValidator {
    fn validate(&self, surface: &Surface) -> ValidationResult<()> {
        let mut errors = Vec::new();

        if let Err(e) = self.validate_structure(surface) {
            errors.push(e);
        }

        if let Err(e) = self.validate_content(surface) {
            errors.push(e);
        }

        let result = finish(errors);
        if let Err(e) = &result {
            tracing::debug!(
                surface = %surface.kind(),
                violations = e.errors().len(),
                "surface failed validation"
            );
        }
        result
    }

    fn validate_structure(&self, surface: &Surface) -> ValidationResult<()> {
        let mut errors = Vec::new();

        if let Err(e) = rules::validate_block_count(surface, &self.constraints) {
            errors.push(e);
        }

        if let Err(e) = rules::validate_block_ids(surface.blocks(), &self.constraints) {
            errors.push(e);
        }

        if let Err(e) = rules::validate_surface_fields(surface, &self.constraints) {
            errors.push(e);
        }

        finish(errors)
    }

    fn validate_content(&self, surface: &Surface) -> ValidationResult<()> {
        rules::validate_blocks(surface.blocks(), &self.constraints)
    }
}

/// Combines collected errors, flattening `Multiple` variants.
fn finish(errors: Vec<ValidationError>) -> ValidationResult<()> {
    ValidationError::multiple(errors).map_or(Ok(()), Err)
}
