//! Individual validation rule implementations.
//!
//! Each rule is a pure function over one part of a surface. Leaf rules
//! return the single error they detect; rules over composite values walk
//! their children and combine every violation with
//! [`ValidationError::multiple`].

use crate::layout::{
    constraints::LayoutConstraints,
    domain::{
        Actions, Block, Context, ContextElement, Element, OptionGroup, OptionObject, Section,
        Surface, TextObject, Video,
    },
    error::ValidationError,
};
use std::collections::HashSet;

/// Turns collected errors into a result.
fn finish(errors: Vec<ValidationError>) -> Result<(), ValidationError> {
    ValidationError::multiple(errors).map_or(Ok(()), Err)
}

fn collect(errors: &mut Vec<ValidationError>, result: Result<(), ValidationError>) {
    if let Err(e) = result {
        errors.push(e);
    }
}

/// Validates that `value` is at most `max` characters long.
///
/// # Errors
///
/// Returns `ValidationError::TextTooLong` if the limit is exceeded.
pub fn validate_length(location: &str, value: &str, max: usize) -> Result<(), ValidationError> {
    let actual = value.chars().count();
    if actual > max {
        return Err(ValidationError::TextTooLong {
            location: location.to_owned(),
            max,
            actual,
        });
    }
    Ok(())
}

/// Validates that `value` is non-empty and at most `max` characters long.
///
/// # Errors
///
/// Returns `ValidationError::EmptyValue` or `ValidationError::TextTooLong`.
pub fn validate_required_length(
    location: &str,
    value: &str,
    max: usize,
) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::EmptyValue(location.to_owned()));
    }
    validate_length(location, value, max)
}

/// Validates a text object's string against a character limit.
///
/// # Errors
///
/// Returns `ValidationError::EmptyValue` or `ValidationError::TextTooLong`.
pub fn validate_text(location: &str, text: &TextObject, max: usize) -> Result<(), ValidationError> {
    validate_required_length(location, text.text(), max)
}

/// Validates that a list has between `min` and `max` entries.
///
/// # Errors
///
/// Returns `ValidationError::TooFewItems` or `ValidationError::TooManyItems`.
pub fn validate_item_count(
    location: &str,
    actual: usize,
    min: usize,
    max: usize,
) -> Result<(), ValidationError> {
    if actual < min {
        return Err(ValidationError::TooFewItems {
            location: location.to_owned(),
            min,
            actual,
        });
    }
    if actual > max {
        return Err(ValidationError::TooManyItems {
            location: location.to_owned(),
            max,
            actual,
        });
    }
    Ok(())
}

/// Validates that the surface does not exceed its block ceiling.
///
/// # Errors
///
/// Returns `ValidationError::TooManyBlocks` if the ceiling is exceeded.
pub fn validate_block_count(
    surface: &Surface,
    constraints: &LayoutConstraints,
) -> Result<(), ValidationError> {
    let kind = surface.kind();
    let max = constraints.block_limit(kind);
    let actual = surface.blocks().len();
    if actual > max {
        return Err(ValidationError::TooManyBlocks {
            surface: kind,
            max,
            actual,
        });
    }
    Ok(())
}

/// Validates block ID lengths and that no two blocks share an ID.
///
/// # Errors
///
/// Returns `ValidationError::TextTooLong` or
/// `ValidationError::DuplicateBlockId`, combined when several occur.
pub fn validate_block_ids(
    blocks: &[Block],
    constraints: &LayoutConstraints,
) -> Result<(), ValidationError> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for (index, block) in blocks.iter().enumerate() {
        let Some(block_id) = block.block_id() else {
            continue;
        };
        collect(
            &mut errors,
            validate_length(
                &format!("blocks[{index}].block_id"),
                block_id,
                constraints.max_block_id_length,
            ),
        );
        if !seen.insert(block_id) {
            errors.push(ValidationError::DuplicateBlockId(block_id.to_owned()));
        }
    }

    finish(errors)
}

/// Validates the surface-level fields of modals and home tabs.
///
/// # Errors
///
/// Returns `ValidationError::Multiple` if any field is out of bounds.
pub fn validate_surface_fields(
    surface: &Surface,
    constraints: &LayoutConstraints,
) -> Result<(), ValidationError> {
    let mut errors = Vec::new();
    let (private_metadata, callback_id) = match surface {
        Surface::Message(_) => return Ok(()),
        Surface::Modal(modal) => {
            let max = constraints.max_modal_text_length;
            collect(
                &mut errors,
                validate_required_length("title", &modal.title.text, max),
            );
            for (field, value) in [("submit", &modal.submit), ("close", &modal.close)] {
                if let Some(label) = value {
                    collect(
                        &mut errors,
                        validate_required_length(field, &label.text, max),
                    );
                }
            }
            (&modal.private_metadata, &modal.callback_id)
        }
        Surface::HomeTab(home) => (&home.private_metadata, &home.callback_id),
    };

    collect(
        &mut errors,
        validate_optional_length(
            "private_metadata",
            private_metadata.as_deref(),
            constraints.max_private_metadata_length,
        ),
    );
    collect(
        &mut errors,
        validate_optional_length(
            "callback_id",
            callback_id.as_deref(),
            constraints.max_callback_id_length,
        ),
    );

    finish(errors)
}

/// Validates every block of a surface.
///
/// # Errors
///
/// Returns `ValidationError::Multiple` if any block is invalid.
pub fn validate_blocks(
    blocks: &[Block],
    constraints: &LayoutConstraints,
) -> Result<(), ValidationError> {
    let mut errors = Vec::new();
    for (index, block) in blocks.iter().enumerate() {
        collect(
            &mut errors,
            validate_block(&format!("blocks[{index}]"), block, constraints),
        );
    }
    finish(errors)
}

/// Validates one block and the elements and text objects it holds.
///
/// # Errors
///
/// Returns `ValidationError::Multiple` if the block is invalid.
pub fn validate_block(
    location: &str,
    block: &Block,
    constraints: &LayoutConstraints,
) -> Result<(), ValidationError> {
    let c = constraints;
    let at = |field: &str| format!("{location}.{field}");
    match block {
        Block::Section(section) => validate_section(location, section, c),
        Block::Header(header) => {
            validate_required_length(&at("text"), &header.text.text, c.max_header_text_length)
        }
        Block::Image(image) => finish(vec_of_errors([
            validate_required_length(&at("image_url"), &image.image_url, c.max_url_length),
            validate_required_length(&at("alt_text"), &image.alt_text, c.max_alt_text_length),
        ])),
        Block::Actions(actions) => validate_actions(location, actions, c),
        Block::Context(context) => validate_context(location, context, c),
        Block::Input(input) => {
            let hint = input
                .hint
                .as_ref()
                .map_or(Ok(()), |hint| validate_text(&at("hint"), hint, c.max_hint_length));
            finish(vec_of_errors([
                validate_text(&at("label"), &input.label, c.max_label_length),
                hint,
                validate_element(&at("element"), &input.element, c),
            ]))
        }
        Block::Video(video) => validate_video(location, video, c),
        Block::File(file) => {
            validate_required_length(&at("external_id"), &file.external_id, c.max_block_id_length)
        }
        Block::Divider(_) | Block::RichText(_) => Ok(()),
    }
}

/// Keeps the failures of a fixed set of checks, in order.
fn vec_of_errors<const N: usize>(
    results: [Result<(), ValidationError>; N],
) -> Vec<ValidationError> {
    results.into_iter().filter_map(Result::err).collect()
}

/// Validates a length only when the optional value is present.
fn validate_optional_length(
    location: &str,
    value: Option<&str>,
    max: usize,
) -> Result<(), ValidationError> {
    value.map_or(Ok(()), |present| validate_length(location, present, max))
}

fn validate_section(
    location: &str,
    section: &Section,
    c: &LayoutConstraints,
) -> Result<(), ValidationError> {
    let mut errors = Vec::new();
    if let Some(text) = &section.text {
        collect(
            &mut errors,
            validate_text(&format!("{location}.text"), text, c.max_section_text_length),
        );
    }
    if let Some(fields) = &section.fields {
        let fields_location = format!("{location}.fields");
        collect(
            &mut errors,
            validate_item_count(&fields_location, fields.len(), 0, c.max_section_fields),
        );
        for (index, field) in fields.iter().enumerate() {
            collect(
                &mut errors,
                validate_text(
                    &format!("{fields_location}[{index}]"),
                    field,
                    c.max_section_field_length,
                ),
            );
        }
    }
    if let Some(accessory) = &section.accessory {
        collect(
            &mut errors,
            validate_element(&format!("{location}.accessory"), accessory, c),
        );
    }
    finish(errors)
}

fn validate_actions(
    location: &str,
    actions: &Actions,
    c: &LayoutConstraints,
) -> Result<(), ValidationError> {
    let elements_location = format!("{location}.elements");
    let mut errors = Vec::new();
    collect(
        &mut errors,
        validate_item_count(
            &elements_location,
            actions.elements.len(),
            1,
            c.max_actions_elements,
        ),
    );
    for (index, element) in actions.elements.iter().enumerate() {
        collect(
            &mut errors,
            validate_element(&format!("{elements_location}[{index}]"), element, c),
        );
    }
    finish(errors)
}

fn validate_context(
    location: &str,
    context: &Context,
    c: &LayoutConstraints,
) -> Result<(), ValidationError> {
    let elements_location = format!("{location}.elements");
    let mut errors = Vec::new();
    collect(
        &mut errors,
        validate_item_count(
            &elements_location,
            context.elements.len(),
            1,
            c.max_context_elements,
        ),
    );
    for (index, entry) in context.elements.iter().enumerate() {
        let entry_location = format!("{elements_location}[{index}]");
        let result = match entry {
            ContextElement::Text(text) => {
                validate_text(&entry_location, text, c.max_section_text_length)
            }
            ContextElement::Element(element) => validate_element(&entry_location, element, c),
        };
        collect(&mut errors, result);
    }
    finish(errors)
}

fn validate_video(
    location: &str,
    video: &Video,
    c: &LayoutConstraints,
) -> Result<(), ValidationError> {
    let at = |field: &str| format!("{location}.{field}");
    finish(vec_of_errors([
        validate_text(&at("title"), &video.title, c.max_video_title_length),
        validate_required_length(&at("video_url"), &video.video_url, c.max_url_length),
        validate_optional_length(&at("title_url"), video.title_url.as_deref(), c.max_url_length),
        validate_optional_length(
            &at("thumbnail_url"),
            video.thumbnail_url.as_deref(),
            c.max_url_length,
        ),
        validate_optional_length(
            &at("provider_icon_url"),
            video.provider_icon_url.as_deref(),
            c.max_url_length,
        ),
        validate_optional_length(
            &at("alt_text"),
            video.alt_text.as_deref(),
            c.max_alt_text_length,
        ),
    ]))
}

/// Validates one element, including its options and placeholder.
///
/// # Errors
///
/// Returns `ValidationError::Multiple` if the element is invalid.
pub fn validate_element(
    location: &str,
    element: &Element,
    constraints: &LayoutConstraints,
) -> Result<(), ValidationError> {
    let c = constraints;
    let at = |field: &str| format!("{location}.{field}");

    let action_id = element.action_id().map_or(Ok(()), |id| {
        validate_required_length(&at("action_id"), id, c.max_action_id_length)
    });
    let placeholder = element.placeholder().map_or(Ok(()), |text| {
        validate_text(&at("placeholder"), text, c.max_placeholder_length)
    });
    let choice_limits = (1, c.max_choice_options);
    let own = match element {
        Element::Button(button) => finish(vec_of_errors([
            validate_text(&at("text"), &button.text, c.max_button_text_length),
            validate_optional_length(&at("value"), button.value.as_deref(), c.max_button_value_length),
            validate_optional_length(&at("url"), button.url.as_deref(), c.max_url_length),
        ])),
        Element::Checkboxes(checkboxes) => validate_options(
            &at("options"),
            checkboxes.options.as_deref(),
            choice_limits,
            c,
        ),
        Element::RadioButtons(radio) => {
            validate_options(&at("options"), radio.options.as_deref(), choice_limits, c)
        }
        Element::Overflow(overflow) => validate_options(
            &at("options"),
            overflow.options.as_deref(),
            (c.min_overflow_options, c.max_overflow_options),
            c,
        ),
        Element::StaticSelect(select) => validate_static_choices(
            location,
            select.options.as_deref(),
            select.option_groups.as_deref(),
            c,
        ),
        Element::MultiStaticSelect(select) => validate_static_choices(
            location,
            select.options.as_deref(),
            select.option_groups.as_deref(),
            c,
        ),
        Element::Image(image) => finish(vec_of_errors([
            validate_required_length(&at("image_url"), &image.image_url, c.max_url_length),
            validate_required_length(&at("alt_text"), &image.alt_text, c.max_alt_text_length),
        ])),
        _ => Ok(()),
    };

    finish(vec_of_errors([action_id, placeholder, own]))
}

/// Validates the option count and each option of a menu.
///
/// Absent options are not checked; the decoder preserves absence and the
/// platform reports it.
///
/// # Errors
///
/// Returns `ValidationError::Multiple` if the count or any option is invalid.
pub fn validate_options(
    location: &str,
    options: Option<&[OptionObject]>,
    (min, max): (usize, usize),
    constraints: &LayoutConstraints,
) -> Result<(), ValidationError> {
    let Some(entries) = options else {
        return Ok(());
    };
    let mut errors = Vec::new();
    collect(
        &mut errors,
        validate_item_count(location, entries.len(), min, max),
    );
    for (index, option) in entries.iter().enumerate() {
        collect(
            &mut errors,
            validate_option(&format!("{location}[{index}]"), option, constraints),
        );
    }
    finish(errors)
}

/// Validates an option's label, value and url.
///
/// # Errors
///
/// Returns `ValidationError::Multiple` if the option is invalid.
pub fn validate_option(
    location: &str,
    option: &OptionObject,
    constraints: &LayoutConstraints,
) -> Result<(), ValidationError> {
    let mut errors = Vec::new();
    collect(
        &mut errors,
        validate_text(
            &format!("{location}.text"),
            &option.text,
            constraints.max_option_text_length,
        ),
    );
    collect(
        &mut errors,
        validate_required_length(
            &format!("{location}.value"),
            &option.value,
            constraints.max_option_value_length,
        ),
    );
    collect(
        &mut errors,
        validate_optional_length(
            &format!("{location}.url"),
            option.url.as_deref(),
            constraints.max_url_length,
        ),
    );
    finish(errors)
}

/// Validates the `options` or `option_groups` of a static select.
///
/// # Errors
///
/// Returns `ValidationError::ConflictingFields` if both are set, otherwise
/// the combined errors of whichever is present.
pub fn validate_static_choices(
    location: &str,
    options: Option<&[OptionObject]>,
    option_groups: Option<&[OptionGroup]>,
    constraints: &LayoutConstraints,
) -> Result<(), ValidationError> {
    let c = constraints;
    if options.is_some() && option_groups.is_some() {
        return Err(ValidationError::ConflictingFields {
            location: location.to_owned(),
            first: "options",
            second: "option_groups",
        });
    }

    let mut errors = Vec::new();
    collect(
        &mut errors,
        validate_options(
            &format!("{location}.options"),
            options,
            (1, c.max_select_options),
            c,
        ),
    );
    if let Some(groups) = option_groups {
        let groups_location = format!("{location}.option_groups");
        collect(
            &mut errors,
            validate_item_count(&groups_location, groups.len(), 1, c.max_select_options),
        );
        for (index, group) in groups.iter().enumerate() {
            let group_location = format!("{groups_location}[{index}]");
            collect(
                &mut errors,
                validate_required_length(
                    &format!("{group_location}.label"),
                    &group.label.text,
                    c.max_option_text_length,
                ),
            );
            collect(
                &mut errors,
                validate_options(
                    &format!("{group_location}.options"),
                    Some(group.options.as_slice()),
                    (1, c.max_select_options),
                    c,
                ),
            );
        }
    }
    finish(errors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", 5, Some(ValidationError::EmptyValue("x".into())))]
    #[case("abcde", 5, None)]
    #[case("abcdef", 5, Some(ValidationError::TextTooLong { location: "x".into(), max: 5, actual: 6 }))]
    #[case("ééééé", 5, None)]
    fn required_length_counts_characters(
        #[case] value: &str,
        #[case] max: usize,
        #[case] expected: Option<ValidationError>,
    ) {
        assert_eq!(validate_required_length("x", value, max).err(), expected);
    }

    #[rstest]
    #[case(1, Some(ValidationError::TooFewItems { location: "o".into(), min: 2, actual: 1 }))]
    #[case(2, None)]
    #[case(5, None)]
    #[case(6, Some(ValidationError::TooManyItems { location: "o".into(), max: 5, actual: 6 }))]
    fn item_count_is_inclusive(#[case] actual: usize, #[case] expected: Option<ValidationError>) {
        assert_eq!(validate_item_count("o", actual, 2, 5).err(), expected);
    }

    #[rstest]
    fn finish_is_ok_without_errors() {
        assert!(finish(Vec::new()).is_ok());
    }
}
