//! Platform limits consulted by surfaces, the decoder and the validator.
//!
//! The table is read-only configuration: callers pass it by reference and
//! never mutate a shared instance.

use super::domain::SurfaceKind;
use serde::Deserialize;

/// Slack Block Kit limits.
///
/// Missing keys fall back to [`LayoutConstraints::SLACK`] when the table is
/// deserialised, so hosts can override individual ceilings.
///
/// # Examples
///
/// ```
/// use blocksmith::layout::constraints::LayoutConstraints;
/// use blocksmith::layout::domain::SurfaceKind;
///
/// let constraints = LayoutConstraints::default();
/// assert_eq!(constraints.block_limit(SurfaceKind::Message), 50);
/// assert_eq!(constraints.block_limit(SurfaceKind::Modal), 100);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LayoutConstraints {
    /// Maximum blocks in a message.
    pub max_blocks_per_message: usize,
    /// Maximum blocks in a modal.
    pub max_blocks_per_modal: usize,
    /// Maximum blocks in a home tab.
    pub max_blocks_per_home_tab: usize,
    /// Maximum `block_id` length.
    pub max_block_id_length: usize,
    /// Maximum `action_id` length.
    pub max_action_id_length: usize,
    /// Maximum section text length.
    pub max_section_text_length: usize,
    /// Maximum number of section fields.
    pub max_section_fields: usize,
    /// Maximum length of each section field.
    pub max_section_field_length: usize,
    /// Maximum header text length.
    pub max_header_text_length: usize,
    /// Maximum elements in an actions block.
    pub max_actions_elements: usize,
    /// Maximum entries in a context block.
    pub max_context_elements: usize,
    /// Maximum button label length.
    pub max_button_text_length: usize,
    /// Maximum button value length.
    pub max_button_value_length: usize,
    /// Maximum url length.
    pub max_url_length: usize,
    /// Maximum option label length.
    pub max_option_text_length: usize,
    /// Maximum option value length.
    pub max_option_value_length: usize,
    /// Maximum options in a select menu.
    pub max_select_options: usize,
    /// Minimum options in an overflow menu.
    pub min_overflow_options: usize,
    /// Maximum options in an overflow menu.
    pub max_overflow_options: usize,
    /// Maximum options in a checkbox or radio group.
    pub max_choice_options: usize,
    /// Maximum placeholder length.
    pub max_placeholder_length: usize,
    /// Maximum input label length.
    pub max_label_length: usize,
    /// Maximum input hint length.
    pub max_hint_length: usize,
    /// Maximum image alt text length.
    pub max_alt_text_length: usize,
    /// Maximum video title length.
    pub max_video_title_length: usize,
    /// Maximum modal title, submit and close text length.
    pub max_modal_text_length: usize,
    /// Maximum `private_metadata` length.
    pub max_private_metadata_length: usize,
    /// Maximum `callback_id` length.
    pub max_callback_id_length: usize,
}

impl LayoutConstraints {
    /// The limits Slack publishes for Block Kit.
    pub const SLACK: Self = Self {
        max_blocks_per_message: 50,
        max_blocks_per_modal: 100,
        max_blocks_per_home_tab: 100,
        max_block_id_length: 255,
        max_action_id_length: 255,
        max_section_text_length: 3000,
        max_section_fields: 10,
        max_section_field_length: 2000,
        max_header_text_length: 150,
        max_actions_elements: 25,
        max_context_elements: 10,
        max_button_text_length: 75,
        max_button_value_length: 2000,
        max_url_length: 3000,
        max_option_text_length: 75,
        max_option_value_length: 150,
        max_select_options: 100,
        min_overflow_options: 2,
        max_overflow_options: 5,
        max_choice_options: 10,
        max_placeholder_length: 150,
        max_label_length: 2000,
        max_hint_length: 2000,
        max_alt_text_length: 2000,
        max_video_title_length: 200,
        max_modal_text_length: 24,
        max_private_metadata_length: 3000,
        max_callback_id_length: 255,
    };

    /// Returns the block ceiling for a surface kind.
    #[must_use]
    pub const fn block_limit(&self, surface: SurfaceKind) -> usize {
        match surface {
            SurfaceKind::Message => self.max_blocks_per_message,
            SurfaceKind::Modal => self.max_blocks_per_modal,
            SurfaceKind::HomeTab => self.max_blocks_per_home_tab,
        }
    }
}

impl Default for LayoutConstraints {
    fn default() -> Self {
        Self::SLACK
    }
}
