//! Typed field extraction over an untyped JSON object.
//!
//! Every accessor treats an absent key and an explicit `null` alike. Optional
//! accessors map both to `None`; required accessors reject them, and reject
//! empty strings, with [`LayoutError::MissingRequiredField`]. A value of the
//! wrong JSON type is always [`LayoutError::InvalidShape`].

use super::{element::decode_element_at, option::decode_option_at, text::decode_text_at};
use crate::layout::{
    domain::{Element, MrkdwnText, OptionGroup, OptionObject, PlainText, TextObject},
    error::LayoutError,
};
use serde_json::{Map, Value};

/// Borrows `value` as an object or reports `path` as mis-shaped.
pub(crate) fn object<'a>(
    value: &'a Value,
    path: &str,
) -> Result<&'a Map<String, Value>, LayoutError> {
    value
        .as_object()
        .ok_or_else(|| LayoutError::invalid_shape(path, "an object"))
}

/// The fields of one JSON object being decoded as a named variant.
pub(crate) struct Fields<'a> {
    map: &'a Map<String, Value>,
    path: &'a str,
    owner: String,
}

impl<'a> Fields<'a> {
    /// Wraps `map`, found at `path`, which is being decoded as `owner`.
    pub(crate) fn new(map: &'a Map<String, Value>, path: &'a str, owner: impl Into<String>) -> Self {
        Self {
            map,
            path,
            owner: owner.into(),
        }
    }

    /// Returns the dotted path of a field.
    pub(crate) fn at(&self, field: &str) -> String {
        if self.path.is_empty() {
            field.to_owned()
        } else {
            format!("{}.{field}", self.path)
        }
    }

    /// Returns the keys of the object that are not in `known`.
    pub(crate) fn unknown_keys(&self, known: &[&str]) -> Vec<&'a str> {
        self.map
            .keys()
            .map(String::as_str)
            .filter(|key| !known.contains(key))
            .collect()
    }

    fn get(&self, field: &str) -> Option<&'a Value> {
        self.map.get(field).filter(|value| !value.is_null())
    }

    fn missing(&self, field: &'static str) -> LayoutError {
        LayoutError::missing(self.owner.clone(), field)
    }

    fn require(&self, field: &'static str) -> Result<&'a Value, LayoutError> {
        self.get(field).ok_or_else(|| self.missing(field))
    }

    pub(crate) fn required_str(&self, field: &'static str) -> Result<String, LayoutError> {
        match self.require(field)? {
            Value::String(text) if text.is_empty() => Err(self.missing(field)),
            Value::String(text) => Ok(text.clone()),
            _ => Err(LayoutError::invalid_shape(self.at(field), "a string")),
        }
    }

    pub(crate) fn optional_str(&self, field: &str) -> Result<Option<String>, LayoutError> {
        self.get(field)
            .map(|value| {
                value
                    .as_str()
                    .map(ToOwned::to_owned)
                    .ok_or_else(|| LayoutError::invalid_shape(self.at(field), "a string"))
            })
            .transpose()
    }

    pub(crate) fn optional_bool(&self, field: &str) -> Result<Option<bool>, LayoutError> {
        self.get(field)
            .map(|value| {
                value
                    .as_bool()
                    .ok_or_else(|| LayoutError::invalid_shape(self.at(field), "a boolean"))
            })
            .transpose()
    }

    pub(crate) fn optional_u32(&self, field: &str) -> Result<Option<u32>, LayoutError> {
        self.get(field)
            .map(|value| {
                value
                    .as_u64()
                    .and_then(|number| u32::try_from(number).ok())
                    .ok_or_else(|| {
                        LayoutError::invalid_shape(self.at(field), "a non-negative integer")
                    })
            })
            .transpose()
    }

    pub(crate) fn optional_i64(&self, field: &str) -> Result<Option<i64>, LayoutError> {
        self.get(field)
            .map(|value| {
                value
                    .as_i64()
                    .ok_or_else(|| LayoutError::invalid_shape(self.at(field), "an integer"))
            })
            .transpose()
    }

    /// Reads a string from a closed set, parsed by `parse`.
    pub(crate) fn optional_enum<T>(
        &self,
        field: &str,
        parse: fn(&str) -> Option<T>,
        expected: &'static str,
    ) -> Result<Option<T>, LayoutError> {
        let Some(raw) = self.optional_str(field)? else {
            return Ok(None);
        };
        parse(&raw).map(Some).ok_or_else(|| LayoutError::InvalidValue {
            location: self.at(field),
            value: raw,
            expected,
        })
    }

    /// Clones an opaque value without interpreting it.
    pub(crate) fn optional_value(&self, field: &str) -> Option<Value> {
        self.get(field).cloned()
    }

    pub(crate) fn optional_strings(&self, field: &str) -> Result<Option<Vec<String>>, LayoutError> {
        let Some(items) = self.optional_array(field)? else {
            return Ok(None);
        };
        items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                item.as_str().map(ToOwned::to_owned).ok_or_else(|| {
                    LayoutError::invalid_shape(format!("{}[{index}]", self.at(field)), "a string")
                })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Some)
    }

    pub(crate) fn required_array(&self, field: &'static str) -> Result<&'a [Value], LayoutError> {
        self.require(field)?
            .as_array()
            .map(Vec::as_slice)
            .ok_or_else(|| LayoutError::invalid_shape(self.at(field), "an array"))
    }

    pub(crate) fn optional_array(&self, field: &str) -> Result<Option<&'a [Value]>, LayoutError> {
        self.get(field)
            .map(|value| {
                value
                    .as_array()
                    .map(Vec::as_slice)
                    .ok_or_else(|| LayoutError::invalid_shape(self.at(field), "an array"))
            })
            .transpose()
    }

    pub(crate) fn required_text(&self, field: &'static str) -> Result<TextObject, LayoutError> {
        decode_text_at(self.require(field)?, &self.at(field))
    }

    pub(crate) fn optional_text(&self, field: &str) -> Result<Option<TextObject>, LayoutError> {
        self.get(field)
            .map(|value| decode_text_at(value, &self.at(field)))
            .transpose()
    }

    /// Decodes a text object that the platform only accepts as `plain_text`.
    pub(crate) fn required_plain_text(&self, field: &'static str) -> Result<PlainText, LayoutError> {
        let location = self.at(field);
        into_plain(decode_text_at(self.require(field)?, &location)?, location)
    }

    pub(crate) fn optional_plain_text(&self, field: &str) -> Result<Option<PlainText>, LayoutError> {
        let Some(value) = self.get(field) else {
            return Ok(None);
        };
        let location = self.at(field);
        into_plain(decode_text_at(value, &location)?, location).map(Some)
    }

    /// Decodes every entry of an optional array of text objects.
    pub(crate) fn optional_texts(&self, field: &str) -> Result<Option<Vec<TextObject>>, LayoutError> {
        let Some(items) = self.optional_array(field)? else {
            return Ok(None);
        };
        let location = self.at(field);
        items
            .iter()
            .enumerate()
            .map(|(index, item)| decode_text_at(item, &format!("{location}[{index}]")))
            .collect::<Result<Vec<_>, _>>()
            .map(Some)
    }

    pub(crate) fn required_element(&self, field: &'static str) -> Result<Element, LayoutError> {
        decode_element_at(self.require(field)?, &self.at(field))
    }

    pub(crate) fn optional_element(&self, field: &str) -> Result<Option<Element>, LayoutError> {
        self.get(field)
            .map(|value| decode_element_at(value, &self.at(field)))
            .transpose()
    }

    pub(crate) fn optional_option(&self, field: &str) -> Result<Option<OptionObject>, LayoutError> {
        self.get(field)
            .map(|value| decode_option_at(value, &self.at(field)))
            .transpose()
    }

    pub(crate) fn optional_options(
        &self,
        field: &str,
    ) -> Result<Option<Vec<OptionObject>>, LayoutError> {
        let Some(items) = self.optional_array(field)? else {
            return Ok(None);
        };
        decode_options(items, &self.at(field)).map(Some)
    }

    pub(crate) fn optional_option_groups(
        &self,
        field: &str,
    ) -> Result<Option<Vec<OptionGroup>>, LayoutError> {
        let Some(items) = self.optional_array(field)? else {
            return Ok(None);
        };
        let location = self.at(field);
        items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let path = format!("{location}[{index}]");
                let group = Fields::new(object(item, &path)?, &path, "option group");
                let label = group.required_plain_text("label")?;
                let options = decode_options(group.required_array("options")?, &group.at("options"))?;
                Ok::<_, LayoutError>(OptionGroup::new(label, options))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Some)
    }
}

fn decode_options(items: &[Value], location: &str) -> Result<Vec<OptionObject>, LayoutError> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| decode_option_at(item, &format!("{location}[{index}]")))
        .collect()
}

fn into_plain(text: TextObject, location: String) -> Result<PlainText, LayoutError> {
    match text {
        TextObject::PlainText(plain) => Ok(plain),
        TextObject::Mrkdwn(_) => Err(LayoutError::InvalidKind {
            location,
            expected: PlainText::KIND,
            actual: MrkdwnText::KIND.to_owned(),
        }),
    }
}
