//! Save-the-date records and their validation pipeline.
//!
//! A submission arrives as a [`SaveDateInput`] whose `event_times` is an
//! ordered list of `{label, time}` entries. [`validate`] checks every field,
//! normalizes the list into a label -> time map and returns a [`NewSaveDate`]
//! ready to be persisted, or every [`FieldError`] found.
//!
//! [`NewSaveDate::full_clean`] re-applies the same rules to a record built
//! directly (without going through [`validate`]); storage calls it before
//! every insert.

use std::borrow::Cow;
use std::sync::LazyLock;

use indexmap::IndexMap;
use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::error::{FieldError, FieldErrors};
use crate::types::DbId;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

pub const FIELD_TITLE: &str = "title";
pub const FIELD_EVENT_SUMMARY: &str = "event_summary";
pub const FIELD_EVENT_TIMES: &str = "event_times";
pub const FIELD_EVENT_CITY: &str = "event_city";

/// Minimum trimmed length of `title`, in characters.
pub const MIN_TITLE_LENGTH: usize = 3;

/// Minimum trimmed length of `event_summary`, in characters.
pub const MIN_EVENT_SUMMARY_LENGTH: usize = 10;

/// Minimum trimmed length of `event_city`, in characters.
pub const MIN_EVENT_CITY_LENGTH: usize = 2;

/// 24-hour `HH:mm`, both parts zero-padded, no seconds.
pub const TIME_PATTERN: &str = r"^([01][0-9]|2[0-3]):[0-5][0-9]$";

static TIME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(TIME_PATTERN).expect("valid regex"));

/// Label -> time-of-day, in submission order.
pub type EventTimes = IndexMap<String, String>;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// One `{label, time}` pair of a submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventTimeEntry {
    pub label: String,
    pub time: String,
}

impl EventTimeEntry {
    pub fn new(label: impl Into<String>, time: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            time: time.into(),
        }
    }
}

/// Untrusted write payload for a save-the-date.
///
/// Missing fields deserialize as empty, so an absent `title` is reported as
/// too short rather than as a malformed body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SaveDateInput {
    pub title: String,
    pub event_subtitle: String,
    pub event_summary: String,
    pub event_times: Vec<EventTimeEntry>,
    pub event_venue: String,
    pub event_address: String,
    pub event_city: String,
}

/// A validated record with its times normalized into a map. Has no id yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct NewSaveDate {
    #[validate(custom(function = "validate_title"))]
    pub title: String,
    pub event_subtitle: String,
    #[validate(custom(function = "validate_event_summary"))]
    pub event_summary: String,
    #[validate(custom(function = "validate_event_time_map"))]
    pub event_times: EventTimes,
    pub event_venue: String,
    pub event_address: String,
    #[validate(custom(function = "validate_event_city"))]
    pub event_city: String,
}

impl NewSaveDate {
    /// Check the record against the same rules [`validate`] enforces.
    pub fn full_clean(&self) -> Result<(), FieldErrors> {
        self.validate().map_err(FieldErrors::from)
    }

    /// The time map as an ordered entry list, the shape clients submit.
    pub fn event_time_entries(&self) -> Vec<EventTimeEntry> {
        self.event_times
            .iter()
            .map(|(label, time)| EventTimeEntry::new(label.clone(), time.clone()))
            .collect()
    }

    /// Attach a storage-assigned id.
    pub fn with_id(self, id: DbId) -> SaveDate {
        SaveDate {
            id,
            title: self.title,
            event_subtitle: self.event_subtitle,
            event_summary: self.event_summary,
            event_times: self.event_times,
            event_venue: self.event_venue,
            event_address: self.event_address,
            event_city: self.event_city,
        }
    }
}

/// A stored save-the-date as exposed to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveDate {
    pub id: DbId,
    pub title: String,
    pub event_subtitle: String,
    pub event_summary: String,
    pub event_times: EventTimes,
    pub event_venue: String,
    pub event_address: String,
    pub event_city: String,
}

// ---------------------------------------------------------------------------
// Validation functions
// ---------------------------------------------------------------------------

/// Whether `time` is a zero-padded 24-hour `HH:mm` string.
pub fn is_valid_time(time: &str) -> bool {
    TIME_RE.is_match(time)
}

/// Fail when the trimmed `value` has fewer than `minimum` characters.
pub fn check_min_length(
    field: &'static str,
    value: &str,
    minimum: usize,
) -> Result<(), FieldError> {
    if value.trim().chars().count() < minimum {
        Err(FieldError::FieldTooShort { field, minimum })
    } else {
        Ok(())
    }
}

/// Run every length check, collecting all failures.
fn check_scalar_fields(title: &str, event_summary: &str, event_city: &str) -> Vec<FieldError> {
    [
        check_min_length(FIELD_TITLE, title, MIN_TITLE_LENGTH),
        check_min_length(FIELD_EVENT_SUMMARY, event_summary, MIN_EVENT_SUMMARY_LENGTH),
        check_min_length(FIELD_EVENT_CITY, event_city, MIN_EVENT_CITY_LENGTH),
    ]
    .into_iter()
    .filter_map(Result::err)
    .collect()
}

/// Convert the submitted entry list into a label -> time map.
///
/// Every entry with a malformed time is reported and no map is built. A
/// repeated label keeps its first position and takes the last time.
pub fn normalize_event_times(entries: &[EventTimeEntry]) -> Result<EventTimes, Vec<FieldError>> {
    let invalid: Vec<FieldError> = entries
        .iter()
        .enumerate()
        .filter(|(_, entry)| !is_valid_time(&entry.time))
        .map(|(index, entry)| FieldError::InvalidTimeFormat {
            index,
            label: entry.label.clone(),
            time: entry.time.clone(),
        })
        .collect();

    if !invalid.is_empty() {
        return Err(invalid);
    }

    let mut times = EventTimes::with_capacity(entries.len());
    for entry in entries {
        times.insert(entry.label.clone(), entry.time.clone());
    }
    Ok(times)
}

/// Validate a submission and normalize it into a [`NewSaveDate`].
///
/// All length errors are reported together; invalid times are reported per
/// entry alongside them.
pub fn validate(input: &SaveDateInput) -> Result<NewSaveDate, FieldErrors> {
    let mut errors: FieldErrors =
        check_scalar_fields(&input.title, &input.event_summary, &input.event_city)
            .into_iter()
            .collect();

    let event_times = match normalize_event_times(&input.event_times) {
        Ok(times) => Some(times),
        Err(invalid) => {
            errors.extend(invalid);
            None
        }
    };

    match event_times {
        Some(event_times) if errors.is_empty() => Ok(NewSaveDate {
            title: input.title.clone(),
            event_subtitle: input.event_subtitle.clone(),
            event_summary: input.event_summary.clone(),
            event_times,
            event_venue: input.event_venue.clone(),
            event_address: input.event_address.clone(),
            event_city: input.event_city.clone(),
        }),
        _ => Err(errors),
    }
}

// ---------------------------------------------------------------------------
// Field validators for the `Validate` derive
// ---------------------------------------------------------------------------

fn to_validation_error(error: FieldError) -> ValidationError {
    let code = match error {
        FieldError::FieldTooShort { .. } => "too_short",
        FieldError::InvalidTimeFormat { .. } => "invalid_time",
    };
    ValidationError::new(code).with_message(Cow::Owned(error.to_string()))
}

fn validate_title(title: &str) -> Result<(), ValidationError> {
    check_min_length(FIELD_TITLE, title, MIN_TITLE_LENGTH).map_err(to_validation_error)
}

fn validate_event_summary(summary: &str) -> Result<(), ValidationError> {
    check_min_length(FIELD_EVENT_SUMMARY, summary, MIN_EVENT_SUMMARY_LENGTH)
        .map_err(to_validation_error)
}

fn validate_event_city(city: &str) -> Result<(), ValidationError> {
    check_min_length(FIELD_EVENT_CITY, city, MIN_EVENT_CITY_LENGTH).map_err(to_validation_error)
}

fn validate_event_time_map(times: &EventTimes) -> Result<(), ValidationError> {
    // The derive reports one error per field; use the first bad entry.
    match times
        .iter()
        .enumerate()
        .find(|(_, (_, time))| !is_valid_time(time))
    {
        Some((index, (label, time))) => Err(to_validation_error(FieldError::InvalidTimeFormat {
            index,
            label: label.clone(),
            time: time.clone(),
        })),
        None => Ok(()),
    }
}
