//! Model of the "today" date field: seed a reactive cell with the current
//! calendar date and describe what gets rendered from it.

use serde::{Deserialize, Serialize};

use super::clock::Clock;
use super::reactive_cell::ReactiveCell;
use super::settings::TimeZonePolicy;

pub const DATE_INPUT_TYPE: &str = "date";

/// Today's date as `YYYY-MM-DD`, truncated in UTC.
pub fn today(clock: &impl Clock) -> String {
    today_in(clock, TimeZonePolicy::Utc)
}

pub fn today_in(clock: &impl Clock, policy: TimeZonePolicy) -> String {
    policy.date_of(clock.now())
}

/// Create the field's cell, seeded with [`today`].
pub fn initialize(clock: &impl Clock) -> ReactiveCell<String> {
    initialize_in(clock, TimeZonePolicy::Utc)
}

pub fn initialize_in(clock: &impl Clock, policy: TimeZonePolicy) -> ReactiveCell<String> {
    ReactiveCell::new(today_in(clock, policy))
}

/// What the field renders for a given value: a text node and a date input.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct DateFieldView {
    pub text: String,
    pub input_type: String,
    pub input_value: String,
}

pub fn render(value: &ReactiveCell<String>) -> DateFieldView {
    value.with(|v| DateFieldView {
        text: v.clone(),
        input_type: DATE_INPUT_TYPE.to_string(),
        input_value: v.clone(),
    })
}
