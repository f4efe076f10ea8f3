use std::sync::Arc;

use contracts::shared::date_field::{initialize_in, render};
use contracts::{Clock, DateFieldSettings, SystemClock};
use leptos::prelude::*;

use super::date_input::DateInput;

/// Today's date shown as text and as the value of a date picker
///
/// The date is computed once on creation from `clock` (host clock by default)
/// and held in a `ReactiveCell` owned by this component. The cell is mirrored
/// into a signal through an explicit subscription.
#[component]
pub fn DateField(
    #[prop(optional)] clock: Option<Arc<dyn Clock + Send + Sync>>,
    #[prop(optional)] settings: Option<DateFieldSettings>,
) -> impl IntoView {
    let settings = settings.unwrap_or_default();
    if let Err(e) = settings.validate() {
        log::warn!("DateField: {:#}, truncating in UTC", e);
    }
    let mut cell = match clock {
        Some(clock) => initialize_in(&clock, settings.time_zone),
        None => initialize_in(&SystemClock, settings.time_zone),
    };

    log::debug!(
        "DateField created ({:?}): {}",
        settings.time_zone,
        serde_json::to_string(&render(&cell)).unwrap_or_default()
    );

    let value = RwSignal::new(cell.get());
    let subscription = cell.subscribe(move |v: &String| value.set(v.clone()));
    let cell = StoredValue::new_local(cell);

    on_cleanup(move || {
        cell.update_value(|cell| {
            cell.unsubscribe(subscription);
        });
        log::debug!("DateField dropped");
    });

    view! {
        <div class="date-field">
            <span class="date-field__text">{move || value.get()}</span>
            <DateInput value=value />
        </div>
    }
}
