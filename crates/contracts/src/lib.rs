pub mod shared;

pub use shared::clock::{Clock, FixedClock, SystemClock};
pub use shared::date_field::{initialize, initialize_in, render, today, today_in, DateFieldView};
pub use shared::reactive_cell::{ReactiveCell, SubscriptionId};
pub use shared::settings::{DateFieldSettings, TimeZonePolicy};
