pub mod clock;
pub mod date_field;
pub mod date_utils;
pub mod reactive_cell;
pub mod settings;
