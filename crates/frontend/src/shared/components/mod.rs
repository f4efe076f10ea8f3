pub mod date_field;
pub mod date_input;
