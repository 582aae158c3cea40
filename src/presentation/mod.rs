pub mod locale;
pub mod picker;
