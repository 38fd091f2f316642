pub mod app;
pub mod banner;
pub mod button;
pub mod history;
pub mod picker;
pub mod spinner;
