pub mod catalog;
pub mod config;
pub mod event;
pub mod http;
pub mod recommend;
pub mod ui;
pub mod util;
