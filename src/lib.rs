pub mod api;
pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod upstream;

pub use application::{AppError, HolidayService};
pub use domain::*;
