pub mod calendar;
pub mod clock;
pub mod date_utils;
pub mod http;
