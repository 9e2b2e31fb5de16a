pub mod analytics;
pub mod calendar;
pub mod habit;
pub mod lang;
pub mod phrases;
pub mod progress;
pub mod time;
