pub mod events;
pub mod profile;
