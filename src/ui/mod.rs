pub mod messages;
pub mod tables;
