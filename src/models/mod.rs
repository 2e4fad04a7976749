pub mod daily_log;
pub mod project;
pub mod task;
pub mod worker;
