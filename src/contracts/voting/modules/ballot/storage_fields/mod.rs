pub mod ballot;
pub mod event_log;
