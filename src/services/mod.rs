pub mod dispatcher;
pub mod metrics;
pub mod query;
pub mod recommendations;
pub mod user_actions;

pub use dispatcher::{execute, process_action, process_batch};
