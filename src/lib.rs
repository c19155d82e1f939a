pub mod cli;
pub mod dispatch;
pub mod types;
pub mod utils;
pub mod workout;
