pub mod arguments;
pub mod call;
pub mod config;
pub mod forms;
pub mod observer;
pub mod onchain;
pub mod render;
pub mod run;
pub mod submitter;
pub mod traits;

pub use run::{Outcome, run};
