pub mod config;
pub mod errors;
pub mod fs;
pub mod logging;
pub mod resolver;

pub mod commands {
    pub mod rmtrash;
}

pub use errors::{Result, TrashError};
