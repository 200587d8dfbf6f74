pub mod converter;
pub mod error;
pub mod model;
pub mod utils;

pub use converter::config::*;
pub use converter::types::*;
pub use converter::{dump, dump_with_options, supports_dump};
pub use error::*;
pub use model::line::*;
pub use model::timestamp::Timestamp;
