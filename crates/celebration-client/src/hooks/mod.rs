mod use_config;
mod use_session;

pub use use_config::*;
pub use use_session::*;
