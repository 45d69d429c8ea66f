pub mod admin;
pub mod videos;

pub use admin::*;
pub use videos::*;
