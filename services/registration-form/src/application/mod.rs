mod error;
pub mod opts;
pub mod replay;

pub use self::error::Error;
