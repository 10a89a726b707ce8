pub mod email;
pub mod mode;
pub mod name_pattern;

pub use email::is_valid_email;
pub use mode::Mode;
pub use name_pattern::NamePattern;
