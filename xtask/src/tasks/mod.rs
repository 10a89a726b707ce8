pub mod ci;
pub mod frontend;
