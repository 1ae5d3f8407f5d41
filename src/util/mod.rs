pub mod fmt;
pub mod panic;
pub mod result;
