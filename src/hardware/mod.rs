pub mod revision;
pub mod source;
pub mod tables;
