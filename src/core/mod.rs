pub mod homework;
pub mod runtime;
