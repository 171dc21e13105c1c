//! Domain records

pub mod teacher;

pub use teacher::Teacher;
