//! Core types for the Cviceni lesson.

mod names;
mod power;
mod proptests;
mod student;

pub use names::NameList;
pub use power::{format_number, power};
pub use student::Student;
