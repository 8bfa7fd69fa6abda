pub mod point;

pub use point::{ParsePointError, Point};
