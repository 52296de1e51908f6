//! Named-input plugins for the built-in calculators.

pub mod age;
pub mod cgpa;
pub mod emi;
pub mod gst;
