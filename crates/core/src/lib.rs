#![forbid(unsafe_code)]

pub mod model;
pub mod rank;

pub use rank::Rank;
