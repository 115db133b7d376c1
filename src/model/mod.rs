mod common;
mod round;
mod team;

pub use common::*;
pub use round::*;
pub use team::*;
