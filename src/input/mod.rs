pub mod codes;
pub mod map;

pub use map::Intent;
