pub mod budget;
mod health;
pub mod proxy;

pub use health::*;
