#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

mod error;
mod exercise;
mod name;
mod set;
mod state;
mod workout;

pub use error::*;
pub use exercise::*;
pub use name::*;
pub use set::*;
pub use state::*;
pub use workout::*;
