//! Move notation for the 3x3 cube, simulated on a cubie model and reduced to the OLL preview
//! pattern shown next to each case.
//!
//! Provides:
//! - a parser for notation with wide and slice moves, rotations and repeated groups
//! - canonical printing and inversion of move sequences
//! - the cubie model those moves are applied to
//! - preview pattern extraction and validation of case data

#[cfg(test)]
#[macro_use]
extern crate quickcheck_macros;

pub mod algorithm;
pub mod case;
pub mod cube;
pub mod error;
pub mod r#move;
pub mod pattern;
pub mod prelude;
pub mod validator;

#[cfg(test)]
mod test;

pub use algorithm::{invert, normalize, Algorithm};
pub use error::ParseError;
pub use pattern::{preview_pattern, Pattern};
