pub use crate::algorithm::*;
pub use crate::case::*;
pub use crate::cube::*;
pub use crate::error::*;
pub use crate::pattern::*;
pub use crate::r#move::*;
pub use crate::validator::*;

#[cfg(test)]
pub use crate::test::*;
