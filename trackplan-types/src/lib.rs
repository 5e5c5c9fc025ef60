//! Basic geometric types used by all trackplan crates.

pub mod angle;
pub mod outline;
pub mod rectangle;
pub mod transform;
pub mod vector;
