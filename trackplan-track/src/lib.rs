//! Track pieces: centerline paths, their outlines and the factories for every piece type.

pub mod catalog;
pub mod connection;
pub mod data;
pub mod path;
pub mod scale;
pub mod track;
