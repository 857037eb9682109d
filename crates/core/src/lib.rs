#![forbid(unsafe_code)]

pub mod model;
pub mod shuffle;
pub mod text;

pub use shuffle::{build_choices, shuffle};
pub use text::decode_entities;
