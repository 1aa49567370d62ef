//! Text graph input.

pub mod reader;

pub use reader::GraphReader;
