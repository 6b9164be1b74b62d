#![doc = include_str!("../README.md")]
#![doc = "\n## Example\n"]
#![doc = "\n```rust"]
#![doc = include_str!("../examples/cursor.rs")]
#![doc = "```"]

mod cursor;
mod error;
mod mode;
mod source;
mod step;
pub mod view;

pub use cursor::*;
pub use error::*;
pub use mode::*;
pub use source::*;
pub use step::*;
pub use view::{State, Transition};
