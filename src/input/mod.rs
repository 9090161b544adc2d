pub mod handler;
pub mod source;

pub use handler::{InputEvent, InputHandler};
pub use source::{InputSource, TerminalInput};
