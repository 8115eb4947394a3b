//! Front-end flow: screens, input events, and the text front-end.
//!
//! - `App`: owns the match and services, routes `UiEvent`s, builds frames
//! - `Screen` / `Button` / `UiEvent`: screen-flow vocabulary
//! - `TerminalRenderer` / `parse_command`: stdin/stdout front-end

mod app;
mod screen;
pub mod terminal;
pub mod text;

pub use app::App;
pub use screen::{Button, Screen, UiEvent};
pub use terminal::{parse_command, TerminalRenderer};
