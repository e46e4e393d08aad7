//! # Views
//!
//! Everything the user sees: prompts and alerts, and the text rendering of the
//! active screen.

pub mod dialog;
pub mod mock;
pub mod renderer;

pub use dialog::{Dialog, TerminalDialog};
pub use mock::MockRenderStream;
pub use renderer::{render_form, render_listing, render_screen, RenderStream, TerminalRenderStream};
