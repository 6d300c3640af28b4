mod app;
mod message;
mod state;
mod widgets;

pub use app::FilterdeckApp;
pub use message::Message;
pub use state::{AppState, Display};
