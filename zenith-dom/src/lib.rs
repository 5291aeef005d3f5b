pub mod element;
pub mod event;
pub mod focus;
pub mod render;
pub mod terminal;
pub mod text;
pub mod types;

pub use element::{find_element, walk, Content, Element};
pub use event::{Event, Key, Modifiers};
pub use focus::{apply_focus, collect_focusable, FocusState};
pub use render::{render_lines, Line, Span};
pub use terminal::Terminal;
pub use types::*;
