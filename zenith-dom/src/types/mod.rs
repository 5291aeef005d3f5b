mod color;
mod enums;
mod style;

pub use color::Color;
pub use enums::{Direction, Edges, TextAlign, TextStyle};
pub use style::Style;
