//! Line renderer: flattens an element tree into styled terminal lines.
//!
//! Columns stack their children vertically, rows place them side by side.
//! Elements with `Content::None` produce no lines at all, so collapsed
//! panels take up no space.

use crate::element::{Content, Element};
use crate::text::{align_offset, display_width, take_width, wrap_words};
use crate::types::{Direction, Style};

/// A run of text sharing one style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub style: Style,
}

/// One rendered terminal line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Line {
    pub spans: Vec<Span>,
}

impl Line {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, text: impl Into<String>, style: Style) {
        let text = text.into();
        if !text.is_empty() {
            self.spans.push(Span { text, style });
        }
    }

    pub fn append(&mut self, other: Line) {
        self.spans.extend(other.spans);
    }

    pub fn width(&self) -> usize {
        self.spans.iter().map(|span| display_width(&span.text)).sum()
    }

    /// The line's text without styling.
    pub fn plain(&self) -> String {
        self.spans.iter().map(|span| span.text.as_str()).collect()
    }

    /// Cut or pad the line to exactly `width` cells.
    pub fn fit(self, width: usize, fill: Style) -> Line {
        let mut fitted = Line::new();
        let mut remaining = width;
        for span in self.spans {
            if remaining == 0 {
                break;
            }
            let text = take_width(&span.text, remaining);
            remaining -= display_width(&text);
            fitted.push(text, span.style);
        }
        fitted.push(" ".repeat(remaining), fill);
        fitted
    }
}

/// Render `root` into lines no wider than `width` cells.
pub fn render_lines(root: &Element, width: usize) -> Vec<Line> {
    render_element(root, width, Style::default())
}

fn render_element(element: &Element, available: usize, inherited: Style) -> Vec<Line> {
    let style = inherited.patch(element.effective_style());
    let outer = element
        .width
        .map_or(available, |w| usize::from(w).min(available));
    let inner = outer.saturating_sub(usize::from(element.padding.horizontal()));

    let body = match &element.content {
        Content::None => return Vec::new(),
        Content::Text(text) => wrap_words(text, inner)
            .into_iter()
            .map(|text| {
                let mut line = Line::new();
                let offset = align_offset(display_width(&text), inner, element.text_align);
                line.push(" ".repeat(offset), style);
                line.push(text, style);
                line
            })
            .collect(),
        Content::Children(children) => match element.direction {
            Direction::Column => stack_column(children, inner, element.gap, style),
            Direction::Row => stack_row(children, inner, element.gap, style),
        },
    };

    let padding = element.padding;
    let mut lines = Vec::with_capacity(body.len() + usize::from(padding.top + padding.bottom));
    lines.extend((0..padding.top).map(|_| Line::new()));
    for line in body {
        let mut padded = Line::new();
        padded.push(" ".repeat(usize::from(padding.left)), style);
        padded.append(line);
        lines.push(padded);
    }
    lines.extend((0..padding.bottom).map(|_| Line::new()));

    if element.width.is_some() {
        lines = lines.into_iter().map(|line| line.fit(outer, style)).collect();
    }
    lines
}

fn stack_column(children: &[Element], width: usize, gap: u16, style: Style) -> Vec<Line> {
    let mut lines = Vec::new();
    for child in children {
        let block = render_element(child, width, style);
        if block.is_empty() {
            continue;
        }
        if !lines.is_empty() {
            lines.extend((0..gap).map(|_| Line::new()));
        }
        lines.extend(block);
    }
    lines
}

fn stack_row(children: &[Element], width: usize, gap: u16, style: Style) -> Vec<Line> {
    let gap = usize::from(gap);
    let mut blocks: Vec<(usize, Vec<Line>)> = Vec::new();
    let mut used = 0;

    for child in children {
        let spacing = if blocks.is_empty() { 0 } else { gap };
        let remaining = width.saturating_sub(used + spacing);
        if remaining == 0 {
            break;
        }
        let block = render_element(child, remaining, style);
        if block.is_empty() {
            continue;
        }
        let block_width = child
            .width
            .map(usize::from)
            .unwrap_or_else(|| block.iter().map(Line::width).max().unwrap_or(0))
            .min(remaining);
        used += spacing + block_width;
        blocks.push((block_width, block));
    }

    let height = blocks.iter().map(|(_, block)| block.len()).max().unwrap_or(0);
    let mut lines = Vec::with_capacity(height);
    for row in 0..height {
        let mut line = Line::new();
        for (index, (block_width, block)) in blocks.iter().enumerate() {
            if index > 0 {
                line.push(" ".repeat(gap), style);
            }
            let is_last = index + 1 == blocks.len();
            match block.get(row) {
                Some(part) if is_last => line.append(part.clone()),
                Some(part) => line.append(part.clone().fit(*block_width, style)),
                None if is_last => {}
                None => line.push(" ".repeat(*block_width), style),
            }
        }
        lines.push(line);
    }
    lines
}
