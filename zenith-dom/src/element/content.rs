#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Content {
    /// Occupies no space. Used for collapsed panels.
    #[default]
    None,
    Text(String),
    Children(Vec<super::Element>),
}
