//! Rendering configuration.

use serde::{Deserialize, Serialize};

/// Guide glyphs drawn in front of each rendered joint.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderStyle {
    /// Box-drawing guides: `├── `, `└── `, `│   `.
    #[default]
    Unicode,
    /// Plain ASCII guides: `|-- `, `` `-- ``, `|   `.
    Ascii,
}

impl RenderStyle {
    /// Prefix for a child that has later siblings.
    pub fn branch(self) -> &'static str {
        match self {
            RenderStyle::Unicode => "├── ",
            RenderStyle::Ascii => "|-- ",
        }
    }

    /// Prefix for the last child of its parent.
    pub fn last_branch(self) -> &'static str {
        match self {
            RenderStyle::Unicode => "└── ",
            RenderStyle::Ascii => "`-- ",
        }
    }

    /// Continuation under an ancestor that still has siblings below.
    pub fn vertical(self) -> &'static str {
        match self {
            RenderStyle::Unicode => "│   ",
            RenderStyle::Ascii => "|   ",
        }
    }

    pub fn blank(self) -> &'static str {
        "    "
    }
}

/// Options for [`render`](crate::render::render).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderConfig {
    #[serde(default)]
    pub style: RenderStyle,
    /// Append the local joint index as ` [i]` to every line.
    #[serde(default)]
    pub show_indices: bool,
}

impl RenderConfig {
    pub fn ascii() -> Self {
        Self {
            style: RenderStyle::Ascii,
            ..Self::default()
        }
    }

    pub fn with_indices(mut self) -> Self {
        self.show_indices = true;
        self
    }
}
