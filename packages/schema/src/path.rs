//! Structural addresses into a dashboard document.
//!
//! Paths are plain index tuples. They are resolved against a document by the
//! editor; nothing here checks that an address exists.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Address of a card-holding collection: a view, or a section inside a view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContainerPath {
    pub view: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section: Option<usize>,
}

/// Address of one card inside a container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardPath {
    #[serde(flatten)]
    pub container: ContainerPath,
    pub card: usize,
}

/// Address of one section inside a view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SectionPath {
    pub view: usize,
    pub section: usize,
}

impl ContainerPath {
    pub fn view(view: usize) -> Self {
        Self {
            view,
            section: None,
        }
    }

    pub fn section(view: usize, section: usize) -> Self {
        Self {
            view,
            section: Some(section),
        }
    }

    pub fn split(self) -> (usize, Option<usize>) {
        (self.view, self.section)
    }

    pub fn card(self, card: usize) -> CardPath {
        CardPath {
            container: self,
            card,
        }
    }
}

impl CardPath {
    /// Card placed directly in a view
    pub fn in_view(view: usize, card: usize) -> Self {
        ContainerPath::view(view).card(card)
    }

    pub fn in_section(view: usize, section: usize, card: usize) -> Self {
        ContainerPath::section(view, section).card(card)
    }

    pub fn split(self) -> (ContainerPath, usize) {
        (self.container, self.card)
    }
}

impl SectionPath {
    pub fn new(view: usize, section: usize) -> Self {
        Self { view, section }
    }

    pub fn container(self) -> ContainerPath {
        ContainerPath::section(self.view, self.section)
    }
}

impl From<SectionPath> for ContainerPath {
    fn from(path: SectionPath) -> Self {
        path.container()
    }
}

impl fmt::Display for ContainerPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.section {
            Some(section) => write!(f, "[{}, {}]", self.view, section),
            None => write!(f, "[{}]", self.view),
        }
    }
}

impl fmt::Display for CardPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.container.section {
            Some(section) => write!(f, "[{}, {}, {}]", self.container.view, section, self.card),
            None => write!(f, "[{}, {}]", self.container.view, self.card),
        }
    }
}

impl fmt::Display for SectionPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.view, self.section)
    }
}
