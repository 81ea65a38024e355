use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// User interaction signals raised by the editable surface.
///
/// Names follow the event names hosts already use so settings files can
/// list them directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Interaction {
    KeyDown,
    KeyUp,
    #[serde(rename = "mousedown")]
    PointerDown,
    #[serde(rename = "mouseup")]
    PointerUp,
    Input,
    Focus,
}

impl Interaction {
    pub const ALL: [Interaction; 6] = [
        Interaction::KeyDown,
        Interaction::KeyUp,
        Interaction::PointerDown,
        Interaction::PointerUp,
        Interaction::Input,
        Interaction::Focus,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Interaction::KeyDown => "keydown",
            Interaction::KeyUp => "keyup",
            Interaction::PointerDown => "mousedown",
            Interaction::PointerUp => "mouseup",
            Interaction::Input => "input",
            Interaction::Focus => "focus",
        }
    }

    /// Release events: the point where the caret has settled
    pub fn is_release(&self) -> bool {
        matches!(self, Interaction::KeyUp | Interaction::PointerUp)
    }
}

impl fmt::Display for Interaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownInteraction(pub String);

impl fmt::Display for UnknownInteraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown interaction: {}", self.0)
    }
}

impl std::error::Error for UnknownInteraction {}

impl FromStr for Interaction {
    type Err = UnknownInteraction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Interaction::ALL
            .into_iter()
            .find(|i| i.name() == wanted)
            .ok_or_else(|| UnknownInteraction(s.to_string()))
    }
}

/// What made the grid open the editor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OpenEvent {
    /// Typing into a selected cell, or Enter/F2
    Keyboard,
    DoubleClick,
    #[default]
    Programmatic,
}
