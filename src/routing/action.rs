//! Conventional resource actions.

use serde::Serialize;
use std::fmt;

/// Controller action a route dispatches to.
///
/// Covers the seven conventional resource actions. Serialized and displayed
/// as the lowercase action name (`"index"`, `"edit"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Index,
    New,
    Show,
    Edit,
    Create,
    Update,
    Destroy,
}

impl Action {
    pub const ALL: [Action; 7] = [
        Action::Index,
        Action::New,
        Action::Show,
        Action::Edit,
        Action::Create,
        Action::Update,
        Action::Destroy,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Index => "index",
            Action::New => "new",
            Action::Show => "show",
            Action::Edit => "edit",
            Action::Create => "create",
            Action::Update => "update",
            Action::Destroy => "destroy",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_serialized_name() {
        for action in Action::ALL {
            let json = serde_json::to_value(action).unwrap();
            assert_eq!(json, action.to_string());
        }
    }
}
