use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// discriminates scheduled transit legs from walking connections.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum EdgeKind {
    Transit,
    Walk,
}

impl Display for EdgeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EdgeKind::Transit => write!(f, "transit"),
            EdgeKind::Walk => write!(f, "walk"),
        }
    }
}
