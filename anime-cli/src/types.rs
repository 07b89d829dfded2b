// ABOUTME: Type definitions for watchlist tags shown in tables
// ABOUTME: Maps stored tag names onto the well-known watch states

use crate::constants::tags;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum TagKind {
    ToWatch,
    Watching,
    Watched,
    Custom(String),
}

impl From<&str> for TagKind {
    fn from(s: &str) -> Self {
        match s {
            name if name == tags::TO_WATCH.1 => TagKind::ToWatch,
            name if name == tags::WATCHING.1 => TagKind::Watching,
            name if name == tags::WATCHED.1 => TagKind::Watched,
            other => TagKind::Custom(other.to_string()),
        }
    }
}

impl fmt::Display for TagKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TagKind::ToWatch => write!(f, "{}", tags::TO_WATCH.1),
            TagKind::Watching => write!(f, "{}", tags::WATCHING.1),
            TagKind::Watched => write!(f, "{}", tags::WATCHED.1),
            TagKind::Custom(s) => write!(f, "{}", s),
        }
    }
}
