//! Display implementation for notices.

use std::fmt;

use crate::models::{Notice, NoticeKind};

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = match self.kind() {
            NoticeKind::Success => "✓",
            NoticeKind::Info => "ℹ",
        };
        writeln!(f, "{marker} **{}**: {}", self.title(), self.message())
    }
}
