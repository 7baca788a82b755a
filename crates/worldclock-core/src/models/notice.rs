//! User-facing notices derived from mutation outcomes.

use super::{AddOutcome, RemoveOutcome};

/// Severity of a notice, mapped by the presentation layer to a style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Info,
}

/// What happened, from the user's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeEvent {
    Added,
    AlreadyPresent,
    Removed,
}

/// A short message about a watch-list change, naming the affected city.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub event: NoticeEvent,
    /// Display name of the city the notice is about
    pub subject: String,
}

impl Notice {
    pub fn new(event: NoticeEvent, subject: impl Into<String>) -> Self {
        Self {
            event,
            subject: subject.into(),
        }
    }

    /// Builds the notice for an add outcome. Queued adds produce none.
    pub fn for_add(outcome: &AddOutcome) -> Option<Self> {
        match outcome {
            AddOutcome::Added(city) => Some(Self::new(NoticeEvent::Added, &city.display_name)),
            AddOutcome::AlreadyPresent(city) => {
                Some(Self::new(NoticeEvent::AlreadyPresent, &city.display_name))
            }
            AddOutcome::Queued => None,
        }
    }

    /// Builds the notice for a remove outcome. Only actual removals notify.
    pub fn for_remove(outcome: &RemoveOutcome) -> Option<Self> {
        match outcome {
            RemoveOutcome::Removed(city) => {
                Some(Self::new(NoticeEvent::Removed, &city.display_name))
            }
            RemoveOutcome::NotFound | RemoveOutcome::Queued => None,
        }
    }

    pub fn kind(&self) -> NoticeKind {
        match self.event {
            NoticeEvent::Added | NoticeEvent::Removed => NoticeKind::Success,
            NoticeEvent::AlreadyPresent => NoticeKind::Info,
        }
    }

    pub fn title(&self) -> &'static str {
        match self.event {
            NoticeEvent::Added => "City Added",
            NoticeEvent::AlreadyPresent => "Already Added",
            NoticeEvent::Removed => "City Removed",
        }
    }

    pub fn message(&self) -> String {
        match self.event {
            NoticeEvent::Added => format!("{} added to world clock", self.subject),
            NoticeEvent::AlreadyPresent => {
                format!("{} is already in your world clock", self.subject)
            }
            NoticeEvent::Removed => format!("{} removed from world clock", self.subject),
        }
    }
}
