//! Sinks for user-facing notices.

use crate::models::{Notice, NoticeKind};

/// Receives a [`Notice`] whenever the store adds a city, rejects a duplicate,
/// or removes a city. Purely observational: the store never reads anything
/// back from the sink.
pub trait Notifier: Send + Sync {
    fn notify(&self, notice: &Notice);
}

/// Writes notices to the `log` facade. The default sink.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, notice: &Notice) {
        match notice.kind() {
            NoticeKind::Success => log::info!("{}: {}", notice.title(), notice.message()),
            NoticeKind::Info => log::info!("{} (info): {}", notice.title(), notice.message()),
        }
    }
}

impl<F> Notifier for F
where
    F: Fn(&Notice) + Send + Sync,
{
    fn notify(&self, notice: &Notice) {
        self(notice)
    }
}
