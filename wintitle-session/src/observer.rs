//! Title-change notifications.
//!
//! A settings view showing a live preview subscribes here instead of being
//! poked directly by the session.

use serde::Serialize;

/// Emitted by [`TitleSession`](crate::TitleSession).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum TitleEvent {
    /// The window title was rendered again (whether or not it changed).
    Recomputed { title: String },
    /// The session handed the window back to the host's default title.
    Restored { title: String },
}

impl TitleEvent {
    pub fn title(&self) -> &str {
        match self {
            TitleEvent::Recomputed { title } | TitleEvent::Restored { title } => title,
        }
    }
}

/// Receives [`TitleEvent`]s.
///
/// Implemented for every `FnMut(&TitleEvent)`.
pub trait TitleObserver {
    fn on_title_event(&mut self, event: &TitleEvent);
}

impl<F> TitleObserver for F
where
    F: FnMut(&TitleEvent),
{
    fn on_title_event(&mut self, event: &TitleEvent) {
        self(event)
    }
}

/// Handle returned by `subscribe`, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

/// Registered observers in subscription order.
#[derive(Default)]
pub(crate) struct Observers {
    next_id: u64,
    entries: Vec<(ObserverId, Box<dyn TitleObserver>)>,
}

impl Observers {
    pub(crate) fn add(&mut self, observer: Box<dyn TitleObserver>) -> ObserverId {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, observer));
        id
    }

    pub(crate) fn remove(&mut self, id: ObserverId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    pub(crate) fn notify(&mut self, event: &TitleEvent) {
        for (_, observer) in &mut self.entries {
            observer.on_title_event(event);
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}
