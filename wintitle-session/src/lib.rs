//! # wintitle-session
//!
//! Host-side orchestration around the title renderer.
//!
//! A [`TitleSession`] owns one vault's settings and program info. Call
//! [`TitleSession::refresh`] whenever the active document changes to get the
//! window title and tab labels, or [`TitleSession::apply`] to push them into a
//! [`TitleSink`] directly. Observers registered with
//! [`TitleSession::subscribe`] hear about every recompute.

pub mod error;
pub mod observer;
pub mod session;
pub mod workspace;

pub use error::SessionError;
pub use observer::{ObserverId, TitleEvent, TitleObserver};
pub use session::{TabLabel, TitleChange, TitleSession, TitleUpdate};
pub use workspace::{DocumentId, OpenDocument, StaticWorkspace, TitleSink, Workspace};
