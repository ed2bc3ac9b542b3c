mod coordinator;
pub mod messages;
mod ports;
mod state;

pub use coordinator::{SessionCoordinator, SessionDeps};
pub use ports::{Navigator, Notice, NoticeLevel, Notifier, Route};
pub use state::{SessionPhase, SessionSnapshot, UiFlags};
