#![deny(clippy::unwrap_used)]
#![allow(clippy::missing_errors_doc)]

pub mod catalog;
pub mod error;
pub mod gateway;
pub mod profile;
pub mod session;

pub use catalog::CatalogAccessor;
pub use error::ClientError;
pub use gateway::{Access, Gateway};
pub use profile::ProfileAccessor;
pub use session::{
    Navigator, Notice, NoticeLevel, Notifier, Route, SessionCoordinator, SessionDeps,
    SessionPhase, SessionSnapshot, UiFlags,
};
