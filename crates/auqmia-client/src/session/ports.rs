#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Landing,
    Login,
    Profile,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Route::Landing => "/",
            Route::Login => "/login",
            Route::Profile => "/profile",
        }
    }
}

/// Moves the user between screens. `replace` drops the current entry from
/// history instead of pushing a new one.
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: Route, replace: bool);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Failure,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Failure,
            message: message.into(),
        }
    }
}

/// Transient user-facing messages. Presentation is up to the implementor.
pub trait Notifier: Send + Sync {
    fn notify(&self, notice: Notice);
}
