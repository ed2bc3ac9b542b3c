use auqmia_core::{Animal, User};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SessionPhase {
    #[default]
    Unauthenticated,
    /// A persisted token was found and the startup fetches are in flight.
    Authenticating,
    Authenticated,
}

/// Screen toggles kept alongside the session. They carry no behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiFlags {
    pub login_button: bool,
    pub donation_button: bool,
    pub adopted: bool,
    pub modal_update_user: bool,
}

impl Default for UiFlags {
    fn default() -> Self {
        Self {
            login_button: true,
            donation_button: true,
            adopted: true,
            modal_update_user: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SessionSnapshot {
    pub phase: SessionPhase,
    pub is_logged: bool,
    pub loading: bool,
    pub token: Option<String>,
    pub user: Option<User>,
    pub animals: Vec<Animal>,
    pub flags: UiFlags,
}

pub(crate) struct SessionState {
    pub(crate) phase: SessionPhase,
    pub(crate) loading: bool,
    pub(crate) token: Option<String>,
    pub(crate) user: Option<User>,
    pub(crate) animals: Vec<Animal>,
    pub(crate) flags: UiFlags,
    pub(crate) bootstrapped: bool,
    /// Bumped on every login and logout. In-flight profile work compares
    /// against it before writing back.
    pub(crate) generation: u64,
    catalog_issued: u64,
    catalog_applied: u64,
}

impl SessionState {
    pub(crate) fn new() -> Self {
        Self {
            phase: SessionPhase::Unauthenticated,
            loading: true,
            token: None,
            user: None,
            animals: Vec::new(),
            flags: UiFlags::default(),
            bootstrapped: false,
            generation: 0,
            catalog_issued: 0,
            catalog_applied: 0,
        }
    }

    pub(crate) fn is_logged(&self) -> bool {
        self.phase == SessionPhase::Authenticated
    }

    pub(crate) fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            phase: self.phase,
            is_logged: self.is_logged(),
            loading: self.loading,
            token: self.token.clone(),
            user: self.user.clone(),
            animals: self.animals.clone(),
            flags: self.flags,
        }
    }

    pub(crate) fn begin_session(&mut self, token: String, user: User) {
        self.generation += 1;
        self.phase = SessionPhase::Authenticated;
        self.token = Some(token);
        self.user = Some(user);
    }

    pub(crate) fn end_session(&mut self) {
        self.generation += 1;
        self.phase = SessionPhase::Unauthenticated;
        self.token = None;
        self.user = None;
    }

    pub(crate) fn issue_catalog_ticket(&mut self) -> u64 {
        self.catalog_issued += 1;
        self.catalog_issued
    }

    /// Applies a catalog response unless a later-issued refresh already
    /// landed. Returns whether the list was replaced.
    pub(crate) fn apply_catalog(&mut self, ticket: u64, animals: Vec<Animal>) -> bool {
        if ticket <= self.catalog_applied {
            return false;
        }
        self.catalog_applied = ticket;
        self.animals = animals;
        true
    }
}
