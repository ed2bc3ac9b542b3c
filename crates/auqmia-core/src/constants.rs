/// Credential store key holding the bearer token.
pub const TOKEN_KEY: &str = "token";

/// Credential store key holding the logged-in user's identifier.
pub const USER_ID_KEY: &str = "id";

pub mod paths {
    pub const ANIMALS: &str = "animals";
    pub const USERS: &str = "users";
    pub const LOGIN: &str = "login";
    pub const REGISTER: &str = "register";

    /// `None` when the id cannot be a single path segment.
    pub fn animal(id: &str) -> Option<String> {
        segment(id).map(|id| format!("{ANIMALS}/{id}"))
    }

    pub fn user(id: &str) -> Option<String> {
        segment(id).map(|id| format!("{USERS}/{id}"))
    }

    // URL parsing resolves `.` and `..` even when percent-encoded, so those
    // are refused outright.
    fn segment(id: &str) -> Option<String> {
        let decoded_dots = id.to_ascii_lowercase().replace("%2e", ".");
        if id.is_empty() || decoded_dots == "." || decoded_dots == ".." {
            return None;
        }
        Some(urlencoding::encode(id).into_owned())
    }

}
