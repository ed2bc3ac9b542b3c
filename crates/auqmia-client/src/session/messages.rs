pub const LOGIN_SUCCEEDED: &str = "Logged in successfully!";
pub const LOGIN_FAILED: &str = "Incorrect email or password.";
pub const LOGIN_NOT_SAVED: &str = "Logged in, but the session could not be saved.";
pub const REGISTER_SUCCEEDED: &str = "Account created successfully!";
pub const REGISTER_FAILED: &str = "Could not create the account.";
pub const UPDATE_SUCCEEDED: &str = "Profile updated successfully!";
pub const UPDATE_FAILED: &str = "Could not update the profile.";
