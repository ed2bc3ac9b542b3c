pub(crate) mod animals;
pub(crate) mod auth;
pub(crate) mod profile;
pub(crate) mod system;
