mod actions;
pub(crate) mod args;

pub(crate) use actions::{handle_login, handle_logout, handle_register, handle_whoami, parse_fields};
#[cfg(test)]
pub(crate) use actions::registration_input;
