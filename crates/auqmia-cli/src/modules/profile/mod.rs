mod actions;
pub(crate) mod args;

pub(crate) use actions::handle_profile;
#[cfg(test)]
pub(crate) use actions::user_patch;
