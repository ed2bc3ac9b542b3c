mod structs;

pub use structs::*;

#[cfg(test)]
mod tests;
