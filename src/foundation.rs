pub(crate) mod config;
pub(crate) mod date;
pub(crate) mod error;
