pub(crate) mod fact;
pub(crate) mod http;
