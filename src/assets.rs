pub(crate) mod font;
pub(crate) mod images;
