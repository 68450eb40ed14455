pub(crate) mod constants;
pub(crate) mod layout;
pub(crate) mod render;
