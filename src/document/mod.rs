pub(crate) mod accessors;
pub(crate) mod encoder;
pub(crate) mod glyph;
pub(crate) mod io;
pub(crate) mod model;
pub(crate) mod validate;
