pub(crate) mod builders;
pub(crate) mod taxonomy;
