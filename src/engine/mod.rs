pub(crate) mod fingerprint;
pub(crate) mod lazy;
pub(crate) mod store;
pub(crate) mod transition;
