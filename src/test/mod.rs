//! Shared support for the property tests in the implementation modules.

pub(crate) mod quick;
