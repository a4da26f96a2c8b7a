//! Named-method dispatch: request/response envelopes, error codes, the
//! handler registry, and the handlers themselves.

pub mod context;
pub mod errors;
pub mod handlers;
pub mod registry;
pub mod types;
