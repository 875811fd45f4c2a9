mod errors;
mod http_client;
mod traits;

pub use errors::{LookupError, LOOKUP_FAILURE_MESSAGE};
pub use http_client::{decode_lookup_result, HttpUserLookup};
pub use traits::{LookupHandle, UserLookupService};

#[cfg(test)]
pub(crate) use traits::testing;
