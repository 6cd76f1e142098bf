// src/fetch/mod.rs
//
// The points source. The updater only knows this trait; how a profile page
// becomes a number is up to the implementation.

mod http;

pub use http::HttpPointsFetcher;

use crate::errors::FetchError;

/// Given a profile locator, read its current energy points.
///
/// Implementations must not panic; every failure is a `FetchError`,
/// which the updater logs and treats as "keep the previous value".
pub trait PointsFetcher: Send + Sync {
    fn fetch(&self, profile_url: &str) -> Result<u64, FetchError>;
}

impl<F> PointsFetcher for F
where
    F: Fn(&str) -> Result<u64, FetchError> + Send + Sync,
{
    fn fetch(&self, profile_url: &str) -> Result<u64, FetchError> {
        self(profile_url)
    }
}
