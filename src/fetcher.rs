//! Issuer-facing fetch contract invoked when a cached credential needs a refresh.

// self
use crate::{
	_prelude::*,
	account::{AppId, AppSecret},
	credential::IssuedCredential,
};

/// Boxed future returned by [`CredentialFetcher`] calls.
pub type FetchFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, FetchError>> + 'a + Send>>;

/// Issuer client contract used by the store to obtain fresh credentials.
///
/// Implementations own transport, timeouts, and retry policy. The store only
/// requires that a failed call has no side effects, so the cached value can
/// stay stale and retriable.
pub trait CredentialFetcher
where
	Self: Send + Sync,
{
	/// Exchanges the account secret for a fresh access token.
	fn fetch_token<'a>(
		&'a self,
		app_id: &'a AppId,
		app_secret: &'a AppSecret,
	) -> FetchFuture<'a, IssuedCredential>;

	/// Exchanges the account secret for a fresh JS-API ticket.
	fn fetch_ticket<'a>(
		&'a self,
		app_id: &'a AppId,
		app_secret: &'a AppSecret,
	) -> FetchFuture<'a, IssuedCredential>;
}

/// Error type produced by [`CredentialFetcher`] implementations.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ThisError)]
pub enum FetchError {
	/// Issuer rejected the exchange or returned an error payload.
	#[error("Issuer error: {message}.")]
	Issuer {
		/// Human-readable error payload.
		message: String,
	},
	/// Transport-level failure while calling the issuer.
	#[error("Transport failure: {message}.")]
	Transport {
		/// Human-readable error payload.
		message: String,
	},
	/// Issuer reported a non-positive credential lifetime.
	#[error("The issuer-reported TTL must be positive.")]
	NonPositiveTtl,
}
