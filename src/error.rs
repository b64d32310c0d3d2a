//! Cache-level error types shared across the store, providers, and fetchers.

// self
use crate::{_prelude::*, account::AppId};

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Canonical cache error exposed by public APIs.
///
/// No variant is fatal to the store; after any single failure the store keeps
/// serving other accounts and values.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Lookup for an AppID absent from the current account set.
	#[error("No account is loaded for AppID `{app_id}`.")]
	UnknownAccount {
		/// Identifier the caller asked for.
		app_id: AppId,
	},
	/// Account-list reload failure; the previous account set is preserved.
	#[error(transparent)]
	Provider(#[from] crate::provider::ProviderError),
	/// Remote credential fetch failure; the cached value stays stale and the
	/// next access retries.
	#[error(transparent)]
	Fetch(#[from] crate::fetcher::FetchError),
	/// Account data failed validation.
	#[error(transparent)]
	Account(#[from] crate::account::AccountError),
}
