//! Account-source contract plus the built-in providers.
//!
//! `memory` ships [`StaticProvider`] for embedders that already hold the
//! account list in process; `file` ships [`FileProvider`], which re-reads a
//! JSON accounts file on every reload so edits take effect without a restart.

pub mod file;
pub mod memory;

pub use file::FileProvider;
pub use memory::StaticProvider;

// self
use crate::{_prelude::*, account::Account};

/// Boxed future returned by [`AccountProvider::obtain`].
pub type ProviderFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, ProviderError>> + 'a + Send>>;

/// Source of the authoritative (AppID, AppSecret) set consumed by reloads.
pub trait AccountProvider
where
	Self: Send + Sync,
{
	/// Produces the current account list.
	fn obtain(&self) -> ProviderFuture<'_, Vec<Account>>;
}

/// Error type produced by [`AccountProvider`] implementations.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ThisError)]
pub enum ProviderError {
	/// Account source could not be read.
	#[error("Account source failure: {message}.")]
	Source {
		/// Human-readable error payload.
		message: String,
	},
	/// Account payload could not be parsed.
	#[error("Account parse failure: {message}.")]
	Parse {
		/// Human-readable error payload.
		message: String,
	},
}
