//! Fixed in-process [`AccountProvider`] implementation for embedders and tests.

// self
use crate::{
	_prelude::*,
	account::Account,
	provider::{AccountProvider, ProviderFuture},
};

/// Serves a fixed account list captured at construction.
#[derive(Clone, Debug, Default)]
pub struct StaticProvider(Vec<Account>);
impl StaticProvider {
	/// Captures the provided accounts.
	pub fn new(accounts: impl IntoIterator<Item = Account>) -> Self {
		Self(accounts.into_iter().collect())
	}
}
impl AccountProvider for StaticProvider {
	fn obtain(&self) -> ProviderFuture<'_, Vec<Account>> {
		let accounts = self.0.clone();

		Box::pin(async move { Ok(accounts) })
	}
}
