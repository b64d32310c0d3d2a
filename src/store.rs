//! The account→credential map and its lookup, reload, and invalidation surface.

pub mod item;
mod metrics;

pub use item::CachedCredential;
pub use metrics::RefreshMetrics;

// self
use crate::{
	_prelude::*,
	account::{Account, AppId},
	credential::CredentialKind,
	fetcher::CredentialFetcher,
	obs::{self, OpKind, OpOutcome, OpSpan},
	provider::AccountProvider,
};

type AccountMap = HashMap<AppId, Arc<CachedCredential>>;

/// Process-wide cache of per-account credentials.
///
/// The store owns the account map behind a read/write lock and swaps the whole
/// map atomically on reload, so readers observe either the old or the new
/// complete account set, never a partially-rebuilt one. Refreshes run under
/// per-credential locks only; the map lock is never held across issuer I/O, so
/// refreshing one account never blocks lookups for another.
///
/// Construct explicitly and share by reference; multiple stores with different
/// configurations can coexist in one process.
pub struct CredentialStore {
	accounts: RwLock<Arc<AccountMap>>,
	ahead_window: Duration,
	provider: Arc<dyn AccountProvider>,
	fetcher: Arc<dyn CredentialFetcher>,
	refresh_metrics: Arc<RefreshMetrics>,
}
impl CredentialStore {
	/// Creates an empty store; call [`CredentialStore::load_accounts`] to
	/// populate it.
	///
	/// `ahead_window` is the duration before actual expiry at which a cached
	/// value is already treated as stale. A negative window is clamped to
	/// zero.
	pub fn new(
		provider: Arc<dyn AccountProvider>,
		fetcher: Arc<dyn CredentialFetcher>,
		ahead_window: Duration,
	) -> Self {
		Self {
			accounts: RwLock::new(Arc::new(HashMap::new())),
			ahead_window: if ahead_window.is_negative() { Duration::ZERO } else { ahead_window },
			provider,
			fetcher,
			refresh_metrics: Default::default(),
		}
	}

	/// Replaces the account set with the provider's current list.
	///
	/// The provider call runs without any lock held. On success every account
	/// starts from an empty credential state and the new map is swapped in
	/// atomically; on failure the previous account set is left untouched.
	pub async fn load_accounts(&self) -> Result<()> {
		const KIND: OpKind = OpKind::LoadAccounts;

		let span = OpSpan::new(KIND, "load_accounts");

		obs::record_op_outcome(KIND, OpOutcome::Attempt);

		let result = span
			.instrument(async move {
				let accounts = self.provider.obtain().await?;
				let map: AccountMap = accounts
					.into_iter()
					.map(|Account { app_id, app_secret }| {
						let item = Arc::new(CachedCredential::new(app_id.clone(), app_secret));

						(app_id, item)
					})
					.collect();

				*self.accounts.write() = Arc::new(map);

				Ok(())
			})
			.await;

		match &result {
			Ok(_) => obs::record_op_outcome(KIND, OpOutcome::Success),
			Err(_) => obs::record_op_outcome(KIND, OpOutcome::Failure),
		}

		result
	}

	/// Returns a currently-valid access token for the account, refreshing it
	/// first when it is inside the ahead-of-expiry window.
	pub async fn token(&self, app_id: &AppId) -> Result<String> {
		self.fresh_value(app_id, CredentialKind::Token).await
	}

	/// Returns a currently-valid JS-API ticket for the account, refreshing it
	/// first when it is inside the ahead-of-expiry window.
	pub async fn ticket(&self, app_id: &AppId) -> Result<String> {
		self.fresh_value(app_id, CredentialKind::Ticket).await
	}

	/// Forces the account's access token into an expired state; the next
	/// access refetches it.
	///
	/// Unknown accounts are ignored: invalidation is an idempotent cache
	/// operation, not a lookup.
	pub async fn remove_token(&self, app_id: &AppId) {
		self.invalidate(app_id, CredentialKind::Token).await;
	}

	/// Forces the account's JS-API ticket into an expired state; the next
	/// access refetches it.
	///
	/// Unknown accounts are ignored, matching [`CredentialStore::remove_token`].
	pub async fn remove_ticket(&self, app_id: &AppId) {
		self.invalidate(app_id, CredentialKind::Ticket).await;
	}

	/// Returns `true` if the account is present in the current set.
	pub fn contains(&self, app_id: &AppId) -> bool {
		self.accounts.read().contains_key(app_id)
	}

	/// Number of loaded accounts.
	pub fn len(&self) -> usize {
		self.accounts.read().len()
	}

	/// Returns `true` when no accounts are loaded.
	pub fn is_empty(&self) -> bool {
		self.accounts.read().is_empty()
	}

	/// Ahead-of-expiry window configured at construction.
	pub fn ahead_window(&self) -> Duration {
		self.ahead_window
	}

	/// Shared counters describing lookup activity.
	pub fn refresh_metrics(&self) -> &RefreshMetrics {
		&self.refresh_metrics
	}

	async fn fresh_value(&self, app_id: &AppId, kind: CredentialKind) -> Result<String> {
		let op = OpKind::from(kind);
		let span = OpSpan::new(op, "fresh_value");

		obs::record_op_outcome(op, OpOutcome::Attempt);
		self.refresh_metrics.record_attempt();

		let result = span
			.instrument(async move {
				let item = self.lookup(app_id)?;
				let value = item.fresh_value(kind, self.fetcher.as_ref(), self.ahead_window).await?;

				Ok(value)
			})
			.await;

		match &result {
			Ok(_) => {
				obs::record_op_outcome(op, OpOutcome::Success);
				self.refresh_metrics.record_success();
			},
			Err(_) => {
				obs::record_op_outcome(op, OpOutcome::Failure);
				self.refresh_metrics.record_failure();
			},
		}

		result
	}

	async fn invalidate(&self, app_id: &AppId, kind: CredentialKind) {
		let Ok(item) = self.lookup(app_id) else {
			return;
		};

		item.invalidate(kind).await;
	}

	// Clones the map handle under the read lock and releases it before any
	// item-level critical section is entered (lock ordering: map before item,
	// never both at once).
	fn lookup(&self, app_id: &AppId) -> Result<Arc<CachedCredential>> {
		let map = self.accounts.read().clone();

		map.get(app_id).cloned().ok_or_else(|| Error::UnknownAccount { app_id: app_id.clone() })
	}
}
impl Debug for CredentialStore {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("CredentialStore")
			.field("accounts", &self.len())
			.field("ahead_window", &self.ahead_window)
			.finish()
	}
}
