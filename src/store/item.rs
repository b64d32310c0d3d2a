//! Per-account credential state: freshness decisions and serialized refresh.

// self
use crate::{
	_prelude::*,
	account::{AppId, AppSecret},
	credential::{CredentialKind, IssuedCredential},
	fetcher::{CredentialFetcher, FetchError},
};

/// One credential value and its absolute expiry instant.
struct Slot {
	value: Option<String>,
	expires_at: OffsetDateTime,
}
impl Slot {
	/// Starts with no value and a past expiry, so the first access fetches.
	const fn empty() -> Self {
		Self { value: None, expires_at: OffsetDateTime::UNIX_EPOCH }
	}

	fn usable_value(&self, instant: OffsetDateTime, ahead_window: Duration) -> Option<&str> {
		if instant < self.expires_at - ahead_window {
			self.value.as_deref().filter(|value| !value.is_empty())
		} else {
			None
		}
	}

	fn install(&mut self, issued: IssuedCredential) {
		self.value = Some(issued.value);
		self.expires_at = issued.expires_at;
	}

	fn clear(&mut self) {
		self.value = None;
		self.expires_at = OffsetDateTime::UNIX_EPOCH;
	}
}

/// Cached token + ticket pair for a single account.
///
/// Each slot sits behind its own async mutex. The caller that finds a slot
/// stale performs the fetch while holding that lock, so at most one fetch per
/// (account, kind) is ever outstanding; concurrent callers block on the lock
/// and re-check freshness once they acquire it. A fetch failure leaves the
/// slot unchanged, so the next access retries.
pub struct CachedCredential {
	app_id: AppId,
	app_secret: AppSecret,
	token: AsyncMutex<Slot>,
	ticket: AsyncMutex<Slot>,
}
impl CachedCredential {
	/// Creates an empty credential holder; the first access triggers a fetch.
	pub fn new(app_id: AppId, app_secret: AppSecret) -> Self {
		Self {
			app_id,
			app_secret,
			token: AsyncMutex::new(Slot::empty()),
			ticket: AsyncMutex::new(Slot::empty()),
		}
	}

	/// AppID this credential pair belongs to.
	pub fn app_id(&self) -> &AppId {
		&self.app_id
	}

	/// Returns the slot's cached value if still usable, refreshing it through
	/// the fetcher otherwise.
	pub async fn fresh_value(
		&self,
		kind: CredentialKind,
		fetcher: &dyn CredentialFetcher,
		ahead_window: Duration,
	) -> Result<String, FetchError> {
		let mut slot = self.slot(kind).lock().await;
		let now = OffsetDateTime::now_utc();

		if let Some(value) = slot.usable_value(now, ahead_window) {
			return Ok(value.to_owned());
		}

		let issued = match kind {
			CredentialKind::Token => fetcher.fetch_token(&self.app_id, &self.app_secret).await?,
			CredentialKind::Ticket => fetcher.fetch_ticket(&self.app_id, &self.app_secret).await?,
		};
		let value = issued.value.clone();

		slot.install(issued);

		Ok(value)
	}

	/// Forces the slot into an expired state regardless of its current value.
	///
	/// The other slot is untouched; token and ticket lifecycles are
	/// independent.
	pub async fn invalidate(&self, kind: CredentialKind) {
		self.slot(kind).lock().await.clear();
	}

	/// Expiry instant currently recorded for the slot.
	pub async fn expires_at(&self, kind: CredentialKind) -> OffsetDateTime {
		self.slot(kind).lock().await.expires_at
	}

	fn slot(&self, kind: CredentialKind) -> &AsyncMutex<Slot> {
		match kind {
			CredentialKind::Token => &self.token,
			CredentialKind::Ticket => &self.ticket,
		}
	}
}
impl Debug for CachedCredential {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("CachedCredential")
			.field("app_id", &self.app_id)
			.field("app_secret", &self.app_secret)
			.finish()
	}
}
