//! Credential kinds, issued-value records, and freshness rules.

// self
use crate::{_prelude::*, fetcher::FetchError};

/// Credential kinds cached independently for every account.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CredentialKind {
	/// Short-lived access token used to authenticate API calls.
	Token,
	/// Independently-expiring JS-API ticket tied to the same account.
	Ticket,
}
impl CredentialKind {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			CredentialKind::Token => "token",
			CredentialKind::Ticket => "ticket",
		}
	}
}
impl Display for CredentialKind {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Freshly issued credential value plus its absolute expiry instant.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssuedCredential {
	/// Credential string handed back to store callers.
	pub value: String,
	/// Absolute expiry instant computed from the issuer's stated lifetime.
	pub expires_at: OffsetDateTime,
}
impl IssuedCredential {
	/// Builds a credential with an absolute expiry instant.
	pub fn new(value: impl Into<String>, expires_at: OffsetDateTime) -> Self {
		Self { value: value.into(), expires_at }
	}

	/// Builds a credential from the issuer's relative time-to-live.
	///
	/// Rejects non-positive lifetimes, which would make the value stale on
	/// arrival.
	pub fn with_ttl(
		value: impl Into<String>,
		ttl: Duration,
		issued_at: OffsetDateTime,
	) -> Result<Self, FetchError> {
		if ttl.is_zero() || ttl.is_negative() {
			return Err(FetchError::NonPositiveTtl);
		}

		Ok(Self::new(value, issued_at + ttl))
	}

	/// Returns `true` if the value is still usable at `instant` given the
	/// configured ahead-of-expiry window.
	pub fn usable_at(&self, instant: OffsetDateTime, ahead_window: Duration) -> bool {
		instant < self.expires_at - ahead_window
	}
}
impl Debug for IssuedCredential {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("IssuedCredential")
			.field("value", &"<redacted>")
			.field("expires_at", &self.expires_at)
			.finish()
	}
}

#[cfg(test)]
mod tests {
	// crates.io
	use time::macros;
	// self
	use super::*;

	#[test]
	fn kind_labels_are_stable() {
		assert_eq!(CredentialKind::Token.as_str(), "token");
		assert_eq!(CredentialKind::Ticket.to_string(), "ticket");
	}

	#[test]
	fn ttl_produces_absolute_expiry() {
		let issued_at = macros::datetime!(2025-01-01 00:00 UTC);
		let credential = IssuedCredential::with_ttl("T1", Duration::seconds(100), issued_at)
			.expect("Positive TTL should produce a credential.");

		assert_eq!(credential.expires_at, macros::datetime!(2025-01-01 00:01:40 UTC));
	}

	#[test]
	fn non_positive_ttl_is_rejected() {
		let issued_at = OffsetDateTime::now_utc();

		assert!(matches!(
			IssuedCredential::with_ttl("T1", Duration::ZERO, issued_at),
			Err(FetchError::NonPositiveTtl)
		));
		assert!(matches!(
			IssuedCredential::with_ttl("T1", Duration::seconds(-1), issued_at),
			Err(FetchError::NonPositiveTtl)
		));
	}

	#[test]
	fn ahead_window_shortens_usable_life() {
		let issued_at = macros::datetime!(2025-01-01 00:00 UTC);
		let credential = IssuedCredential::with_ttl("T1", Duration::seconds(100), issued_at)
			.expect("Credential fixture should build successfully.");
		let ahead_window = Duration::seconds(5);

		assert!(credential.usable_at(issued_at, ahead_window));
		assert!(credential.usable_at(issued_at + Duration::seconds(94), ahead_window));
		assert!(!credential.usable_at(issued_at + Duration::seconds(95), ahead_window));
		assert!(!credential.usable_at(issued_at + Duration::seconds(96), ahead_window));
	}

	#[test]
	fn debug_redacts_value() {
		let credential = IssuedCredential::new("secret-token", OffsetDateTime::now_utc());

		assert!(!format!("{credential:?}").contains("secret-token"));
	}
}
