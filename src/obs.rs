//! Optional observability helpers for cache operations.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to emit structured spans named `credential_cache.op` with the `op`
//!   (operation) and `stage` (call site) fields.
//! - Enable `metrics` to increment the `credential_cache_op_total` counter for every
//!   attempt/success/failure, labeled by `op` + `outcome`.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::{_prelude::*, credential::CredentialKind};

/// Cache operations observed by the store.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OpKind {
	/// Bulk account reload.
	LoadAccounts,
	/// Access token lookup (including proactive refresh).
	Token,
	/// JS-API ticket lookup (including proactive refresh).
	Ticket,
}
impl OpKind {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			OpKind::LoadAccounts => "load_accounts",
			OpKind::Token => "token",
			OpKind::Ticket => "ticket",
		}
	}
}
impl Display for OpKind {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
impl From<CredentialKind> for OpKind {
	fn from(kind: CredentialKind) -> Self {
		match kind {
			CredentialKind::Token => OpKind::Token,
			CredentialKind::Ticket => OpKind::Ticket,
		}
	}
}

/// Outcome labels recorded for each attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OpOutcome {
	/// Entry to a store operation.
	Attempt,
	/// Successful completion.
	Success,
	/// Failure propagated back to the caller.
	Failure,
}
impl OpOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			OpOutcome::Attempt => "attempt",
			OpOutcome::Success => "success",
			OpOutcome::Failure => "failure",
		}
	}
}
impl Display for OpOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
