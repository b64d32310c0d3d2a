//! Proactive multi-account credential cache—serve always-fresh access tokens and JS-API tickets
//! with singleflight refresh and atomic account reloads.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod account;
pub mod credential;
pub mod error;
pub mod fetcher;
pub mod obs;
pub mod provider;
pub mod store;

mod _prelude {
	pub use std::{
		collections::HashMap,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		pin::Pin,
		str::FromStr,
		sync::Arc,
	};

	pub use async_lock::Mutex as AsyncMutex;
	pub use parking_lot::RwLock;
	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use time::{Duration, OffsetDateTime};

	pub use crate::error::{Error, Result};
}

#[cfg(test)] use tokio as _;
