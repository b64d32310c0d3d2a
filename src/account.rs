//! Account identity types: validated AppIDs and redacted app secrets.

// std
use std::{borrow::Borrow, ops::Deref};
// self
use crate::_prelude::*;

const APP_ID_MAX_LEN: usize = 64;

/// Error returned when account data fails validation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, ThisError)]
pub enum AccountError {
	/// The AppID was empty.
	#[error("AppID cannot be empty.")]
	Empty,
	/// The AppID contains whitespace characters.
	#[error("AppID contains whitespace.")]
	ContainsWhitespace,
	/// The AppID exceeded the allowed character count.
	#[error("AppID exceeds {max} characters.")]
	TooLong {
		/// Maximum permitted character count.
		max: usize,
	},
}

/// Unique identifier of an external account.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AppId(String);
impl AppId {
	/// Creates a new identifier after validation.
	pub fn new(value: impl AsRef<str>) -> Result<Self, AccountError> {
		let view = value.as_ref();

		validate_view(view)?;

		Ok(Self(view.to_owned()))
	}
}
impl Deref for AppId {
	type Target = str;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
impl AsRef<str> for AppId {
	fn as_ref(&self) -> &str {
		&self.0
	}
}
impl From<AppId> for String {
	fn from(value: AppId) -> Self {
		value.0
	}
}
impl TryFrom<String> for AppId {
	type Error = AccountError;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		validate_view(&value)?;

		Ok(Self(value))
	}
}
impl Borrow<str> for AppId {
	fn borrow(&self) -> &str {
		&self.0
	}
}
impl Debug for AppId {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		write!(f, "AppId({})", self.0)
	}
}
impl Display for AppId {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(&self.0)
	}
}
impl FromStr for AppId {
	type Err = AccountError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::new(s)
	}
}

fn validate_view(view: &str) -> Result<(), AccountError> {
	if view.is_empty() {
		return Err(AccountError::Empty);
	}
	if view.chars().any(char::is_whitespace) {
		return Err(AccountError::ContainsWhitespace);
	}
	if view.len() > APP_ID_MAX_LEN {
		return Err(AccountError::TooLong { max: APP_ID_MAX_LEN });
	}

	Ok(())
}

/// Redacted account secret used only to obtain credentials from the issuer.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppSecret(String);
impl AppSecret {
	/// Wraps a new secret string.
	pub fn new(value: impl Into<String>) -> Self {
		Self(value.into())
	}

	/// Returns the inner secret value. Callers must avoid logging this string.
	pub fn expose(&self) -> &str {
		&self.0
	}
}
impl AsRef<str> for AppSecret {
	fn as_ref(&self) -> &str {
		self.expose()
	}
}
impl Debug for AppSecret {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_tuple("AppSecret").field(&"<redacted>").finish()
	}
}
impl Display for AppSecret {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("<redacted>")
	}
}

/// One (AppID, AppSecret) pair supplied by an
/// [`AccountProvider`](crate::provider::AccountProvider).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
	/// Unique account identifier.
	pub app_id: AppId,
	/// Secret used to obtain credentials; never exposed to store callers.
	pub app_secret: AppSecret,
}
impl Account {
	/// Builds a validated account pair.
	pub fn new(app_id: impl AsRef<str>, app_secret: impl Into<String>) -> Result<Self, AccountError> {
		Ok(Self { app_id: AppId::new(app_id)?, app_secret: AppSecret::new(app_secret) })
	}
}
