//! File-backed [`AccountProvider`] reading a JSON account list on every reload.

// std
use std::{
	fs,
	path::{Path, PathBuf},
};
// self
use crate::{
	_prelude::*,
	account::Account,
	provider::{AccountProvider, ProviderError, ProviderFuture},
};

/// Reads the account list from a JSON file of `[{"app_id", "app_secret"}]`
/// entries.
///
/// The file is read lazily on each [`AccountProvider::obtain`] call, so a
/// reload picks up edits without restarting the process.
#[derive(Clone, Debug)]
pub struct FileProvider {
	path: PathBuf,
}
impl FileProvider {
	/// Creates a provider for the given accounts file.
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}

	fn load(path: &Path) -> Result<Vec<Account>, ProviderError> {
		let bytes = fs::read(path).map_err(|e| ProviderError::Source {
			message: format!("Failed to read {}: {e}", path.display()),
		})?;
		let mut deserializer = serde_json::Deserializer::from_slice(&bytes);
		let accounts =
			serde_path_to_error::deserialize(&mut deserializer).map_err(|e| ProviderError::Parse {
				message: format!("Failed to parse {}: {e}", path.display()),
			})?;

		Ok(accounts)
	}
}
impl AccountProvider for FileProvider {
	fn obtain(&self) -> ProviderFuture<'_, Vec<Account>> {
		Box::pin(async move { Self::load(&self.path) })
	}
}

#[cfg(test)]
mod tests {
	// std
	use std::{env, process};
	// self
	use super::*;

	fn temp_path(tag: &str) -> PathBuf {
		let unique = format!(
			"credential_cache_accounts_{tag}_{}_{}.json",
			process::id(),
			OffsetDateTime::now_utc().unix_timestamp_nanos(),
		);

		env::temp_dir().join(unique)
	}

	#[tokio::test]
	async fn obtain_parses_the_accounts_file() {
		let path = temp_path("ok");

		fs::write(
			&path,
			r#"[{"app_id": "wx1", "app_secret": "s1"}, {"app_id": "wx2", "app_secret": "s2"}]"#,
		)
		.expect("Failed to write accounts fixture file.");

		let provider = FileProvider::new(&path);
		let accounts = provider.obtain().await.expect("Accounts fixture file should parse.");

		assert_eq!(accounts.len(), 2);
		assert_eq!(accounts[0].app_id.as_ref(), "wx1");
		assert_eq!(accounts[1].app_secret.expose(), "s2");

		fs::remove_file(&path).expect("Failed to remove accounts fixture file.");
	}

	#[tokio::test]
	async fn invalid_app_ids_surface_as_parse_errors() {
		let path = temp_path("invalid");

		fs::write(&path, r#"[{"app_id": "has space", "app_secret": "s1"}]"#)
			.expect("Failed to write invalid accounts fixture file.");

		let provider = FileProvider::new(&path);
		let error = provider.obtain().await.expect_err("Invalid AppIDs should be rejected.");

		assert!(matches!(error, ProviderError::Parse { .. }));

		fs::remove_file(&path).expect("Failed to remove invalid accounts fixture file.");
	}

	#[tokio::test]
	async fn missing_file_surfaces_as_source_error() {
		let provider = FileProvider::new(temp_path("missing"));
		let error = provider.obtain().await.expect_err("Missing files should surface an error.");

		assert!(matches!(error, ProviderError::Source { .. }));
	}
}
