//! Error types for table rendering.

use tabula_batching::BatchError;
use thiserror::Error;

/// Errors that can occur while setting up or updating a table.
#[derive(Debug, Error)]
pub enum TableError {
	/// A cell spans more columns than the table has left.
	#[error("Colspan for column '{column}' is larger than the table")]
	ColspanOverflow {
		/// Name of the column whose cell overflows.
		column: String,
	},

	/// Two columns were registered under the same name.
	#[error("Duplicate column name: {0}")]
	DuplicateColumn(String),

	/// Batching the rows failed.
	#[error("Batch error: {0}")]
	Batch(#[from] BatchError),

	/// The table settings are invalid.
	#[error("Settings error: {0}")]
	Settings(#[from] SettingsError),
}

/// Errors raised while loading or validating table settings.
#[derive(Debug, Error)]
pub enum SettingsError {
	/// The settings file could not be read.
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),

	/// The settings are not valid TOML for the settings schema.
	#[error("TOML error: {0}")]
	Toml(#[from] toml::de::Error),

	/// A setting holds a value outside its allowed range.
	#[error("Invalid setting {field}: {message}")]
	Invalid {
		/// Name of the offending setting.
		field: &'static str,
		/// Why the value was rejected.
		message: String,
	},
}

/// Result type alias for table operations.
pub type Result<T> = std::result::Result<T, TableError>;
