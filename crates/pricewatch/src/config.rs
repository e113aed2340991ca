//! Demo configuration.

use clap::Parser;
use std::path::PathBuf;

use crate::error::{Error, Result};

/// Default database file.
pub const DEFAULT_DATABASE_PATH: &str = "pricewatch.db";

/// Where the demo keeps its rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreLocation {
    /// A SQLite database file.
    File(PathBuf),
    /// A private in-memory database.
    InMemory,
}

/// Demo configuration.
#[derive(Debug, Clone)]
pub struct DemoConfig {
    /// Database to open.
    pub store: StoreLocation,

    /// Delete all clients and products before exiting.
    pub clear_on_exit: bool,
}

impl DemoConfig {
    /// Create a configuration using the database file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            store: StoreLocation::File(path.into()),
            clear_on_exit: true,
        }
    }

    /// Use an in-memory database.
    pub fn in_memory() -> Self {
        Self {
            store: StoreLocation::InMemory,
            clear_on_exit: true,
        }
    }

    /// Set the database file.
    pub fn with_database(mut self, path: impl Into<PathBuf>) -> Self {
        self.store = StoreLocation::File(path.into());
        self
    }

    /// Keep rows in the database after the run.
    pub fn keep_data(mut self) -> Self {
        self.clear_on_exit = false;
        self
    }

    /// Reject configurations that cannot be opened.
    pub fn validate(&self) -> Result<()> {
        match &self.store {
            StoreLocation::File(path) if path.as_os_str().is_empty() => {
                Err(Error::Config("database path is empty".to_string()))
            }
            StoreLocation::File(path) if path.is_dir() => Err(Error::Config(format!(
                "database path {} is a directory",
                path.display()
            ))),
            _ => Ok(()),
        }
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DATABASE_PATH)
    }
}

/// Command-line arguments for the demo.
#[derive(Parser, Debug)]
#[command(name = "pricewatch")]
#[command(version, about = "Product alert demonstration", long_about = None)]
pub struct Args {
    /// Path to the SQLite database file.
    #[arg(short, long, default_value = DEFAULT_DATABASE_PATH)]
    pub database: PathBuf,

    /// Use an in-memory database instead of a file.
    #[arg(long)]
    pub in_memory: bool,

    /// Leave clients and products in the database when done.
    #[arg(long)]
    pub keep_data: bool,
}

impl Args {
    /// Convert command-line arguments to a demo configuration.
    pub fn into_config(self) -> DemoConfig {
        let store = if self.in_memory {
            StoreLocation::InMemory
        } else {
            StoreLocation::File(self.database)
        };

        DemoConfig {
            store,
            clear_on_exit: !self.keep_data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DemoConfig::default();
        assert_eq!(
            config.store,
            StoreLocation::File(PathBuf::from(DEFAULT_DATABASE_PATH))
        );
        assert!(config.clear_on_exit);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_builder() {
        let config = DemoConfig::in_memory()
            .with_database("/tmp/other.db")
            .keep_data();

        assert_eq!(config.store, StoreLocation::File(PathBuf::from("/tmp/other.db")));
        assert!(!config.clear_on_exit);
    }

    #[test]
    fn test_args_into_config() {
        let args = Args::parse_from(["pricewatch", "--in-memory", "--keep-data"]);
        let config = args.into_config();
        assert_eq!(config.store, StoreLocation::InMemory);
        assert!(!config.clear_on_exit);

        let args = Args::parse_from(["pricewatch", "-d", "shop.db"]);
        let config = args.into_config();
        assert_eq!(config.store, StoreLocation::File(PathBuf::from("shop.db")));
        assert!(config.clear_on_exit);
    }

    #[test]
    fn test_directory_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let config = DemoConfig::new(dir.path());
        assert!(matches!(config.validate(), Err(Error::Config(_))));
        assert!(DemoConfig::new("").validate().is_err());
    }
}
