use std::sync::{Arc, LazyLock};

use dashmap::DashMap;
use log::{debug, warn};

use crate::driver::Driver;
use crate::error::{ClientError, Result};

/// The global registry used by [`DataSourceClient::new`](crate::client::DataSourceClient::new).
/// Built-in drivers are registered up front; call [`DriverRegistry::register`]
/// on it to add custom ones.
pub static DRIVERS: LazyLock<DriverRegistry> = LazyLock::new(DriverRegistry::with_defaults);

/// A registry of database drivers keyed by their unique names.
///
/// `DriverRegistry` is the lookup layer between a [`ConnectionParams::driver`]
/// identifier and the [`Driver`] implementation that knows how to open
/// connections for it.
///
/// [`ConnectionParams::driver`]: crate::params::ConnectionParams
pub struct DriverRegistry {
    drivers: DashMap<String, Arc<dyn Driver>>,
}

impl Default for DriverRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl DriverRegistry {
    /// Creates a new, empty `DriverRegistry`.
    pub fn new() -> Self {
        Self {
            drivers: DashMap::new(),
        }
    }

    /// Creates a registry pre-populated with the drivers enabled at compile time.
    pub fn with_defaults() -> Self {
        let registry = Self::new();
        #[cfg(feature = "sqlite")]
        registry.register(crate::driver::sqlite::SqliteDriver::new());
        #[cfg(feature = "mysql")]
        registry.register(crate::driver::mysql::MysqlDriver::new());
        registry
    }

    /// Registers a database driver with the registry.
    ///
    /// The driver's name (retrieved via `driver.name()`) is used as the
    /// registration key. Registering a second driver under an existing name
    /// replaces the first one.
    pub fn register(&self, driver: impl Driver + 'static) {
        let name = driver.name().to_string();
        if self.drivers.insert(name.clone(), Arc::new(driver)).is_some() {
            warn!("driver `{}` re-registered, previous one replaced", name);
        } else {
            debug!("driver `{}` registered", name);
        }
    }

    /// Looks up a driver by name.
    ///
    /// # Errors
    /// Returns [`ClientError::DriverLoad`] if no driver is registered under `name`.
    pub fn resolve(&self, name: &str) -> Result<Arc<dyn Driver>> {
        self.drivers
            .get(name)
            .map(|v| v.value().clone())
            .ok_or_else(|| {
                ClientError::DriverLoad(format!("no driver registered under '{}'", name))
            })
    }

    /// Returns `true` if a driver is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.drivers.contains_key(name)
    }

    /// Returns the names of all registered drivers.
    pub fn names(&self) -> Vec<String> {
        self.drivers.iter().map(|e| e.key().clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::ConnectionParams;
    use async_trait::async_trait;

    struct NoopDriver {
        name: &'static str,
    }

    #[async_trait]
    impl Driver for NoopDriver {
        fn name(&self) -> &str {
            self.name
        }

        async fn open(
            &self,
            _params: &ConnectionParams,
        ) -> Result<Box<dyn crate::driver::connection::Connection>> {
            Err(ClientError::ConnectionFailed("noop".to_string()))
        }
    }

    #[test]
    fn test_resolve_unknown_driver() {
        let registry = DriverRegistry::new();
        let err = registry.resolve("oracle").err().unwrap();
        assert!(matches!(err, ClientError::DriverLoad(_)));
        assert!(err.to_string().contains("oracle"));
    }

    #[test]
    fn test_register_and_resolve() {
        let registry = DriverRegistry::new();
        assert!(!registry.contains("noop"));

        registry.register(NoopDriver { name: "noop" });
        assert!(registry.contains("noop"));
        assert_eq!(registry.resolve("noop").unwrap().name(), "noop");
    }

    #[test]
    fn test_reregister_replaces() {
        let registry = DriverRegistry::new();
        registry.register(NoopDriver { name: "noop" });
        registry.register(NoopDriver { name: "noop" });
        assert_eq!(registry.names(), vec!["noop".to_string()]);
    }

    #[cfg(feature = "sqlite")]
    #[test]
    fn test_defaults_include_sqlite() {
        let registry = DriverRegistry::with_defaults();
        assert!(registry.contains("sqlite"));
    }
}
