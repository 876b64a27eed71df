//! Driver registration for the shell's database backends.
//!
//! Each driver adapts a third-party client library behind a uniform
//! capability descriptor. The registry is an explicit object owned by the
//! application root; built-in drivers are installed by [`register_builtin`]
//! at startup, never by load-time side effects.

use std::collections::HashMap;

/// Capability descriptor for a database driver.
///
/// A driver with no special capabilities registers the default descriptor
/// and still occupies its name slot, relying entirely on the underlying
/// client library's behavior.
#[derive(Debug, Clone, Default)]
pub struct Driver {
    /// Display name for banners and listings; the registry key when `None`.
    pub display: Option<&'static str>,
    /// The dialect supports dollar-quoted strings (`$tag$ ... $tag$`).
    pub allow_dollar: bool,
    /// The dialect supports C-style `/* ... */` comments.
    pub allow_multiline_comments: bool,
    /// The dialect supports `#` line comments.
    pub allow_hash_comments: bool,
    /// Changing a password requires supplying the previous one.
    pub requires_previous_password: bool,
}

/// Opaque handle to a live database connection opened through a driver.
///
/// The metacommand core never executes SQL through it; runners hand it
/// back to the session's execution machinery untouched.
pub trait Connection {
    /// The primary name of the driver that opened this connection.
    fn driver_name(&self) -> &str;
}

/// Name-to-driver registry owned by the application root.
#[derive(Debug, Default)]
pub struct DriverRegistry {
    drivers: HashMap<String, Driver>,
    aliases: HashMap<String, String>,
}

impl DriverRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `driver` under `name`, reachable through each of `aliases`.
    /// Re-registering a name replaces the descriptor.
    pub fn register(&mut self, name: &str, driver: Driver, aliases: &[&str]) {
        self.drivers.insert(name.to_owned(), driver);
        for alias in aliases {
            self.aliases.insert((*alias).to_owned(), name.to_owned());
        }
    }

    /// Resolve `name` (primary name or alias) to its primary name.
    pub fn resolve(&self, name: &str) -> Option<&str> {
        if let Some((key, _)) = self.drivers.get_key_value(name) {
            return Some(key.as_str());
        }
        self.aliases.get(name).map(String::as_str)
    }

    /// Look up a driver by primary name or alias.
    pub fn get(&self, name: &str) -> Option<&Driver> {
        self.resolve(name).and_then(|name| self.drivers.get(name))
    }

    /// Whether `name` resolves to a registered driver.
    pub fn is_registered(&self, name: &str) -> bool {
        self.resolve(name).is_some()
    }

    /// Registered primary names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.drivers.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

/// Install the built-in drivers.
///
/// Called once by the application root at startup.
pub fn register_builtin(registry: &mut DriverRegistry) {
    registry.register(
        "postgres",
        Driver {
            display: Some("PostgreSQL"),
            allow_dollar: true,
            allow_multiline_comments: true,
            ..Driver::default()
        },
        &["pg", "postgresql", "pgsql"],
    );
    registry.register(
        "mysql",
        Driver {
            display: Some("MySQL"),
            allow_hash_comments: true,
            ..Driver::default()
        },
        &["my", "maria", "mariadb"],
    );
    registry.register(
        "sqlite3",
        Driver {
            display: Some("SQLite3"),
            allow_multiline_comments: true,
            ..Driver::default()
        },
        &["sqlite", "file"],
    );
    registry.register(
        "sqlserver",
        Driver {
            display: Some("Microsoft SQL Server"),
            allow_multiline_comments: true,
            requires_previous_password: true,
            ..Driver::default()
        },
        &["ms", "mssql"],
    );
    registry.register(
        "oracle",
        Driver {
            display: Some("Oracle Database"),
            allow_multiline_comments: true,
            ..Driver::default()
        },
        &["or", "ora", "oracledb"],
    );
    // No special capabilities; the underlying client library's defaults
    // apply.
    registry.register("cosmos", Driver::default(), &[]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_descriptor_occupies_its_slot() {
        let mut registry = DriverRegistry::new();
        registry.register("cosmos", Driver::default(), &[]);
        assert!(registry.is_registered("cosmos"));
        let driver = registry.get("cosmos").unwrap();
        assert!(driver.display.is_none());
        assert!(!driver.allow_dollar);
    }

    #[test]
    fn aliases_resolve_to_primary_name() {
        let mut registry = DriverRegistry::new();
        register_builtin(&mut registry);
        assert_eq!(registry.resolve("pg"), Some("postgres"));
        assert_eq!(registry.resolve("postgres"), Some("postgres"));
        assert!(registry.get("mariadb").unwrap().allow_hash_comments);
        assert_eq!(registry.resolve("nosuch"), None);
    }

    #[test]
    fn names_are_sorted_primary_only() {
        let mut registry = DriverRegistry::new();
        register_builtin(&mut registry);
        let names = registry.names();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);
        assert!(names.contains(&"postgres"));
        assert!(!names.contains(&"pg"));
    }

    #[test]
    fn reregistration_replaces_descriptor() {
        let mut registry = DriverRegistry::new();
        registry.register("postgres", Driver::default(), &[]);
        registry.register(
            "postgres",
            Driver {
                allow_dollar: true,
                ..Driver::default()
            },
            &[],
        );
        assert!(registry.get("postgres").unwrap().allow_dollar);
    }
}
