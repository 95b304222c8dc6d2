//! Backend identification.

use std::fmt;

/// Identifies the type of key-value backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BackendKind {
    /// In-process store (tests, local development).
    Memory,
    /// Redis server.
    Redis,
    /// Custom or unknown backend.
    Custom(&'static str),
}

impl BackendKind {
    /// Returns the backend's short name.
    pub fn as_str(&self) -> &'static str {
        match self {
            BackendKind::Memory => "memory",
            BackendKind::Redis => "redis",
            BackendKind::Custom(name) => name,
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_kind_display() {
        assert_eq!(BackendKind::Memory.to_string(), "memory");
        assert_eq!(BackendKind::Redis.to_string(), "redis");
        assert_eq!(BackendKind::Custom("dragonfly").to_string(), "dragonfly");
        assert_eq!(BackendKind::Custom("dragonfly").as_str(), "dragonfly");
    }
}
