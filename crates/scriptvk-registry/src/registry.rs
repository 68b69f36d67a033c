//! EnumRegistry - symbolic name to native code mapping.
//!
//! # Storage Model
//!
//! - One [`EnumDomain`] per named domain, holding a name→code map and
//!   the reverse code→name index. Both are built at registration time
//!   for O(1) lookup in either direction.
//! - Codes are `i32`, matching the wire width of the native API's
//!   enums.
//!
//! # Thread Safety
//!
//! The registry follows a two-phase lifecycle:
//!
//! - **Registration phase**: populated single-threaded during process
//!   initialization.
//! - **Lookup phase**: after initialization the registry is read-only,
//!   so shared references can be handed out freely without locking.

use rustc_hash::FxHashMap;
use thiserror::Error;

/// Errors that can occur while populating the registry.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RegistrationError {
    /// The domain was registered twice.
    #[error("enum domain '{domain}' is already registered")]
    DuplicateDomain { domain: String },

    /// Two entries in one domain share a symbol.
    #[error("duplicate symbol '{symbol}' in enum domain '{domain}'")]
    DuplicateSymbol { domain: String, symbol: String },
}

/// Name↔code tables for a single enum domain.
#[derive(Debug, Default, Clone)]
struct EnumDomain {
    by_name: FxHashMap<String, i32>,
    by_code: FxHashMap<i32, String>,
}

/// Symbolic name to native code registry for all enum domains.
#[derive(Debug, Default, Clone)]
pub struct EnumRegistry {
    domains: FxHashMap<String, EnumDomain>,
}

impl EnumRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a domain with its `(symbol, code)` entries.
    ///
    /// A code may appear under several symbols (the native API has
    /// aliases); the first symbol registered for a code is the one
    /// [`symbol`](Self::symbol) reports.
    pub fn register(
        &mut self,
        domain: &str,
        values: &[(&str, i32)],
    ) -> Result<(), RegistrationError> {
        if self.domains.contains_key(domain) {
            return Err(RegistrationError::DuplicateDomain {
                domain: domain.to_string(),
            });
        }
        let mut table = EnumDomain::default();
        for &(symbol, code) in values {
            if table.by_name.insert(symbol.to_string(), code).is_some() {
                return Err(RegistrationError::DuplicateSymbol {
                    domain: domain.to_string(),
                    symbol: symbol.to_string(),
                });
            }
            table.by_code.entry(code).or_insert_with(|| symbol.to_string());
        }
        self.domains.insert(domain.to_string(), table);
        Ok(())
    }

    /// Resolve a symbolic name to its native code.
    pub fn resolve(&self, domain: &str, name: &str) -> Option<i32> {
        self.domains.get(domain)?.by_name.get(name).copied()
    }

    /// Look up the symbolic name for a native code.
    pub fn symbol(&self, domain: &str, code: i32) -> Option<&str> {
        self.domains.get(domain)?.by_code.get(&code).map(String::as_str)
    }

    /// Check whether a domain is registered.
    pub fn has_domain(&self, domain: &str) -> bool {
        self.domains.contains_key(domain)
    }

    /// Number of registered domains.
    pub fn len(&self) -> usize {
        self.domains.len()
    }

    /// Check whether no domains are registered.
    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }
}
