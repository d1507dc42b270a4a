use crate::config::toml_config::GuideConfig;
use crate::core::alias::AliasRegistry;
use crate::core::price::PriceRegistry;
use crate::utils::error::{GuideError, Result};
use crate::utils::validation::validate_single_symbol;
use std::sync::{Arc, Mutex};

/// All mutable state of one conversation.
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub aliases: AliasRegistry,
    pub prices: PriceRegistry,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a session pre-loaded with the aliases and prices of `config`.
    pub fn from_config(config: &GuideConfig) -> Result<Self> {
        let mut session = Session::new();
        for (alias, token) in &config.aliases {
            let symbol = validate_single_symbol(&format!("aliases.{}", alias), token)?;
            session.aliases.define(alias, symbol);
        }
        for (item, price) in &config.prices {
            session.prices.define(item, *price);
        }
        tracing::debug!(
            "Seeded session with {} aliases and {} prices",
            session.aliases.len(),
            session.prices.len()
        );
        Ok(session)
    }
}

/// A session that several threads may dispatch against.
///
/// The lock is held for a whole define-or-lookup so later lines always see
/// the definitions made by earlier ones.
#[derive(Debug, Clone, Default)]
pub struct SharedSession {
    inner: Arc<Mutex<Session>>,
}

impl SharedSession {
    pub fn new(session: Session) -> Self {
        Self {
            inner: Arc::new(Mutex::new(session)),
        }
    }

    pub fn with<R>(&self, f: impl FnOnce(&mut Session) -> R) -> Result<R> {
        let mut session = self
            .inner
            .lock()
            .map_err(|_| GuideError::internal("session lock poisoned"))?;
        Ok(f(&mut session))
    }

    pub fn snapshot(&self) -> Result<Session> {
        self.with(|session| session.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::symbol::Symbol;
    use std::collections::BTreeMap;

    #[test]
    fn test_from_config_seeds_registries() {
        let config = GuideConfig {
            aliases: BTreeMap::from([("glob".to_string(), "I".to_string())]),
            prices: BTreeMap::from([("Silver".to_string(), 17.0)]),
            ..GuideConfig::default()
        };
        let session = Session::from_config(&config).unwrap();
        assert_eq!(session.aliases.lookup("glob"), Some(Symbol::I));
        assert_eq!(session.prices.lookup("silver"), Some(17.0));
    }

    #[test]
    fn test_from_config_rejects_multi_symbol_alias() {
        let config = GuideConfig {
            aliases: BTreeMap::from([("glob".to_string(), "IV".to_string())]),
            ..GuideConfig::default()
        };
        assert!(Session::from_config(&config).is_err());
    }

    #[test]
    fn test_shared_session_sees_writes_from_other_threads() {
        let shared = SharedSession::default();
        let writer = shared.clone();
        std::thread::spawn(move || {
            writer
                .with(|session| session.aliases.define("glob", Symbol::I))
                .unwrap();
        })
        .join()
        .unwrap();

        let found = shared.with(|session| session.aliases.lookup("glob")).unwrap();
        assert_eq!(found, Some(Symbol::I));
    }

    #[test]
    fn test_poisoned_lock_is_an_internal_fault() {
        let shared = SharedSession::default();
        let poisoner = shared.clone();
        let _ = std::thread::spawn(move || {
            let _ = poisoner.with(|_| panic!("boom"));
        })
        .join();

        let err = shared.with(|_| ()).unwrap_err();
        assert!(matches!(err, GuideError::InternalFault { .. }));
    }
}
