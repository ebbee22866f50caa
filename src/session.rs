//! Session provider: who is acting, if anyone.
//!
//! Real authentication lives outside this client. The identity is an opaque
//! user id, persisted in the config file by `login`/`logout` and overridable
//! per invocation with the global `--as` flag. The engine never reads it
//! ambiently: every fetch/submit takes the identity as an explicit argument.

use crate::config::Config;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub user_id: String,
}

impl Identity {
    pub fn new(user_id: &str) -> Self {
        Self {
            user_id: user_id.to_string(),
        }
    }
}

/// Resolve the acting identity for this invocation.
/// Priority: `--as` override, then the signed-in identity from the config.
pub fn current(override_user: Option<&str>, cfg: &Config) -> Option<Identity> {
    if let Some(u) = override_user {
        let u = u.trim();
        if !u.is_empty() {
            return Some(Identity::new(u));
        }
    }
    cfg.user_id
        .as_deref()
        .filter(|u| !u.trim().is_empty())
        .map(Identity::new)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn override_wins_over_config() {
        let mut cfg = Config::default();
        cfg.user_id = Some("u-config".to_string());
        let id = current(Some("u-cli"), &cfg).unwrap();
        assert_eq!(id.user_id, "u-cli");
    }

    #[test]
    fn falls_back_to_config_identity() {
        let mut cfg = Config::default();
        cfg.user_id = Some("u-config".to_string());
        let id = current(None, &cfg).unwrap();
        assert_eq!(id.user_id, "u-config");
    }

    #[test]
    fn no_identity_when_signed_out() {
        let cfg = Config::default();
        assert!(current(None, &cfg).is_none());
        assert!(current(Some("   "), &cfg).is_none());
    }
}
