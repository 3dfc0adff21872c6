#[cfg(any(test, feature = "test-support"))]
use std::cell::RefCell;
#[cfg(any(test, feature = "test-support"))]
use std::collections::HashMap;
#[cfg(any(test, feature = "test-support"))]
use std::env;

#[cfg(any(test, feature = "test-support"))]
use super::ReadEnv;

/// Won't touch the global process environment.
///
/// All methods take `&self`; values live in a `RefCell`.
#[cfg(any(test, feature = "test-support"))]
#[derive(Debug, Default)]
pub struct InMemoryEnv {
    vars: RefCell<HashMap<String, String>>,
}

#[cfg(any(test, feature = "test-support"))]
impl InMemoryEnv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, key: impl Into<String>, value: impl Into<String>) {
        self.vars.borrow_mut().insert(key.into(), value.into());
    }

    pub fn remove(&self, key: &str) {
        self.vars.borrow_mut().remove(key);
    }
}

#[cfg(any(test, feature = "test-support"))]
impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for InMemoryEnv {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let env = Self::new();
        for (key, value) in iter {
            env.set(key, value);
        }
        env
    }
}

#[cfg(any(test, feature = "test-support"))]
impl ReadEnv for InMemoryEnv {
    fn var(&self, key: &str) -> Result<String, env::VarError> {
        self.vars
            .borrow()
            .get(key)
            .cloned()
            .ok_or(env::VarError::NotPresent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_and_get() {
        let env = InMemoryEnv::new();
        env.set("TELEGRAM_CHAT_ID", "-100123");
        assert_eq!(env.var("TELEGRAM_CHAT_ID").unwrap(), "-100123");
    }

    #[test]
    fn missing_is_not_present() {
        assert!(matches!(
            InMemoryEnv::new().var("NONEXISTENT"),
            Err(std::env::VarError::NotPresent)
        ));
    }

    #[test]
    fn remove_and_overwrite() {
        let env: InMemoryEnv = [("KEY", "v1")].into_iter().collect();
        env.set("KEY", "v2");
        assert_eq!(env.var("KEY").unwrap(), "v2");

        env.remove("KEY");
        assert!(env.var("KEY").is_err());
    }

    #[test]
    fn non_empty_ignores_blank_values() {
        let env: InMemoryEnv = [("EMPTY", ""), ("BLANK", "  "), ("SET", " s3cret ")]
            .into_iter()
            .collect();
        assert_eq!(env.non_empty("EMPTY"), None);
        assert_eq!(env.non_empty("BLANK"), None);
        assert_eq!(env.non_empty("MISSING"), None);
        assert_eq!(env.non_empty("SET").as_deref(), Some("s3cret"));
    }
}
