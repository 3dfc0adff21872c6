use std::env;

/// # Thread Safety
///
/// Does **not** require `Send + Sync`. Configuration is read once at
/// startup, before anything is spawned.
pub trait ReadEnv {
    fn var(&self, key: &str) -> Result<String, env::VarError>;

    /// The variable's value, treating unset, blank and non-UTF-8 values
    /// alike as absent.
    fn non_empty(&self, key: &str) -> Option<String> {
        self.var(key)
            .ok()
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
    }
}
