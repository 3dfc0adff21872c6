//! Environment variable access behind a trait.
//!
//! ```
//! use trogon_std::env::{ReadEnv, SystemEnv};
//!
//! fn listen_port<E: ReadEnv>(env: &E) -> String {
//!     env.non_empty("GITHUB_WEBHOOK_PORT")
//!         .unwrap_or_else(|| "8080".to_string())
//! }
//!
//! let _ = listen_port(&SystemEnv);
//! ```

mod in_memory;
mod read_env;
mod system;

#[cfg(any(test, feature = "test-support"))]
pub use in_memory::InMemoryEnv;
pub use read_env::ReadEnv;
pub use system::SystemEnv;
