//! Vaultsync - compare and promote secrets across environments.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── init          # Write .vaultsync.toml
//! │   ├── envs          # List registered environments
//! │   ├── secrets       # Secret CRUD in one environment
//! │   ├── compare       # Diff two environments, export reports
//! │   ├── copy          # Direct and edited batch copies
//! │   ├── history       # List, show and restore versions
//! │   └── completions   # Shell completions
//! └── core/             # Core library components
//!     ├── config        # .vaultsync.toml management
//!     ├── registry      # Environment id -> store client
//!     ├── compare       # Diff engine
//!     ├── copy          # Batch copy orchestrator
//!     ├── history       # Version history manager
//!     ├── session       # Comparison + selection state
//!     ├── domain/       # Diff, selection, outcomes, versions
//!     └── store/        # Secret store clients
//!         ├── mod       # SecretStore trait
//!         ├── memory    # Process-local store
//!         └── fs        # JSON document store
//! ```
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use vaultsync::core::domain::Environment;
//! use vaultsync::core::registry::EnvironmentRegistry;
//! use vaultsync::core::session::ComparisonSession;
//! use vaultsync::core::store::Memory;
//!
//! # async fn run() -> vaultsync::error::Result<()> {
//! let registry = EnvironmentRegistry::new()
//!     .with(Environment::new("prod", "Production", "memory:"), Arc::new(Memory::new()))?
//!     .with(Environment::new("dev", "Development", "memory:"), Arc::new(Memory::new()))?;
//!
//! let mut session = ComparisonSession::new(registry, "prod", "dev")?;
//! session.compare().await?;
//! session.select_all("db")?;
//! let result = session.copy_selected().await?;
//! println!("{} copied, {} failed", result.success_count, result.failure_count);
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod core;
pub mod error;
