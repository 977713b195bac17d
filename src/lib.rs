// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::needless_pass_by_value)]

//! # Glue Model
//!
//! Typed value objects for a managed ETL and data-catalog service: request
//! and result shapes plus domain records such as [`Table`](model::Table),
//! [`Connection`](model::Connection), [`Crawler`](model::Crawler) and
//! [`JobRun`](model::JobRun).
//!
//! This crate has no transport, no wire codec and no credentials. A
//! collaborator decodes service responses into records, and reads records back
//! to encode requests. What the crate does provide is a consistent value
//! contract for every record:
//!
//! - **Optional fields**: every field is an `Option`, absence is distinct
//!   from empty
//! - **Fluent construction**: `with_*` mutates and returns `&mut Self`; a
//!   consuming builder per field returns the updated value
//! - **Open enums**: enumerated fields take a known variant or a raw string
//!   and store the same thing either way
//! - **Incremental maps**: `add_*_entry` rejects a duplicate key with
//!   [`DuplicateKeyError`], `clear_*_entries` resets to absent
//! - **Structural equality and hashing** over all fields
//! - **Rendering**: `{Name: orders,DatabaseName: sales_db}` for debugging
//! - **Validation metadata**: documented constraints, checked on demand
//!
//! ## Quick Start
//!
//! ```rust
//! use glue_model::model::{Connection, PhysicalConnectionRequirements};
//! use glue_model::types::{ConnectionPropertyKey, ConnectionType};
//! use glue_model::{ModelRecord, ValidationOptions};
//!
//! # fn main() -> glue_model::Result<()> {
//! let mut connection = Connection::new();
//! connection
//!     .with_name("warehouse")
//!     .with_connection_type(ConnectionType::Jdbc)
//!     .add_connection_properties_entry(
//!         ConnectionPropertyKey::JdbcConnectionUrl,
//!         "jdbc:postgresql://db:5432/warehouse",
//!     )?
//!     .with_physical_connection_requirements(
//!         PhysicalConnectionRequirements::new().subnet_id("subnet-0a1b2c"),
//!     );
//!
//! assert_eq!(connection.get_connection_type_str(), Some("JDBC"));
//! assert!(connection.validate(&ValidationOptions::default()).is_empty());
//! # Ok(())
//! # }
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Enumerated field types
pub mod types;

/// Generic record contract and the record generator
pub mod record;

/// Open enum support
pub mod enums;

/// Constraint metadata and validation
pub mod validate;

/// Validation options
pub mod config;

/// Concrete records
pub mod model;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::ValidationOptions;
pub use enums::OpenEnum;
pub use error::{DuplicateKeyError, Error, Result};
pub use record::{ModelRecord, StringMap};

#[doc(hidden)]
pub use paste;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
