//! Address Book - contact records with validated fields and an assistant bot.
//!
//! The library holds a set of contacts (name, phone numbers, optional
//! birthday), validates field formats on input, supports lookup, edit and
//! delete, and finds contacts whose birthday falls in the coming week.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (`Name`, `Phone`, `Birthday`)
//! - **models**: `Record` and the `AddressBook` that owns them
//! - **assistant**: Command parsing and dispatch for the interactive bot
//! - **error**: Error types for the command and configuration layers
//! - **config**: Configuration from environment variables

pub mod assistant;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;

pub use assistant::{Assistant, Reply};
pub use config::Config;
pub use domain::{Birthday, Field, Name, Phone, ValidationError};
pub use error::{CommandError, ConfigError};
pub use models::{AddressBook, Record};
