//! Domain value objects and types.
//!
//! Type-safe wrappers for the fields of a contact record. Each value object
//! validates at construction time, so an invalid name, phone number or
//! birthday can never be represented.

pub mod birthday;
pub mod errors;
pub mod field;
pub mod name;
pub mod phone;

pub use birthday::Birthday;
pub use errors::ValidationError;
pub use field::Field;
pub use name::Name;
pub use phone::Phone;
