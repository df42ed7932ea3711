//! Service layer providing business-oriented CRUD operations on top of models.
//! - Validates inputs before they touch the database.
//! - Reuses validation and entity definitions in the `models` crate.
//! - Provides clear error types consumed by the HTTP layer.

pub mod db;
pub mod errors;
pub mod stats;
#[cfg(test)]
pub mod test_support;
