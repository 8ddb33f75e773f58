//! Hostel factory for creating test hostel entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test hostels with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::hostel::HostelFactory;
///
/// let hostel = HostelFactory::new(&db)
///     .name("Block A")
///     .address(None)
///     .build()
///     .await?;
/// ```
pub struct HostelFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    address: Option<String>,
}

impl<'a> HostelFactory<'a> {
    /// Creates a new HostelFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Hostel {id}"` where id is auto-incremented
    /// - address: `Some("{id} Campus Road")`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Hostel {}", id),
            address: Some(format!("{} Campus Road", id)),
        }
    }

    /// Sets the hostel name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the hostel address.
    pub fn address(mut self, address: Option<String>) -> Self {
        self.address = address;
        self
    }

    /// Builds and inserts the hostel entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::hostel::Model)` - Created hostel entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::hostel::Model, DbErr> {
        entity::hostel::ActiveModel {
            name: ActiveValue::Set(self.name),
            address: ActiveValue::Set(self.address),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a hostel with default values.
///
/// Shorthand for `HostelFactory::new(db).build().await`.
pub async fn create_hostel(db: &DatabaseConnection) -> Result<entity::hostel::Model, DbErr> {
    HostelFactory::new(db).build().await
}
