//! Repository Layer - Core Traits
//!
//! Defines the abstract interfaces for data access.
//! Implementations can use SQLite, in-memory, etc.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::{DomainResult, Entity};

/// Core repository trait for CRUD operations
///
/// Generic over any Entity type.
/// All operations are async to support various backends.
#[async_trait]
pub trait Repository<T: Entity>: Send + Sync {
    /// Create a new entity, returning it with its assigned id
    async fn create(&self, entity: &T) -> DomainResult<T>;

    /// Find entity by ID
    async fn find_by_id(&self, id: T::Id) -> DomainResult<Option<T>>;

    /// List all entities
    async fn list(&self) -> DomainResult<Vec<T>>;

    /// Update an existing entity
    async fn update(&self, entity: &T) -> DomainResult<T>;

    /// Delete entity by ID, reporting whether it existed
    async fn delete(&self, id: T::Id) -> DomainResult<bool>;
}

/// Extension for repositories whose entities belong to a calendar day
#[async_trait]
pub trait DatedRepository<T: Entity>: Repository<T> {
    /// List entities owned by exactly `date`, in creation order
    async fn list_for_date(&self, date: NaiveDate) -> DomainResult<Vec<T>>;

    /// List entities from `date` onward, newest day first
    async fn list_since(&self, date: NaiveDate) -> DomainResult<Vec<T>>;
}
