use async_trait::async_trait;

use crate::domain::user::models::NewUser;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::user::errors::UserError;

/// Persistence operations for the user aggregate.
///
/// The store owns persisted records and id assignment; everything above it
/// treats persistence as an external collaborator behind this port.
#[async_trait]
pub trait UserStore: Send + Sync + 'static {
    /// Persist a new user and assign its id.
    ///
    /// # Arguments
    /// * `new_user` - Insert shape with the already-hashed password
    ///
    /// # Returns
    /// Created user entity with the store-assigned id
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, new_user: NewUser) -> Result<User, UserError>;

    /// Retrieve user by identifier.
    ///
    /// # Arguments
    /// * `id` - User ID
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserError>;

    /// Retrieve user by full name.
    ///
    /// The name pair is not unique in the data model; when several users
    /// share a full name this returns the first match.
    ///
    /// # Arguments
    /// * `first_name` - First name to match
    /// * `last_name` - Last name to match
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_full_name(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> Result<Option<User>, UserError>;

    /// Retrieve all users from storage.
    ///
    /// # Returns
    /// Vector of all users
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_all(&self) -> Result<Vec<User>, UserError>;
}
