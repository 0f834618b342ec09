use std::sync::Arc;

use auth::PasswordHasher;
use auth::TokenService;

use crate::domain::user::models::Credential;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::Registration;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::user::errors::UserError;
use crate::user::ports::UserStore;

/// Use-case layer for the identity service.
///
/// Composes the password hasher, the token service, and the user store.
/// Stateless between requests; the only shared state is the immutable
/// startup configuration baked into the injected components, so one
/// instance serves any number of concurrent requests.
pub struct UserDirectory<S>
where
    S: UserStore,
{
    store: Arc<S>,
    password_hasher: Arc<PasswordHasher>,
    token_service: Arc<TokenService>,
}

impl<S> UserDirectory<S>
where
    S: UserStore,
{
    /// Create a new user directory with injected dependencies.
    ///
    /// # Arguments
    /// * `store` - User persistence implementation
    /// * `password_hasher` - Startup-configured hashing policy
    /// * `token_service` - Startup-configured token signer
    pub fn new(
        store: Arc<S>,
        password_hasher: Arc<PasswordHasher>,
        token_service: Arc<TokenService>,
    ) -> Self {
        Self {
            store,
            password_hasher,
            token_service,
        }
    }

    /// Register a new user and issue a token for the new account.
    ///
    /// Always an insert; there is no duplicate check on the name pair. If
    /// the store write fails after hashing, the hash is simply discarded.
    pub async fn register(&self, credential: Credential) -> Result<Registration, UserError> {
        let password_hash = self.hash_password(credential.password).await?;

        let user = self
            .store
            .create(NewUser {
                first_name: credential.first_name,
                last_name: credential.last_name,
                password_hash,
            })
            .await?;

        let token = self.token_service.issue(user.id.0)?;

        Ok(Registration { user, token })
    }

    /// Authenticate by full name and password and issue a token.
    ///
    /// An unknown name pair and a failed password check both return
    /// `WrongCredentials`; callers cannot tell which happened.
    pub async fn login(&self, credential: Credential) -> Result<String, UserError> {
        let user = self
            .store
            .find_by_full_name(&credential.first_name, &credential.last_name)
            .await?
            .ok_or(UserError::WrongCredentials)?;

        if !self
            .verify_password(credential.password, user.password_hash.clone())
            .await?
        {
            return Err(UserError::WrongCredentials);
        }

        let token = self.token_service.issue(user.id.0)?;

        Ok(token)
    }

    /// Privileged create: same body as [`register`](Self::register).
    ///
    /// The caller is already authenticated (enforced at the route layer);
    /// the returned token identifies the newly created account, not the
    /// caller.
    pub async fn create(&self, credential: Credential) -> Result<Registration, UserError> {
        self.register(credential).await
    }

    /// Retrieve a user by id.
    pub async fn show(&self, id: UserId) -> Result<User, UserError> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound)
    }

    /// Retrieve all users, unfiltered.
    pub async fn index(&self) -> Result<Vec<User>, UserError> {
        self.store.list_all().await
    }

    // Argon2 is deliberately CPU-expensive; run it on the blocking pool so
    // it never stalls the async workers.
    async fn hash_password(&self, password: String) -> Result<String, UserError> {
        let hasher = Arc::clone(&self.password_hasher);

        tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| UserError::Unknown(e.to_string()))?
            .map_err(UserError::from)
    }

    async fn verify_password(&self, password: String, hash: String) -> Result<bool, UserError> {
        let hasher = Arc::clone(&self.password_hasher);

        tokio::task::spawn_blocking(move || hasher.verify(&password, &hash))
            .await
            .map_err(|e| UserError::Unknown(e.to_string()))
    }
}
