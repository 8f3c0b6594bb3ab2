//! Main authentication service implementation

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::entities::user::User;
use crate::domain::value_objects::{AuthResponse, UserProfile};
use crate::errors::{AuthError, DomainError, DomainResult};
use crate::repositories::token_store::TokenStore;
use crate::repositories::user::UserRepository;
use crate::services::correlation::{CorrelationService, EventPublisher, SignupPayload};
use crate::services::token::TokenService;

use super::hasher::PasswordHasher;

/// Authentication service orchestrating the complete account lifecycle
///
/// Thin coordination over the token and correlation services plus the
/// external user storage; all protocol decisions (what counts as a live
/// session, how redemption stays single-use) live in those services.
pub struct AuthService<U, S, P, H>
where
    U: UserRepository,
    S: TokenStore,
    P: EventPublisher,
    H: PasswordHasher,
{
    user_repository: Arc<U>,
    token_service: Arc<TokenService<S>>,
    correlation_service: Arc<CorrelationService<S, P>>,
    password_hasher: Arc<H>,
}

impl<U, S, P, H> AuthService<U, S, P, H>
where
    U: UserRepository,
    S: TokenStore,
    P: EventPublisher,
    H: PasswordHasher,
{
    /// Create a new authentication service
    pub fn new(
        user_repository: Arc<U>,
        token_service: Arc<TokenService<S>>,
        correlation_service: Arc<CorrelationService<S, P>>,
        password_hasher: Arc<H>,
    ) -> Self {
        Self {
            user_repository,
            token_service,
            correlation_service,
            password_hasher,
        }
    }

    /// Begin a signup: reject duplicates, then store the pending
    /// registration and publish the verification event
    ///
    /// Duplicates are rejected BEFORE a correlation token is minted, so
    /// an attacker cannot probe for accounts through mail traffic. No
    /// durable record is created here; that happens at verification.
    pub async fn signup(&self, payload: SignupPayload) -> DomainResult<()> {
        if !lf_shared::utils::is_valid_email(&payload.email) {
            return Err(DomainError::Validation {
                message: "invalid email format".to_string(),
            });
        }

        if self.user_repository.exists_by_email(&payload.email).await? {
            warn!(email = %payload.email, "signup rejected: duplicate email");
            return Err(DomainError::Auth(AuthError::DuplicateEmail));
        }
        if self
            .user_repository
            .exists_by_phone(&payload.phone_number)
            .await?
        {
            warn!(email = %payload.email, "signup rejected: duplicate phone");
            return Err(DomainError::Auth(AuthError::DuplicatePhone));
        }

        self.correlation_service.begin_signup(&payload).await?;
        Ok(())
    }

    /// Redeem a signup token and create the durable account
    ///
    /// The consumed token is the proof of a completed out-of-band mail
    /// round trip; the password is hashed here, at redemption time.
    pub async fn verify_signup(&self, token: &str) -> DomainResult<UserProfile> {
        let payload = self.correlation_service.redeem_signup(token).await?;

        let password_hash = self.password_hasher.hash(&payload.password)?;
        let user = User::new(
            payload.first_name,
            payload.last_name,
            payload.email,
            payload.phone_number,
            password_hash,
        );

        let saved = self.user_repository.save(user).await?;
        info!(email = %saved.email, "user verified and saved");
        Ok(UserProfile::from(&saved))
    }

    /// Authenticate with email and password, establishing a session
    ///
    /// Success is only reported after the refresh-session store write
    /// has been acknowledged.
    pub async fn login(&self, email: &str, password: &str) -> DomainResult<AuthResponse> {
        let user = match self.user_repository.find_by_email(email).await? {
            Some(user) => user,
            None => {
                warn!(email, "login failed: unknown email");
                return Err(DomainError::Auth(AuthError::InvalidCredentials));
            }
        };

        if !user.is_enabled() {
            warn!(email, "login rejected: account disabled");
            return Err(DomainError::Auth(AuthError::AccountDisabled));
        }

        if !self.password_hasher.verify(password, &user.password_hash)? {
            warn!(email, "login failed: bad password");
            return Err(DomainError::Auth(AuthError::InvalidCredentials));
        }

        let pair = self.token_service.issue_token_pair(&user.email, user.role).await?;
        info!(email, "login successful, session established");
        Ok(AuthResponse::from_token_pair(pair, &user))
    }

    /// Exchange a live refresh token id for a new access token
    ///
    /// An absent id is an explicit invalid-token failure, unlike the
    /// filters' fail-open behavior.
    pub async fn refresh_access_token(&self, refresh_token: &str) -> DomainResult<String> {
        let subject = self.token_service.resolve_refresh_token(refresh_token).await?;

        let user = self
            .user_repository
            .find_by_email(&subject)
            .await?
            .ok_or(DomainError::Auth(AuthError::UserNotFound))?;

        let access_token = self.token_service.issue_access_token(&user.email, user.role)?;
        info!(email = %subject, "access token refreshed");
        Ok(access_token)
    }

    /// Revoke one live session of the subject
    ///
    /// Single-session semantics: other devices of the same subject stay
    /// logged in.
    pub async fn logout(&self, subject: &str) -> DomainResult<bool> {
        self.token_service.revoke_session(subject).await
    }

    /// Begin a password reset for an existing account
    ///
    /// # Returns
    /// * `Err(DomainError::NotFound)` - No account with that email;
    ///   explicit by contract, not silently swallowed
    pub async fn request_reset(&self, email: &str) -> DomainResult<()> {
        if !self.user_repository.exists_by_email(email).await? {
            warn!(email, "reset rejected: unknown email");
            return Err(DomainError::NotFound {
                resource: "user".to_string(),
            });
        }

        self.correlation_service.begin_reset(email).await?;
        Ok(())
    }

    /// Redeem a reset token and replace the account credential
    pub async fn confirm_reset(&self, token: &str, new_password: &str) -> DomainResult<()> {
        let email = self.correlation_service.redeem_reset(token).await?;

        let password_hash = self.password_hasher.hash(new_password)?;
        if !self.user_repository.update_password(&email, &password_hash).await? {
            return Err(DomainError::Auth(AuthError::UserNotFound));
        }

        info!(email, "password reset completed");
        Ok(())
    }
}
