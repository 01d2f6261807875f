//! Static credentials for `LocalStack`
//!
//! [`AwsLocalCredentialsProvider`] always hands out the same credential set.
//! It is meant for a local emulator, so the credentials never expire and are
//! never refreshed.

use std::fmt;

use aws_credential_types::provider::{error::CredentialsError, future, ProvideCredentials};
use aws_credential_types::Credentials;
use tracing::debug;

use crate::error::{AwsLocalCredentialsError, CredentialsResult};
use crate::{
    AWS_LOCAL_ACCESS_KEY, AWS_LOCAL_ACCOUNT_ID, AWS_LOCAL_CREDENTIALS_NAME, AWS_LOCAL_SECRET,
};

/// An immutable set of credentials
#[derive(Clone, Default, PartialEq, Eq)]
pub struct CredentialSet {
    access_key_id: String,
    secret_access_key: String,
    account_id: String,
    session_token: String,
    can_expire: bool,
    source: Option<&'static str>,
}

impl CredentialSet {
    /// Creates a credential set with no session token that never expires
    pub fn new(
        access_key_id: impl Into<String>,
        secret_access_key: impl Into<String>,
        account_id: impl Into<String>,
    ) -> Self {
        Self {
            access_key_id: access_key_id.into(),
            secret_access_key: secret_access_key.into(),
            account_id: account_id.into(),
            session_token: String::new(),
            can_expire: false,
            source: None,
        }
    }

    /// Returns a copy of this set labelled with `source`
    #[must_use]
    pub fn with_source(self, source: &'static str) -> Self {
        Self {
            source: Some(source),
            ..self
        }
    }

    /// A set that carries nothing but a source label
    fn source_only(source: &'static str) -> Self {
        Self::default().with_source(source)
    }

    /// Access key id
    #[must_use]
    pub fn access_key_id(&self) -> &str {
        &self.access_key_id
    }

    /// Secret access key
    #[must_use]
    pub fn secret_access_key(&self) -> &str {
        &self.secret_access_key
    }

    /// Account id the credentials belong to
    #[must_use]
    pub fn account_id(&self) -> &str {
        &self.account_id
    }

    /// Session token, always empty for static credentials
    #[must_use]
    pub fn session_token(&self) -> &str {
        &self.session_token
    }

    /// Whether the credentials can expire
    #[must_use]
    pub const fn can_expire(&self) -> bool {
        self.can_expire
    }

    /// Label of the provider that produced this set, if any
    #[must_use]
    pub const fn source(&self) -> Option<&'static str> {
        self.source
    }

    const fn has_empty_keys(&self) -> bool {
        self.access_key_id.is_empty() || self.secret_access_key.is_empty()
    }
}

impl fmt::Debug for CredentialSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialSet")
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"** redacted **")
            .field("account_id", &self.account_id)
            .field("can_expire", &self.can_expire)
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}

impl From<CredentialSet> for Credentials {
    fn from(set: CredentialSet) -> Self {
        let mut builder = Self::builder()
            .access_key_id(set.access_key_id)
            .secret_access_key(set.secret_access_key)
            .provider_name(set.source.unwrap_or(AWS_LOCAL_CREDENTIALS_NAME));
        if !set.session_token.is_empty() {
            builder = builder.session_token(set.session_token);
        }
        if !set.account_id.is_empty() {
            builder = builder.account_id(set.account_id);
        }
        builder.build()
    }
}

/// Static credentials provider designed for use with `LocalStack`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AwsLocalCredentialsProvider {
    value: CredentialSet,
}

impl AwsLocalCredentialsProvider {
    /// Creates a provider for the given key, secret and account id
    pub fn new(
        key: impl Into<String>,
        secret: impl Into<String>,
        account_id: impl Into<String>,
    ) -> Self {
        Self::from_credential_set(CredentialSet::new(key, secret, account_id))
    }

    /// Creates a provider with the well-known `LocalStack` test identity
    #[must_use]
    pub fn new_default() -> Self {
        Self::new(AWS_LOCAL_ACCESS_KEY, AWS_LOCAL_SECRET, AWS_LOCAL_ACCOUNT_ID)
    }

    /// Wraps an existing credential set, keeping its source label if set
    #[must_use]
    pub const fn from_credential_set(value: CredentialSet) -> Self {
        Self { value }
    }

    /// Returns the held credentials
    ///
    /// The returned set is labelled with [`AWS_LOCAL_CREDENTIALS_NAME`] unless
    /// it already carries a source label.
    ///
    /// # Errors
    ///
    /// Returns `AwsLocalCredentialsError::EmptyCredentials` if the access key
    /// or secret key is empty
    pub fn retrieve(&self) -> CredentialsResult<CredentialSet> {
        if self.value.has_empty_keys() {
            debug!("Refusing to hand out empty awslocal credentials");
            return Err(AwsLocalCredentialsError::EmptyCredentials {
                partial: CredentialSet::source_only(AWS_LOCAL_CREDENTIALS_NAME),
            });
        }

        let mut value = self.value.clone();
        if value.source.is_none() {
            value.source = Some(AWS_LOCAL_CREDENTIALS_NAME);
        }

        Ok(value)
    }

    /// Static credentials never expire
    #[must_use]
    pub const fn is_expired(&self) -> bool {
        false
    }
}

impl Default for AwsLocalCredentialsProvider {
    fn default() -> Self {
        Self::new_default()
    }
}

impl ProvideCredentials for AwsLocalCredentialsProvider {
    fn provide_credentials<'a>(&'a self) -> future::ProvideCredentials<'a>
    where
        Self: 'a,
    {
        future::ProvideCredentials::ready(
            self.retrieve()
                .map(Credentials::from)
                .map_err(CredentialsError::invalid_configuration),
        )
    }
}
