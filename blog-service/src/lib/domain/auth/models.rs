use std::fmt;

use crate::domain::identity::models::Identity;
use crate::domain::identity::models::IdentityId;

/// Why a credential or token was not accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RejectionReason {
    BadUsername,
    BadPassword,
    MalformedToken,
    ExpiredToken,
    UnknownSubject,
}

impl RejectionReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            RejectionReason::BadUsername => "bad_username",
            RejectionReason::BadPassword => "bad_password",
            RejectionReason::MalformedToken => "malformed_token",
            RejectionReason::ExpiredToken => "expired_token",
            RejectionReason::UnknownSubject => "unknown_subject",
        }
    }
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of checking a password or a token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthResult {
    Authenticated(Identity),
    Rejected(RejectionReason),
}

impl AuthResult {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, AuthResult::Authenticated(_))
    }
}

/// Role a route demands. Any verified identity satisfies `Reader`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredRole {
    Reader,
    Author,
}

impl RequiredRole {
    pub fn is_satisfied_by(&self, identity: &Identity) -> bool {
        match self {
            RequiredRole::Reader => true,
            RequiredRole::Author => identity.is_author,
        }
    }
}

/// Verified identity attached to a request that passed the access guard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthContext {
    pub identity: Identity,
}

impl AuthContext {
    pub fn new(identity: Identity) -> Self {
        Self { identity }
    }

    pub fn identity_id(&self) -> IdentityId {
        self.identity.id
    }

    pub fn is_author(&self) -> bool {
        self.identity.is_author
    }
}

/// Machine-readable cause of a denial.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenialReason {
    MissingCredentials,
    Rejected(RejectionReason),
    NotAuthorized,
    InternalError,
}

impl DenialReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            DenialReason::MissingCredentials => "missing_credentials",
            DenialReason::Rejected(reason) => reason.as_str(),
            DenialReason::NotAuthorized => "not_authorized",
            DenialReason::InternalError => "internal_error",
        }
    }
}

impl fmt::Display for DenialReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A refused request: HTTP status code and reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Denial {
    pub status: u16,
    pub reason: DenialReason,
}

impl Denial {
    pub fn missing_credentials() -> Self {
        Self {
            status: 401,
            reason: DenialReason::MissingCredentials,
        }
    }

    pub fn rejected(reason: RejectionReason) -> Self {
        Self {
            status: 401,
            reason: DenialReason::Rejected(reason),
        }
    }

    pub fn not_authorized() -> Self {
        Self {
            status: 401,
            reason: DenialReason::NotAuthorized,
        }
    }

    pub fn internal_error() -> Self {
        Self {
            status: 500,
            reason: DenialReason::InternalError,
        }
    }
}
