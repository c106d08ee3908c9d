//! Current-user identity as seen by the dashboard.
//!
//! The identity provider itself lives outside this crate. All the dashboard
//! needs is something implementing [`IdentityLookup`]: a synchronous query
//! answering "who is the current user, if anyone". Its answer is folded into
//! [`Identity`] by [`Identity::resolve`], which is where lookup failures stop.

use thiserror::Error;
use tracing::{debug, warn};

/// Text shown wherever an absent identity has to be displayed.
pub const ABSENT_PLACEHOLDER: &str = "Not signed in";

/// Failure reported by an identity provider.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum IdentityError {
    /// The lookup was called where no authenticated request is in scope.
    #[error("identity lookup used outside of a request context")]
    OutsideRequestContext,
    /// A credential was present but could not be read.
    #[error("malformed identity credential: {0}")]
    Malformed(String),
    /// The provider itself failed.
    #[error("identity provider error: {0}")]
    Provider(String),
}

/// Capability yielding the current user's identifier.
///
/// `Ok(None)` means nobody is signed in, which is a normal answer.
pub trait IdentityLookup {
    fn current_user_id(&self) -> Result<Option<String>, IdentityError>;
}

/// Identity of the viewer for a single render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Identity {
    User(String),
    Absent,
}

impl Identity {
    /// Query `lookup` once and fold the answer into an [`Identity`].
    ///
    /// Errors are logged and treated as [`Identity::Absent`], as is a blank id.
    pub fn resolve(lookup: &dyn IdentityLookup) -> Self {
        match lookup.current_user_id() {
            Ok(Some(id)) if !id.trim().is_empty() => Identity::User(id),
            Ok(_) => {
                debug!("no signed-in user for this render");
                Identity::Absent
            }
            Err(err) => {
                warn!(error = %err, "identity lookup failed, rendering as signed out");
                Identity::Absent
            }
        }
    }

    pub fn user_id(&self) -> Option<&str> {
        match self {
            Identity::User(id) => Some(id.as_str()),
            Identity::Absent => None,
        }
    }

    /// Text to display for this identity.
    pub fn display_text(&self) -> &str {
        self.user_id().unwrap_or(ABSENT_PLACEHOLDER)
    }
}

/// Lookup that always answers with a fixed value.
#[derive(Clone, Debug, Default)]
pub struct StaticIdentity(pub Option<String>);

impl StaticIdentity {
    pub fn user(id: impl Into<String>) -> Self {
        Self(Some(id.into()))
    }

    pub fn anonymous() -> Self {
        Self(None)
    }
}

impl IdentityLookup for StaticIdentity {
    fn current_user_id(&self) -> Result<Option<String>, IdentityError> {
        Ok(self.0.clone())
    }
}

/// Lookup for renders that happen outside any request, e.g. offline export.
///
/// Always reports [`IdentityError::OutsideRequestContext`].
#[derive(Clone, Copy, Debug, Default)]
pub struct DetachedIdentity;

impl IdentityLookup for DetachedIdentity {
    fn current_user_id(&self) -> Result<Option<String>, IdentityError> {
        Err(IdentityError::OutsideRequestContext)
    }
}
