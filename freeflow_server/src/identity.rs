//! Identity taken from a request header set by the fronting auth proxy.

use axum::http::{HeaderMap, HeaderName};
use freeflow_site::{IdentityError, IdentityLookup};

/// Reads the signed-in user's id from one request header.
///
/// A missing or blank header means nobody is signed in. A value that is not
/// visible ASCII is reported as malformed.
pub struct HeaderIdentity<'a> {
    headers: &'a HeaderMap,
    name: &'a HeaderName,
}

impl<'a> HeaderIdentity<'a> {
    pub fn new(headers: &'a HeaderMap, name: &'a HeaderName) -> Self {
        Self { headers, name }
    }
}

impl IdentityLookup for HeaderIdentity<'_> {
    fn current_user_id(&self) -> Result<Option<String>, IdentityError> {
        let Some(value) = self.headers.get(self.name) else {
            return Ok(None);
        };
        let value = value.to_str().map_err(|_| {
            IdentityError::Malformed(format!("header `{}` is not visible ASCII", self.name))
        })?;
        let value = value.trim();
        Ok((!value.is_empty()).then(|| value.to_owned()))
    }
}
