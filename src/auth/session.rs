use serde::{Deserialize, Serialize};

use crate::auth::token;
use crate::client::{BackendClient, ClientError};
use crate::config;
use crate::error::PortalError;

/// One entry of the user's tenant list from the token payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TenantMembership {
    #[serde(rename = "tenantId")]
    pub tenant_id: String,
    #[serde(rename = "isAdmin", default)]
    pub is_admin: bool,
}

/// A fully-populated user session. Either the whole thing exists or there is
/// no session at all - consumers never see a half-built one.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub name: String,
    pub email: String,
    pub tenant_id: String,
    pub scopes: Vec<String>,
    pub associated_tenants: Vec<TenantMembership>,
    /// The raw bearer token backing this session.
    pub token: String,
}

impl Session {
    /// Build a session from a stored token, rejecting anything undecodable
    /// or already inside the expiry buffer.
    pub fn from_token(raw: &str) -> Option<Self> {
        if token::is_expired(raw, config::config().auth.expiry_buffer_secs) {
            return None;
        }
        let claims = token::decode(raw)?;

        Some(Self {
            name: claims.name,
            email: claims.email,
            tenant_id: claims.tid,
            scopes: claims.scopes,
            associated_tenants: claims.associated_tenants,
            token: raw.to_string(),
        })
    }
}

/// Result of replaying a persisted token at page load.
#[derive(Debug)]
pub enum Bootstrap {
    Active(Session),
    /// The stored token is absent, malformed, or expired. The caller must
    /// drop the persisted copy, otherwise every page load re-enters this
    /// path with the same dead token.
    ClearToken,
}

/// Explicit session lifecycle: every transition that can create or destroy
/// a session goes through here, so no call site mutates auth state ad hoc.
pub struct SessionStore {
    client: BackendClient,
}

impl SessionStore {
    pub fn new(client: BackendClient) -> Self {
        Self { client }
    }

    pub fn bootstrap_from_token(&self, stored: Option<&str>) -> Bootstrap {
        match stored {
            Some(raw) => match Session::from_token(raw) {
                Some(session) => Bootstrap::Active(session),
                None => {
                    tracing::info!("stored token failed bootstrap, clearing it");
                    Bootstrap::ClearToken
                }
            },
            None => Bootstrap::ClearToken,
        }
    }

    /// Exchange a Google id_token for a backend session.
    ///
    /// A 401 here is a failed login, surfaced inline - it must not trip the
    /// global logout path.
    pub async fn login(&self, google_id_token: &str) -> Result<Session, PortalError> {
        let raw = self.client.login_google(google_id_token).await?;

        Session::from_token(&raw).ok_or_else(|| {
            tracing::error!("login succeeded but backend issued an undecodable token");
            PortalError::internal("Something went wrong. Please try again later.")
        })
    }

    /// Tell the backend, then drop the session regardless of what it said -
    /// a failed logout call must not leave the user stuck signed in.
    pub async fn logout(&self, session: &Session) {
        if let Err(e) = self.client.logout(&session.token).await {
            tracing::warn!("backend logout failed: {}", e);
        }
    }

    /// Swap the whole session for one scoped to the new tenant. The backend
    /// issues a fresh token; nothing of the old session survives.
    pub async fn switch_tenant(
        &self,
        session: &Session,
        tenant_id: &str,
    ) -> Result<Session, PortalError> {
        let raw = match self.client.switch_tenant(&session.token, tenant_id).await {
            Ok(raw) => raw,
            Err(ClientError::AuthExpired) => return Err(PortalError::AuthExpired),
            Err(e) => {
                tracing::error!("tenant switch failed: {}", e);
                return Err(PortalError::save_failed("Failed to switch tenant."));
            }
        };

        Session::from_token(&raw).ok_or_else(|| {
            PortalError::internal("Something went wrong. Please try again later.")
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::token::test_tokens;
    use chrono::Utc;
    use serde_json::json;

    fn live_token() -> String {
        test_tokens::mint(&json!({
            "name": "Ada",
            "email": "ada@example.com",
            "tid": "t-1",
            "scopes": ["reports:READ"],
            "associatedTenants": [
                {"tenantId": "t-1", "isAdmin": false},
                {"tenantId": "t-2", "isAdmin": true},
            ],
            "exp": Utc::now().timestamp() + 3600,
        }))
    }

    #[test]
    fn session_is_all_or_nothing() {
        let session = Session::from_token(&live_token()).expect("valid session");
        assert_eq!(session.tenant_id, "t-1");
        assert_eq!(session.associated_tenants.len(), 2);

        assert!(Session::from_token("not-a-token").is_none());

        // decodes fine but expired: no session
        let dead = test_tokens::mint(&json!({
            "name": "Ada",
            "exp": Utc::now().timestamp() - 10,
        }));
        assert!(Session::from_token(&dead).is_none());
    }

    #[test]
    fn bootstrap_clears_bad_tokens() {
        let store = SessionStore::new(BackendClient::new("http://localhost:0"));

        assert!(matches!(store.bootstrap_from_token(None), Bootstrap::ClearToken));
        assert!(matches!(store.bootstrap_from_token(Some("junk")), Bootstrap::ClearToken));
        assert!(matches!(
            store.bootstrap_from_token(Some(&live_token())),
            Bootstrap::Active(_)
        ));
    }
}
