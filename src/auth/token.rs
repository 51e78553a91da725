use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Payload of the bearer token the backend issues at login.
///
/// The portal never holds the signing key - the backend is the only party
/// that verifies signatures - so this is a plain projection of the payload
/// segment, decoded without verification.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Claims {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    /// Active tenant id.
    #[serde(default)]
    pub tid: String,
    #[serde(default)]
    pub scopes: Vec<String>,
    #[serde(default, rename = "associatedTenants")]
    pub associated_tenants: Vec<super::TenantMembership>,
    /// Expiry, seconds since epoch. Absent claim means the token is unusable.
    pub exp: Option<i64>,
    #[serde(default)]
    pub iat: Option<i64>,
}

/// Decode the payload segment of a three-segment bearer token.
///
/// Returns `None` for every malformed input: wrong segment count, payload
/// that is not base64url, payload that is not a JSON object. Never panics.
pub fn decode(token: &str) -> Option<Claims> {
    if token.is_empty() {
        return None;
    }

    let parts: Vec<&str> = token.split('.').collect();
    if parts.len() != 3 {
        tracing::warn!("invalid token format: expected 3 segments, got {}", parts.len());
        return None;
    }

    let payload = match URL_SAFE_NO_PAD.decode(parts[1]) {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::warn!("token payload is not base64url: {}", e);
            return None;
        }
    };

    match serde_json::from_slice::<Claims>(&payload) {
        Ok(claims) => Some(claims),
        Err(e) => {
            tracing::warn!("token payload is not valid JSON: {}", e);
            None
        }
    }
}

/// True if the token is missing, undecodable, carries no expiry claim, or
/// expires within `buffer_secs` from now.
pub fn is_expired(token: &str, buffer_secs: i64) -> bool {
    is_expired_at(token, buffer_secs, Utc::now())
}

// Clock-injected form so expiry math is testable without sleeping.
pub(crate) fn is_expired_at(token: &str, buffer_secs: i64, now: DateTime<Utc>) -> bool {
    let Some(claims) = decode(token) else {
        return true;
    };
    let Some(exp) = claims.exp else {
        return true;
    };

    now.timestamp() >= exp - buffer_secs
}

/// Expiry instant of the token, if it decodes and carries one.
pub fn expires_at(token: &str) -> Option<DateTime<Utc>> {
    let exp = decode(token)?.exp?;
    DateTime::from_timestamp(exp, 0)
}

/// Time left before the token expires; zero when expired or undecodable.
pub fn time_until_expiry(token: &str) -> Duration {
    match expires_at(token) {
        Some(at) => (at - Utc::now()).max(Duration::zero()),
        None => Duration::zero(),
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn decode_rejects_malformed_tokens() {
        assert_eq!(decode(""), None);
        assert_eq!(decode("one-segment"), None);
        assert_eq!(decode("a.b"), None);
        assert_eq!(decode("a.b.c.d"), None);
        // segment 2 is not base64url
        assert_eq!(decode("head.!!!not-base64!!!.sig"), None);
        // segment 2 is valid base64 but not JSON
        let not_json = base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(b"hello there");
        assert_eq!(decode(&format!("head.{}.sig", not_json)), None);
    }

    #[test]
    fn decode_extracts_profile_projection() {
        let token = test_tokens::mint(&json!({
            "name": "Ada",
            "email": "ada@example.com",
            "tid": "t-1",
            "scopes": ["TENANT:ADMIN"],
            "associatedTenants": [{"tenantId": "t-1", "isAdmin": true}],
            "exp": 4_102_444_800i64,
        }));

        let claims = decode(&token).expect("decodes");
        assert_eq!(claims.name, "Ada");
        assert_eq!(claims.email, "ada@example.com");
        assert_eq!(claims.tid, "t-1");
        assert_eq!(claims.scopes, vec!["TENANT:ADMIN".to_string()]);
        assert_eq!(claims.associated_tenants.len(), 1);
        assert!(claims.associated_tenants[0].is_admin);
    }

    #[test]
    fn missing_optional_claims_default_to_empty() {
        let token = test_tokens::mint(&json!({ "exp": 4_102_444_800i64 }));
        let claims = decode(&token).expect("decodes");
        assert!(claims.name.is_empty());
        assert!(claims.scopes.is_empty());
        assert!(claims.associated_tenants.is_empty());
    }

    #[test]
    fn expiry_respects_buffer_window() {
        let now = Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap();

        // Expires 30s from now, buffer 60s: already inside the window.
        let soon = test_tokens::mint(&json!({ "exp": now.timestamp() + 30 }));
        assert!(is_expired_at(&soon, 60, now));

        // Expires 120s from now, buffer 60s: still good.
        let later = test_tokens::mint(&json!({ "exp": now.timestamp() + 120 }));
        assert!(!is_expired_at(&later, 60, now));
    }

    #[test]
    fn no_exp_claim_counts_as_expired() {
        let token = test_tokens::mint(&json!({ "name": "Ada" }));
        assert!(is_expired(&token, 60));
        assert!(is_expired("garbage", 60));
        assert!(is_expired("", 60));
        assert_eq!(expires_at(&token), None);
        assert_eq!(time_until_expiry(&token), Duration::zero());
    }
}
