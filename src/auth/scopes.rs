// Centralized scope/permission constants
pub const TENANT_ADMIN: &str = "TENANT:ADMIN";
pub const TENANT_SUPER_ADMIN: &str = "TENANT:SUPER_ADMIN";
pub const REPORTS_READ: &str = "reports:READ";
pub const REPORTS_WRITE: &str = "reports:WRITE";

/// Check if the user holds any of the required scopes.
///
/// Super admin has access to everything. An empty requirement list means the
/// route/feature is public. Otherwise a single overlapping scope is enough
/// (OR semantics - requirements are alternatives, not a conjunction).
pub fn satisfies(user_scopes: &[String], required: &[&str]) -> bool {
    if user_scopes.iter().any(|s| s == TENANT_SUPER_ADMIN) {
        return true;
    }

    if required.is_empty() {
        return true;
    }

    required.iter().any(|req| user_scopes.iter().any(|s| s == req))
}

/// AND variant: the user must hold every required scope (super admin exempt).
pub fn satisfies_all(user_scopes: &[String], required: &[&str]) -> bool {
    if user_scopes.iter().any(|s| s == TENANT_SUPER_ADMIN) {
        return true;
    }

    if required.is_empty() {
        return true;
    }

    required.iter().all(|req| user_scopes.iter().any(|s| s == req))
}

pub fn is_super_admin(user_scopes: &[String]) -> bool {
    user_scopes.iter().any(|s| s == TENANT_SUPER_ADMIN)
}

/// Tenant admin or above.
pub fn is_tenant_admin(user_scopes: &[String]) -> bool {
    user_scopes.iter().any(|s| s == TENANT_ADMIN || s == TENANT_SUPER_ADMIN)
}
