use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful login payload: profile plus the opaque bearer token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub user: User,
    pub token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_no: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    pub user_category: UserRole,
    pub password: String,
}

/// Role strings are part of the wire contract and must not be renamed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserRole {
    #[serde(rename = "admin")]
    Admin,
    #[serde(rename = "healthCenterAdmin")]
    HealthCenterAdmin,
    #[serde(rename = "patient")]
    Patient,
}

/// User profile as returned by the auth endpoints. The backend stores the
/// center linkage either as `center` or `centerId` depending on how the
/// account was created, so both spellings deserialize into `center`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_no: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    pub user_category: UserRole,
    #[serde(default, alias = "centerId", skip_serializing_if = "Option::is_none")]
    pub center: Option<String>,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.user_category == UserRole::Admin
    }

    /// Ownership invariant for center-scoped views: a platform admin may
    /// manage any center, a health-center admin only the center linked to
    /// their profile, patients none.
    pub fn manages_center(&self, center_id: &str) -> bool {
        match self.user_category {
            UserRole::Admin => true,
            UserRole::HealthCenterAdmin => self.center.as_deref() == Some(center_id),
            UserRole::Patient => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(role: UserRole, center: Option<&str>) -> User {
        User {
            id: "u1".into(),
            name: "Test".into(),
            email: "t@x.com".into(),
            contact_no: None,
            address: None,
            user_category: role,
            center: center.map(Into::into),
        }
    }

    #[test]
    fn role_wire_strings() {
        assert_eq!(
            serde_json::to_string(&UserRole::HealthCenterAdmin).unwrap(),
            "\"healthCenterAdmin\""
        );
        assert_eq!(serde_json::to_string(&UserRole::Admin).unwrap(), "\"admin\"");
        let r: UserRole = serde_json::from_str("\"patient\"").unwrap();
        assert_eq!(r, UserRole::Patient);
    }

    #[test]
    fn admin_manages_any_center() {
        assert!(user(UserRole::Admin, None).manages_center("C1"));
        assert!(user(UserRole::Admin, Some("C9")).manages_center("C1"));
    }

    #[test]
    fn center_admin_manages_only_linked_center() {
        let u = user(UserRole::HealthCenterAdmin, Some("C1"));
        assert!(u.manages_center("C1"));
        assert!(!u.manages_center("C2"));
        assert!(!user(UserRole::HealthCenterAdmin, None).manages_center("C1"));
    }

    #[test]
    fn patient_manages_nothing() {
        assert!(!user(UserRole::Patient, Some("C1")).manages_center("C1"));
    }

    #[test]
    fn profile_parses_center_id_alias() {
        let json = r#"{
            "_id": "u7",
            "name": "HC Admin",
            "email": "hc@x.com",
            "user_category": "healthCenterAdmin",
            "centerId": "C1"
        }"#;
        let u: User = serde_json::from_str(json).unwrap();
        assert_eq!(u.center.as_deref(), Some("C1"));
        assert!(u.manages_center("C1"));
    }
}
