#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Role {
    Administrator,
    Unknown(String),
}
impl axum_keycloak_auth::role::Role for Role {}
impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Administrator => f.write_str(crate::config::ADMIN_ROLE),
            Role::Unknown(unknown) => f.write_fmt(format_args!("Unknown role: {unknown}")),
        }
    }
}

impl From<String> for Role {
    fn from(value: String) -> Self {
        if value == crate::config::ADMIN_ROLE {
            Role::Administrator
        } else {
            Role::Unknown(value)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_display_uses_configured_admin_role() {
        assert_eq!(Role::Administrator.to_string(), crate::config::ADMIN_ROLE);
        assert_eq!(
            crate::config::Config::for_tests().admin_role,
            crate::config::ADMIN_ROLE
        );
        assert!(Role::Unknown("guest".to_string()).to_string().contains("guest"));
    }

    #[test]
    fn test_role_from_string() {
        assert_eq!(
            Role::from(crate::config::ADMIN_ROLE.to_string()),
            Role::Administrator
        );
        assert_eq!(
            Role::from("viewer".to_string()),
            Role::Unknown("viewer".to_string())
        );
    }
}
