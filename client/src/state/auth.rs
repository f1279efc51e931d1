//! Session identity: access profiles and the derived session.
//!
//! SYSTEM CONTEXT
//! ==============
//! A session is never stored as an object; it is re-derived on every read
//! from the access token's payload. Role gating here is a UX convenience —
//! authorization is enforced server-side.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

/// Access profile carried in the token payload's `perfil` claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    Admin,
    Gerente,
    Lider,
    Funcionario,
}

impl Profile {
    /// Parse a `perfil` claim value. Unknown roles yield `None`.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "admin" => Some(Self::Admin),
            "gerente" => Some(Self::Gerente),
            "lider" => Some(Self::Lider),
            "funcionario" => Some(Self::Funcionario),
            _ => None,
        }
    }

    /// The claim value for this profile.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Gerente => "gerente",
            Self::Lider => "lider",
            Self::Funcionario => "funcionario",
        }
    }

    /// The landing route for this profile after login.
    ///
    /// Leaders share the gerente area.
    #[must_use]
    pub fn landing_path(self) -> &'static str {
        match self {
            Self::Admin => "/admin/",
            Self::Gerente | Self::Lider => "/gerente/",
            Self::Funcionario => "/funcionario/",
        }
    }
}

/// The identity derived from a decoded access token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// The access profile from the `perfil` claim.
    pub role: Profile,
    /// The user id from the `sub` claim.
    pub user_id: String,
}
