use serde::{Deserialize, Serialize};

/// Contacts access state as exposed by the host system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AuthorizationStatus {
    NotDetermined,
    Restricted,
    Denied,
    Authorized,
}

impl AuthorizationStatus {
    pub fn is_authorized(self) -> bool {
        self == Self::Authorized
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::NotDetermined => "not-determined",
            Self::Restricted => "restricted",
            Self::Denied => "denied",
            Self::Authorized => "authorized",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::NotDetermined => "Not determined",
            Self::Restricted => "Restricted",
            Self::Denied => "Denied",
            Self::Authorized => "Authorized",
        }
    }

    pub fn guidance(self) -> &'static str {
        match self {
            Self::NotDetermined => "Run 'rolodex authorize' to request access.",
            Self::Restricted => {
                "Access restricted by system policy (parental controls, MDM, etc.)."
            }
            Self::Denied => {
                "Access denied. Enable in System Settings -> Privacy & Security -> Contacts."
            }
            Self::Authorized => "Full access granted.",
        }
    }
}
