use crate::error::CoreError;
use serde::{Deserialize, Serialize};

/// One directory entry as last read from the Contacts application.
///
/// The `id` is an opaque stable string issued by Contacts and is the sole
/// handle for get/update/delete. Everything else reflects the application's
/// state at read time; nothing is cached locally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
    pub emails: Vec<String>,
    pub phones: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birthday: Option<String>,
    pub addresses: Vec<String>,
}

/// Fields for a contact to be created. Empty strings count as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewContact {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub organization: Option<String>,
    pub job_title: Option<String>,
}

impl NewContact {
    pub fn validate(&self) -> Result<(), CoreError> {
        if non_empty(&self.first_name).is_none()
            && non_empty(&self.last_name).is_none()
            && non_empty(&self.organization).is_none()
        {
            return Err(CoreError::MissingIdentity);
        }
        Ok(())
    }
}

/// Field-level patch for an existing contact. `None` leaves the field
/// untouched; `Some` overwrites it, including with an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub organization: Option<String>,
    pub job_title: Option<String>,
}

impl ContactUpdate {
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.organization.is_none()
            && self.job_title.is_none()
    }
}

/// Joins the non-empty name parts, falling back to the organization and
/// finally to "Unknown".
pub fn compose_full_name(
    first_name: &str,
    last_name: &str,
    organization: Option<&str>,
) -> String {
    let joined = [first_name, last_name]
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ");
    if !joined.is_empty() {
        return joined;
    }
    organization
        .filter(|org| !org.is_empty())
        .unwrap_or("Unknown")
        .to_string()
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
