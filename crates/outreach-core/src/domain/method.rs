use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContactMethod {
    #[serde(rename = "telefone")]
    #[default]
    Phone,
    #[serde(rename = "whatsapp")]
    WhatsApp,
    #[serde(rename = "email")]
    Email,
    #[serde(rename = "presencial")]
    InPerson,
}

impl ContactMethod {
    pub const ALL: [ContactMethod; 4] = [
        ContactMethod::Phone,
        ContactMethod::WhatsApp,
        ContactMethod::Email,
        ContactMethod::InPerson,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ContactMethod::Phone => "telefone",
            ContactMethod::WhatsApp => "whatsapp",
            ContactMethod::Email => "email",
            ContactMethod::InPerson => "presencial",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ContactMethod::Phone => "Telefone",
            ContactMethod::WhatsApp => "WhatsApp",
            ContactMethod::Email => "E-mail",
            ContactMethod::InPerson => "Presencial",
        }
    }

    /// Phone and WhatsApp take a number, e-mail takes an address, in-person takes nothing.
    pub fn accepts_contact_info(self) -> bool {
        !matches!(self, ContactMethod::InPerson)
    }

    fn alias(self) -> &'static str {
        match self {
            ContactMethod::Phone => "phone",
            ContactMethod::WhatsApp => "whatsapp",
            ContactMethod::Email => "e-mail",
            ContactMethod::InPerson => "in-person",
        }
    }
}

impl fmt::Display for ContactMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContactMethod {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        let normalized = lower.replace('_', "-");
        ContactMethod::ALL
            .into_iter()
            .find(|method| method.as_str() == lower || method.alias() == normalized)
            .ok_or_else(|| CoreError::InvalidContactMethod(s.trim().to_string()))
    }
}
