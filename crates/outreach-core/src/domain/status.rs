use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ClientStatus {
    #[serde(rename = "negociando")]
    Negotiating,
    #[serde(rename = "em_andamento")]
    #[default]
    InProgress,
    #[serde(rename = "sem_retorno")]
    NoResponse,
    #[serde(rename = "finalizado")]
    Finished,
    #[serde(rename = "distrato")]
    Terminated,
}

impl ClientStatus {
    pub const ALL: [ClientStatus; 5] = [
        ClientStatus::Negotiating,
        ClientStatus::InProgress,
        ClientStatus::NoResponse,
        ClientStatus::Finished,
        ClientStatus::Terminated,
    ];

    /// Literal tag used in the persisted slot.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientStatus::Negotiating => "negociando",
            ClientStatus::InProgress => "em_andamento",
            ClientStatus::NoResponse => "sem_retorno",
            ClientStatus::Finished => "finalizado",
            ClientStatus::Terminated => "distrato",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ClientStatus::Negotiating => "Negociando",
            ClientStatus::InProgress => "Em andamento",
            ClientStatus::NoResponse => "Sem retorno",
            ClientStatus::Finished => "Finalizado",
            ClientStatus::Terminated => "Distrato",
        }
    }

    fn alias(self) -> &'static str {
        match self {
            ClientStatus::Negotiating => "negotiating",
            ClientStatus::InProgress => "in-progress",
            ClientStatus::NoResponse => "no-response",
            ClientStatus::Finished => "finished",
            ClientStatus::Terminated => "terminated",
        }
    }
}

impl fmt::Display for ClientStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClientStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        let normalized = lower.replace('_', "-");
        ClientStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == lower || status.alias() == normalized)
            .ok_or_else(|| CoreError::InvalidStatus(s.trim().to_string()))
    }
}
