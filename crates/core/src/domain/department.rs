// Department ("poli") Domain Model

use serde::{Deserialize, Serialize};

/// Clinic department, optionally paired with its assigned doctor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    pub id: i64,
    pub name: String,
    pub doctor_uuid: Option<String>,
}
