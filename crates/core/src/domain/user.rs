// User Account Domain Model

/// System user account. Doctors are users referenced from a department
/// ("poli") assignment.
///
/// Not serialized directly; the API layer maps users onto response DTOs
/// so the password hash never reaches the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub uuid: String,
    pub username: String,
    pub password_hash: String,
    pub full_name: String,
    pub role: String,
}
