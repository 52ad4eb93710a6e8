// src/domain/user.rs
use serde::{Deserialize, Serialize};

/// Identity of the signed-in user; only exists between sign-in and sign-out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub picture: String,
}
