use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct UserDto {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub full_name: Option<String>,
    pub admin: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct RegisterDto {
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub full_name: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct LoginDto {
    pub username: String,
    pub password: String,
}
