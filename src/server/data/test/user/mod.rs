use crate::server::{data::user::UserRepository, model::user::CreateUserParams};
use chrono::Utc;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod admin_exists;
mod find_by_username;
mod update_last_visit;

fn params(username: &str, email: &str) -> CreateUserParams {
    CreateUserParams {
        username: username.to_string(),
        email: email.to_string(),
        password_hash: "hash".to_string(),
        full_name: None,
        admin: false,
    }
}
