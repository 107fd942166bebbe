use contracts::system::auth::{ChangePasswordRequest, LoginRequest, LoginResponse, RegisterRequest};

use crate::shared::api_utils;

/// Login with username and password
pub async fn login(username: String, password: String) -> Result<LoginResponse, String> {
    let request = LoginRequest { username, password };
    api_utils::post_json_bare("/auth/login", &request).await
}

/// Register a new account. Registration does not authenticate the caller;
/// login is a separate step.
pub async fn register(request: &RegisterRequest) -> Result<(), String> {
    api_utils::post_json("/auth/register", request).await
}

/// Change the current user's password
pub async fn change_password(request: &ChangePasswordRequest) -> Result<(), String> {
    api_utils::post_json("/auth/change-password", request).await
}
