use dioxus_logger::tracing;

use crate::{
    api::{endpoint, ApiRequest, ApiResponse, Transport},
    error::Error,
    model::{id::UserId, user::UserProfileDto},
};

/// Retrieve the public profile of `user_id`
pub async fn fetch_profile<T: Transport>(
    transport: &T,
    user_id: UserId,
) -> Result<UserProfileDto, Error> {
    transport
        .send(ApiRequest::get(endpoint::user_profile(user_id)))
        .await
        .and_then(ApiResponse::into_result)
        .and_then(|response| response.parse())
        .inspect_err(|e| tracing::error!("Error fetching user info: {}", e))
}
