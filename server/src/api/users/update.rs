use super::{UserResponse, DUPLICATE_USERNAME, USER_NOT_FOUND};
use crate::api::{ApiError, ErrorResponse};
use crate::models::{User, UserChanges};
use crate::password::hash_password;
use crate::schema::users;
use crate::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use diesel::prelude::*;
use kitem_core::{validate, ValidationError};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, ToSchema, Default)]
pub struct UpdateUserRequest {
    pub username: Option<String>,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub password: Option<String>,
}

impl UpdateUserRequest {
    fn into_changes(self) -> Result<UserChanges, ApiError> {
        let username = self
            .username
            .map(|value| validate::USERNAME.check(Some(value)))
            .transpose()?;
        let email = self
            .email
            .map(|value| validate::email(Some(value)))
            .transpose()?;
        let password_hash = match self.password {
            Some(password) if password.trim().is_empty() => {
                return Err(
                    ValidationError::new("password", "A senha não pode estar vazia.").into(),
                );
            }
            Some(password) => Some(hash_password(&password)?),
            None => None,
        };
        Ok(UserChanges {
            username,
            email,
            first_name: self.first_name.map(|value| value.trim().to_string()),
            last_name: self.last_name.map(|value| value.trim().to_string()),
            password_hash,
        })
    }
}

/// PUT and PATCH both apply only the supplied fields.
#[utoipa::path(
    put,
    path = "/api/usuarios/{id}/",
    tag = "usuarios",
    params(("id" = i32, Path, description = "User ID")),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User updated", body = UserResponse),
        (status = 400, description = "Invalid field", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse)
    )
)]
pub async fn update_user(
    State(pool): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<UpdateUserRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    let changes = request.into_changes()?;
    let mut conn = pool.get()?;

    let updated = if changes.is_empty() {
        users::table
            .find(id)
            .select(User::as_select())
            .first(&mut conn)
            .optional()?
    } else {
        diesel::update(users::table.find(id))
            .set(&changes)
            .returning(User::as_returning())
            .get_result(&mut conn)
            .optional()
            .map_err(|e| ApiError::from(e).duplicate_as(DUPLICATE_USERNAME))?
    };

    let user = updated.ok_or_else(|| ApiError::not_found(USER_NOT_FOUND))?;
    Ok(Json(user.into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_password_rejected() {
        let request = UpdateUserRequest {
            password: Some("   ".to_string()),
            ..Default::default()
        };
        match request.into_changes() {
            Err(ApiError::Validation(err)) => assert_eq!(err.field, "password"),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_absent_fields_stay_unchanged() {
        let changes = UpdateUserRequest {
            first_name: Some(" Ana ".to_string()),
            ..Default::default()
        }
        .into_changes()
        .unwrap();
        assert_eq!(changes.first_name.as_deref(), Some("Ana"));
        assert!(changes.username.is_none());
        assert!(changes.password_hash.is_none());
        assert!(UpdateUserRequest::default().into_changes().unwrap().is_empty());
    }
}
