pub mod create;
pub mod delete;
pub mod favorites;
pub mod get;
pub mod list;
pub mod update;

use crate::models::User;
use crate::AppState;
use axum::routing::{delete as delete_method, get};
use axum::Router;
use serde::Serialize;
use utoipa::{OpenApi, ToSchema};

pub const USER_NOT_FOUND: &str = "Usuário não encontrado.";
pub const DUPLICATE_USERNAME: &str = "Um usuário com este nome de usuário já existe.";

/// A user as exposed over the API; the password hash never leaves the server.
#[derive(Debug, Serialize, ToSchema)]
pub struct UserResponse {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
        }
    }
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/usuarios/", get(list::list_users).post(create::create_user))
        .route(
            "/api/usuarios/{id}/",
            get(get::get_user)
                .put(update::update_user)
                .patch(update::update_user)
                .delete(delete::delete_user),
        )
        .route(
            "/api/usuarios/{id}/favoritos/",
            get(favorites::list_user_favorites),
        )
        .route(
            "/api/usuarios/{id}/favoritos/{receita_id}/",
            delete_method(favorites::delete_user_favorite),
        )
}

#[derive(OpenApi)]
#[openapi(
    paths(
        list::list_users,
        create::create_user,
        get::get_user,
        update::update_user,
        delete::delete_user,
        favorites::list_user_favorites,
        favorites::delete_user_favorite,
    ),
    components(schemas(UserResponse, create::CreateUserRequest, update::UpdateUserRequest))
)]
pub struct ApiDoc;
