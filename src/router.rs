//! HTTP routing and OpenAPI documentation configuration.
//!
//! All API endpoints are registered here with their utoipa specifications,
//! and Swagger UI serves interactive documentation at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI.
///
/// # Registered Endpoints
/// - `GET /people` - List all catalog characters
/// - `GET /people/{id}` - Get one character
/// - `GET /vehiculo` - List all catalog vehicles
/// - `GET /vehiculo/{id}` - Get one vehicle
/// - `GET /users` - List all users
/// - `GET /users/favorites` - List a user's favorites
/// - `POST /favorite/people/{id}` - Add a character favorite
/// - `DELETE /favorite/people/{id}` - Remove a character favorite
/// - `POST /favorite/vehiculo/{id}` - Add a vehicle favorite
/// - `DELETE /favorite/vehiculo/{id}` - Remove a vehicle favorite
///
/// The OpenAPI specification is available at `/api/docs/openapi.json`.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Holocron", description = "Star Wars catalog and favorites API"), tags(
        (name = controller::people::PEOPLE_TAG, description = "Catalog character routes"),
        (name = controller::vehicle::VEHICLE_TAG, description = "Catalog vehicle routes"),
        (name = controller::user::USER_TAG, description = "User routes"),
        (name = controller::favorite::FAVORITE_TAG, description = "Favorites routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::people::get_people))
        .routes(routes!(controller::people::get_person))
        .routes(routes!(controller::vehicle::get_vehicles))
        .routes(routes!(controller::vehicle::get_vehicle))
        .routes(routes!(controller::user::get_users))
        .routes(routes!(controller::user::get_user_favorites))
        .routes(routes!(
            controller::favorite::add_favorite_person,
            controller::favorite::delete_favorite_person
        ))
        .routes(routes!(
            controller::favorite::add_favorite_vehicle,
            controller::favorite::delete_favorite_vehicle
        ))
        .split_for_parts();

    let routes = routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api));

    routes
}
