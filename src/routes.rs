// src/routes.rs

use axum::{
    Router,
    http::{HeaderValue, Method, header},
    middleware,
    routing::{delete, get, post, put},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    handlers::{admin, auth, bookmark, category, quiz, result, user},
    state::AppState,
    utils::jwt::{admin_middleware, auth_middleware, author_middleware},
};

/// Assembles the main application router.
///
/// * Merges all sub-routers (auth, quizzes, categories, results, bookmarks, users, admin).
/// * Applies global middleware (Trace, CORS).
/// * Injects global state (config and repositories).
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin([
            HeaderValue::from_static("http://localhost:3000"),
            HeaderValue::from_static("http://127.0.0.1:3000"),
        ])
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE]);

    let auth_routes = Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login));

    let quiz_routes = Router::new()
        .route("/filters/public", get(quiz::filter_public_quizzes))
        // Any signed-in user
        .merge(
            Router::new()
                .route("/filters", get(quiz::filter_quizzes))
                .route("/{id}", get(quiz::get_quiz))
                .route("/{id}/questions", get(quiz::list_questions))
                .route("/{id}/bookmark", post(quiz::toggle_bookmark))
                .layer(middleware::from_fn_with_state(state.clone(), auth_middleware)),
        )
        // Educators and admins
        .merge(
            Router::new()
                .route("/", post(quiz::create_quiz))
                .route("/{id}", put(quiz::update_quiz).delete(quiz::delete_quiz))
                .route("/{id}/questions", post(quiz::create_question))
                .route(
                    "/{id}/questions/{question_id}",
                    put(quiz::update_question).delete(quiz::delete_question),
                )
                .layer(middleware::from_fn(author_middleware))
                .layer(middleware::from_fn_with_state(state.clone(), auth_middleware)),
        );

    let category_routes = Router::new()
        .route("/", get(category::list_categories))
        .route("/{id}", get(category::get_category))
        .merge(
            Router::new()
                .route("/", post(category::create_category))
                .route(
                    "/{id}",
                    put(category::update_category).delete(category::delete_category),
                )
                .layer(middleware::from_fn(author_middleware))
                .layer(middleware::from_fn_with_state(state.clone(), auth_middleware)),
        );

    let result_routes = Router::new()
        .route("/", get(result::list_my_results).post(result::record_result))
        .layer(middleware::from_fn_with_state(state.clone(), auth_middleware));

    let bookmark_routes = Router::new()
        .route("/", get(bookmark::list_bookmarks))
        .layer(middleware::from_fn_with_state(state.clone(), auth_middleware));

    let user_routes = Router::new()
        .route("/me", get(user::get_profile).put(user::update_profile))
        .merge(
            Router::new()
                .route("/me/dashboard", get(user::educator_dashboard))
                .layer(middleware::from_fn(author_middleware)),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth_middleware));

    let admin_routes = Router::new()
        .route("/dashboard", get(admin::dashboard))
        .route("/users", get(admin::list_users).post(admin::create_user))
        .route("/users/{id}", delete(admin::block_user))
        .route("/users/{id}/approve", put(admin::approve_user))
        .route("/users/{id}/unblock", put(admin::unblock_user))
        // Double middleware protection: Auth first, then Admin check
        .layer(middleware::from_fn(admin_middleware))
        .layer(middleware::from_fn_with_state(state.clone(), auth_middleware));

    Router::new()
        .nest("/api/auth", auth_routes)
        .nest("/api/quizzes", quiz_routes)
        .nest("/api/categories", category_routes)
        .nest("/api/results", result_routes)
        .nest("/api/bookmarks", bookmark_routes)
        .nest("/api/users", user_routes)
        .nest("/api/admin", admin_routes)
        // Global Middleware (applied from outside in)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
