use axum::routing::get;

mod index;
mod test_db;

pub(crate) fn create() -> axum::Router {
    axum::Router::new()
        .route("/", get(index::handle))
        .route("/test_db", get(test_db::handle))
}
