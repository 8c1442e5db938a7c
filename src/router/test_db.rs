use axum::Extension;

pub(crate) async fn handle(
    Extension(database): Extension<crate::service::database::Pool>,
) -> String {
    match database.ping().await {
        Ok(()) => String::from("Database connection successful!"),
        Err(err) => {
            tracing::error!(message = "unable to ping database", error = %err);
            format!("Database connection failed: {err}")
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt; // for `collect`

    #[tokio::test]
    async fn should_report_failure_with_unreachable_database() {
        let app = crate::app::Application::test();

        let req = Request::builder()
            .uri("/test_db")
            .method("GET")
            .body(Body::empty())
            .unwrap();
        let res = app.handle(req).await;
        assert_eq!(res.status(), StatusCode::OK);

        let body = res.into_body().collect().await.unwrap().to_bytes();
        let body = String::from_utf8(body.to_vec()).unwrap();
        let message = body
            .strip_prefix("Database connection failed: ")
            .expect("body should start with the failure prefix");
        assert!(!message.is_empty());
    }

    #[tokio::test]
    async fn should_keep_reporting_failure_on_repeat() {
        let app = crate::app::Application::test();

        for _ in 0..2 {
            let req = Request::builder()
                .uri("/test_db")
                .method("GET")
                .body(Body::empty())
                .unwrap();
            let res = app.handle(req).await;
            assert_eq!(res.status(), StatusCode::OK);

            let body = res.into_body().collect().await.unwrap().to_bytes();
            let body = String::from_utf8(body.to_vec()).unwrap();
            assert!(body.starts_with("Database connection failed: "));
        }
    }

    #[tokio::test]
    #[ignore = "requires a postgres instance reachable through DATABASE_URL"]
    async fn should_succeed_with_live_database() {
        let database = crate::service::database::Config::from_env()
            .unwrap()
            .build()
            .unwrap();
        let app = crate::app::Application::test_with(database);

        let req = Request::builder()
            .uri("/test_db")
            .method("GET")
            .body(Body::empty())
            .unwrap();
        let res = app.handle(req).await;
        assert_eq!(res.status(), StatusCode::OK);

        let body = res.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(body.as_ref(), b"Database connection successful!");
    }
}
