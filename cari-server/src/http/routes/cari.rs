//! Cari endpoints

use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};
use serde::Serialize;

use crate::db::CariRepo;
use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::{CreateCariRequest, NewCari};

/// Insert response
#[derive(Serialize)]
pub struct CreatedResponse {
    pub id: i64,
}

/// POST /cari/main - insert a cari record, 409 on duplicate kod
async fn create_cari(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateCariRequest>,
) -> Result<Json<CreatedResponse>, ApiError> {
    let cari = NewCari::try_from(req)?;
    let pool = state.db.pool().await?;
    let id = CariRepo::new(&pool).insert(&cari).await?;

    tracing::info!(id, kod = cari.kod.as_str(), "cari created");
    Ok(Json(CreatedResponse { id }))
}

/// Cari routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/cari/main", post(create_cari))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};

    use crate::config::PoolConfig;
    use crate::db::PoolManager;
    use crate::http::routes::test_support::{empty_manager, send, state};

    fn post_cari(json: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/cari/main")
            .header("content-type", "application/json")
            .body(Body::from(json.to_owned()))
            .unwrap()
    }

    #[tokio::test]
    async fn no_pool_is_503() {
        let app = router().with_state(state(empty_manager()));
        let (status, body) = send(app, post_cari(r#"{"kod":"C001","ad":"Acme","tip":"musteri"}"#)).await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["error"], "service_unavailable");
    }

    #[tokio::test]
    async fn blank_kod_is_400_before_touching_db() {
        let app = router().with_state(state(empty_manager()));
        let (status, body) = send(app, post_cari(r#"{"kod":"  ","ad":"Acme","tip":"musteri"}"#)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "validation_error");
    }

    #[tokio::test]
    async fn missing_field_is_rejected() {
        let app = router().with_state(state(empty_manager()));
        let (status, _) = send(app, post_cari(r#"{"kod":"C001","ad":"Acme"}"#)).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn duplicate_kod_is_409() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let manager = PoolManager::new(PoolConfig::new(&url));
        assert!(manager.connect().await);

        let kod = format!("H{}", std::process::id());
        let json = format!(r#"{{"kod":"{}","ad":"Acme","tip":"musteri","il":"Ankara"}}"#, kod);

        let app = router().with_state(state(manager.clone()));
        let (status, body) = send(app.clone(), post_cari(&json)).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["id"].as_i64().unwrap() > 0);

        let (status, body) = send(app, post_cari(&json)).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["error"], "conflict");

        let pool = manager.pool().await.unwrap();
        sqlx::query("DELETE FROM cari_main WHERE kod = $1")
            .bind(&kod)
            .execute(&pool)
            .await
            .expect("cleanup failed");
        manager.release().await;
    }
}
