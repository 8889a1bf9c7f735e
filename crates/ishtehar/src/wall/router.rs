use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::{Category, ModerationDecision, PostId, PostStatus, PostType};
use super::moderation::BanConfirmation;
use super::public::{Selection, WallFilter};
use super::service::WallService;
use super::submission::Submission;
use crate::manifesto::{ManifestoGenerator, SummaryRefusal};

/// Router builder exposing the public wall and the admin moderation surface.
pub fn wall_router<G>(service: Arc<WallService<G>>) -> Router
where
    G: ManifestoGenerator + 'static,
{
    Router::new()
        .route(
            "/api/v1/posts",
            post(submit_handler::<G>).get(public_wall_handler::<G>),
        )
        .route("/api/v1/posts/:post_id/like", post(like_handler::<G>))
        .route(
            "/api/v1/admin/posts/pending",
            get(pending_handler::<G>),
        )
        .route(
            "/api/v1/admin/posts/:post_id/status",
            post(status_handler::<G>),
        )
        .route("/api/v1/admin/authors/ban", post(ban_handler::<G>))
        .route("/api/v1/admin/analytics", get(analytics_handler::<G>))
        .route("/api/v1/admin/manifesto", post(manifesto_handler::<G>))
        .with_state(service)
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct WallQuery {
    #[serde(default)]
    category: Option<String>,
    #[serde(default, rename = "type")]
    post_type: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct StatusUpdate {
    status: PostStatus,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct BanRequest {
    #[serde(default)]
    author_name: Option<String>,
    #[serde(default)]
    confirm: bool,
}

fn error_response(status: StatusCode, message: impl ToString) -> Response {
    let payload = json!({ "error": message.to_string() });
    (status, axum::Json(payload)).into_response()
}

pub(crate) async fn submit_handler<G>(
    State(service): State<Arc<WallService<G>>>,
    axum::Json(submission): axum::Json<Submission>,
) -> Response
where
    G: ManifestoGenerator + 'static,
{
    match submission.validated() {
        Ok(submission) => {
            let post = service.submit(submission);
            (StatusCode::ACCEPTED, axum::Json(post)).into_response()
        }
        Err(error) => error_response(StatusCode::UNPROCESSABLE_ENTITY, error),
    }
}

pub(crate) async fn public_wall_handler<G>(
    State(service): State<Arc<WallService<G>>>,
    Query(query): Query<WallQuery>,
) -> Response
where
    G: ManifestoGenerator + 'static,
{
    let filter = Selection::<Category>::parse(query.category.as_deref()).and_then(|category| {
        Selection::<PostType>::parse(query.post_type.as_deref())
            .map(|post_type| WallFilter { category, post_type })
    });

    match filter {
        Ok(filter) => (StatusCode::OK, axum::Json(service.public_wall(&filter))).into_response(),
        Err(error) => error_response(StatusCode::BAD_REQUEST, error),
    }
}

pub(crate) async fn like_handler<G>(
    State(service): State<Arc<WallService<G>>>,
    Path(post_id): Path<String>,
) -> Response
where
    G: ManifestoGenerator + 'static,
{
    let id = PostId(post_id);
    let liked = service.like(&id);
    (StatusCode::OK, axum::Json(json!({ "id": id, "liked": liked }))).into_response()
}

pub(crate) async fn pending_handler<G>(State(service): State<Arc<WallService<G>>>) -> Response
where
    G: ManifestoGenerator + 'static,
{
    (StatusCode::OK, axum::Json(service.pending())).into_response()
}

pub(crate) async fn status_handler<G>(
    State(service): State<Arc<WallService<G>>>,
    Path(post_id): Path<String>,
    axum::Json(update): axum::Json<StatusUpdate>,
) -> Response
where
    G: ManifestoGenerator + 'static,
{
    let Ok(decision) = ModerationDecision::try_from(update.status) else {
        return error_response(
            StatusCode::UNPROCESSABLE_ENTITY,
            "status must be APPROVED or REJECTED",
        );
    };

    let id = PostId(post_id);
    let updated = service.set_status(&id, decision);
    (
        StatusCode::OK,
        axum::Json(json!({ "id": id, "status": decision, "updated": updated })),
    )
        .into_response()
}

pub(crate) async fn ban_handler<G>(
    State(service): State<Arc<WallService<G>>>,
    axum::Json(request): axum::Json<BanRequest>,
) -> Response
where
    G: ManifestoGenerator + 'static,
{
    let outcome = service.ban_author(
        request.author_name.as_deref(),
        BanConfirmation::from(request.confirm),
    );
    (StatusCode::OK, axum::Json(outcome)).into_response()
}

pub(crate) async fn analytics_handler<G>(State(service): State<Arc<WallService<G>>>) -> Response
where
    G: ManifestoGenerator + 'static,
{
    (StatusCode::OK, axum::Json(service.analytics())).into_response()
}

pub(crate) async fn manifesto_handler<G>(State(service): State<Arc<WallService<G>>>) -> Response
where
    G: ManifestoGenerator + 'static,
{
    match service.draft_manifesto().await {
        Ok(summary) => (StatusCode::OK, axum::Json(json!({ "summary": summary }))).into_response(),
        Err(refusal @ SummaryRefusal::AlreadyInFlight) => {
            error_response(StatusCode::CONFLICT, refusal)
        }
        Err(refusal @ SummaryRefusal::Cancelled) => {
            error_response(StatusCode::SERVICE_UNAVAILABLE, refusal)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifesto::{UnconfiguredGenerator, FAILURE_MESSAGE};
    use crate::wall::{seed_posts, PostStore};
    use axum::body::Body;
    use axum::http::{header, Request};
    use chrono::Utc;
    use serde_json::Value;
    use tower::ServiceExt;

    fn seeded_service() -> Arc<WallService<UnconfiguredGenerator>> {
        Arc::new(WallService::with_generator(
            PostStore::with_posts(seed_posts(Utc::now())),
            Arc::new(UnconfiguredGenerator),
        ))
    }

    fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&body).expect("json body")))
            .expect("request builds")
    }

    async fn read_json_body(response: Response) -> Value {
        let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
            .await
            .expect("read body");
        serde_json::from_slice(&body).expect("json payload")
    }

    #[tokio::test]
    async fn submit_route_accepts_and_queues_posts() {
        let service = seeded_service();
        let router = wall_router(service.clone());

        let response = router
            .oneshot(json_request(
                "POST",
                "/api/v1/posts",
                json!({ "content": "রাস্তা সংস্কার চাই", "type": "TEXT", "category": "administration", "authorName": "করিম" }),
            ))
            .await
            .expect("router responds");

        assert_eq!(response.status(), StatusCode::ACCEPTED);
        let body = read_json_body(response).await;
        assert_eq!(body["status"], "PENDING");
        assert_eq!(body["likes"], 0);
        assert_eq!(service.pending().len(), 2);
    }

    #[tokio::test]
    async fn submit_route_rejects_blank_content() {
        let service = seeded_service();
        let response = wall_router(service.clone())
            .oneshot(json_request(
                "POST",
                "/api/v1/posts",
                json!({ "content": "  ", "type": "TEXT", "category": "health" }),
            ))
            .await
            .expect("router responds");

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(service.snapshot().len(), 4);
    }

    #[tokio::test]
    async fn public_wall_route_applies_filters() {
        let response = wall_router(seeded_service())
            .oneshot(
                Request::get("/api/v1/posts?category=ALL&type=image")
                    .body(Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("router responds");

        assert_eq!(response.status(), StatusCode::OK);
        let body = read_json_body(response).await;
        let posts = body.as_array().expect("array");
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0]["id"], "3");
    }

    #[tokio::test]
    async fn public_wall_route_rejects_unknown_filter() {
        let response = wall_router(seeded_service())
            .oneshot(
                Request::get("/api/v1/posts?category=weather")
                    .body(Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("router responds");

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn status_route_refuses_pending() {
        let service = seeded_service();
        let response = wall_router(service.clone())
            .oneshot(json_request(
                "POST",
                "/api/v1/admin/posts/4/status",
                json!({ "status": "PENDING" }),
            ))
            .await
            .expect("router responds");

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(service.pending().len(), 1);
    }

    #[tokio::test]
    async fn status_route_approves_and_reports_unknown_ids() {
        let service = seeded_service();

        let response = wall_router(service.clone())
            .oneshot(json_request(
                "POST",
                "/api/v1/admin/posts/4/status",
                json!({ "status": "APPROVED" }),
            ))
            .await
            .expect("router responds");
        assert_eq!(read_json_body(response).await["updated"], true);
        assert!(service.pending().is_empty());

        let response = wall_router(service)
            .oneshot(json_request(
                "POST",
                "/api/v1/admin/posts/missing/status",
                json!({ "status": "REJECTED" }),
            ))
            .await
            .expect("router responds");
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(read_json_body(response).await["updated"], false);
    }

    #[tokio::test]
    async fn ban_route_requires_confirmation() {
        let service = seeded_service();

        let response = wall_router(service.clone())
            .oneshot(json_request(
                "POST",
                "/api/v1/admin/authors/ban",
                json!({ "authorName": "রহিম মিয়া" }),
            ))
            .await
            .expect("router responds");
        assert_eq!(read_json_body(response).await["outcome"], "skipped_unconfirmed");
        assert_eq!(service.snapshot().len(), 4);

        let response = wall_router(service.clone())
            .oneshot(json_request(
                "POST",
                "/api/v1/admin/authors/ban",
                json!({ "authorName": "রহিম মিয়া", "confirm": true }),
            ))
            .await
            .expect("router responds");
        let body = read_json_body(response).await;
        assert_eq!(body["outcome"], "removed");
        assert_eq!(body["count"], 1);
        assert_eq!(service.snapshot().len(), 3);
    }

    #[tokio::test]
    async fn like_route_increments_counter() {
        let service = seeded_service();
        let response = wall_router(service.clone())
            .oneshot(json_request("POST", "/api/v1/posts/1/like", json!({})))
            .await
            .expect("router responds");

        assert_eq!(read_json_body(response).await["liked"], true);
        let snapshot = service.snapshot();
        let liked = snapshot
            .iter()
            .find(|post| post.id.as_str() == "1")
            .expect("seed post");
        assert_eq!(liked.likes, 121);
    }

    #[tokio::test]
    async fn manifesto_route_falls_back_without_generator() {
        let response = wall_router(seeded_service())
            .oneshot(json_request("POST", "/api/v1/admin/manifesto", json!({})))
            .await
            .expect("router responds");

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(read_json_body(response).await["summary"], FAILURE_MESSAGE);
    }

    #[tokio::test]
    async fn analytics_route_counts_statuses() {
        let response = wall_router(seeded_service())
            .oneshot(
                Request::get("/api/v1/admin/analytics")
                    .body(Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("router responds");

        let body = read_json_body(response).await;
        assert_eq!(body["total"], 4);
        assert_eq!(body["status_breakdown"][0]["count"], 3);
    }
}
