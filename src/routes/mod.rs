//! API 라우트 설정 모듈
//!
//! RESTful API 엔드포인트들을 기능별로 그룹화하여 등록합니다.
//! 인증, 사용자, 게시물 라우트와 헬스체크 엔드포인트를 포함합니다.
//!
//! # 라우트 구성
//!
//! 같은 경로 접두사 아래에 공개/보호 엔드포인트가 섞여 있으므로,
//! 보호된 하위 스코프를 먼저 등록하고 매개변수 경로(`/{username}`,
//! `/{post_id}`)의 공개 GET을 마지막에 등록합니다. 메서드만 다른
//! 동일 경로(`POST /api/posts` vs `GET /api/posts`)는 메서드 가드를
//! 붙인 빈 스코프로 분리합니다.
//!
//! ## 공개 라우트 (인증 불필요)
//! - `POST /api/auth/signup`, `POST /api/auth/login`
//! - `GET /api/users`, `GET /api/users/{username}`
//! - `GET /api/posts`, `GET /api/posts/{postId}`, `GET /api/posts/user/{username}`
//! - `GET /`, `GET /health`
//!
//! ## 보호 라우트 (JWT 필요)
//! - `POST /api/users/edit`, `follow/{id}`, `unfollow/{id}`
//! - `GET/POST /api/users/bookmark`, `POST /api/users/remove-bookmark/{postId}`
//! - `POST /api/posts`, `edit/{postId}`, `like/{postId}`, `dislike/{postId}`
//! - `DELETE /api/posts/{postId}`

use actix_web::{guard, web};
use serde_json::json;

use crate::handlers;
use crate::middlewares::AuthMiddleware;

/// 모든 라우트를 애플리케이션에 등록합니다
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(index);
    cfg.service(health_check);

    configure_auth_routes(cfg);
    configure_user_routes(cfg);
    configure_post_routes(cfg);
}

/// 인증 라우트 (`/api/auth`)
fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/auth")
            .service(handlers::auth::signup)
            .service(handlers::auth::login),
    );
}

/// 사용자 라우트 (`/api/users`)
///
/// 보호된 하위 스코프(`/bookmark`, `/follow`, ...)가 공개
/// `GET /{username}` 라우트보다 먼저 매칭되어야 합니다.
fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/users")
            .service(
                web::scope("/bookmark")
                    .wrap(AuthMiddleware::new())
                    .service(handlers::users::get_bookmarks)
                    .service(handlers::users::add_bookmark),
            )
            .service(
                web::scope("/remove-bookmark")
                    .wrap(AuthMiddleware::new())
                    .service(handlers::users::remove_bookmark),
            )
            .service(
                web::scope("/follow")
                    .wrap(AuthMiddleware::new())
                    .service(handlers::users::follow_user),
            )
            .service(
                web::scope("/unfollow")
                    .wrap(AuthMiddleware::new())
                    .service(handlers::users::unfollow_user),
            )
            .service(
                web::scope("/edit")
                    .wrap(AuthMiddleware::new())
                    .service(handlers::users::edit_profile),
            )
            // 공개 라우트: 매개변수 경로는 반드시 마지막
            .service(handlers::users::get_all_users)
            .service(handlers::users::get_user_by_username),
    );
}

/// 게시물 라우트 (`/api/posts`)
///
/// `POST /api/posts`와 `DELETE /api/posts/{postId}`는 공개 GET과 같은
/// 경로를 공유하므로 메서드 가드를 붙인 빈 스코프로 분리합니다.
fn configure_post_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/posts")
            .service(
                web::scope("/edit")
                    .wrap(AuthMiddleware::new())
                    .service(handlers::posts::edit_post),
            )
            .service(
                web::scope("/like")
                    .wrap(AuthMiddleware::new())
                    .service(handlers::posts::like_post),
            )
            .service(
                web::scope("/dislike")
                    .wrap(AuthMiddleware::new())
                    .service(handlers::posts::dislike_post),
            )
            .service(
                web::scope("")
                    .guard(guard::Post())
                    .wrap(AuthMiddleware::new())
                    .service(handlers::posts::create_post),
            )
            .service(
                web::scope("")
                    .guard(guard::Delete())
                    .wrap(AuthMiddleware::new())
                    .service(handlers::posts::delete_post),
            )
            // 공개 라우트: /user/{username}이 /{post_id}보다 먼저
            .service(handlers::posts::get_posts_by_username)
            .service(handlers::posts::get_all_posts)
            .service(handlers::posts::get_post_by_id),
    );
}

/// 루트 배너 엔드포인트
#[actix_web::get("/")]
async fn index() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body("Social media backend API is running")
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// 로드밸런서나 모니터링 시스템에서 서비스 상태를 확인하는 데 사용됩니다.
///
/// # Examples
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "social_media_backend",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "database": "MongoDB",
            "framework": "ActixWeb"
        }
    }))
}

#[cfg(test)]
mod tests {
    use actix_web::{App, test, web};

    use super::*;
    use crate::services::auth::TokenService;

    #[actix_web::test]
    async fn health_check_reports_healthy() {
        let app = test::init_service(App::new().service(health_check)).await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let res = test::call_service(&app, req).await;
        assert!(res.status().is_success());

        let body: serde_json::Value = test::read_body_json(res).await;
        assert_eq!(body["status"], "healthy");
    }

    #[actix_web::test]
    async fn index_returns_plain_text_banner() {
        let app = test::init_service(App::new().service(index)).await;

        let req = test::TestRequest::get().uri("/").to_request();
        let res = test::call_service(&app, req).await;
        assert!(res.status().is_success());

        let body = test::read_body(res).await;
        assert!(!body.is_empty());
    }

    // 보호된 경로는 서비스 레이어 없이도 미들웨어에서 차단되어야 한다
    #[actix_web::test]
    async fn protected_post_route_rejects_anonymous_requests() {
        let token_service = web::Data::new(TokenService::new("test-secret"));
        let app = test::init_service(
            App::new()
                .app_data(token_service)
                .configure(configure_post_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/posts")
            .set_json(serde_json::json!({ "content": "hello" }))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status().as_u16(), 401);
    }
}
