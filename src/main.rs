//! 소셜 미디어 백엔드 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동하고 모든 서비스를 초기화합니다.
//! MongoDB 연결을 설정하고 JWT 인증 기반의 REST API를 제공합니다.

use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{App, HttpServer, middleware, web};
use dotenv::dotenv;
use env_logger::Env;
use log::info;

use social_media_backend::config::auth_config::JwtConfig;
use social_media_backend::config::data_config::{CorsConfig, ServerConfig};
use social_media_backend::db::Database;
use social_media_backend::repositories::posts::PostRepository;
use social_media_backend::repositories::users::UserRepository;
use social_media_backend::routes;
use social_media_backend::services::auth::TokenService;
use social_media_backend::services::posts::PostService;
use social_media_backend::services::users::UserService;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    init_logging();

    info!("소셜 미디어 백엔드 시작중...");

    let database = Database::new().await.map_err(|e| {
        std::io::Error::other(format!("데이터베이스 연결 실패: {e}"))
    })?;

    let user_repo = UserRepository::new(&database);
    let post_repo = PostRepository::new(&database);

    if let Err(e) = user_repo.create_indexes().await {
        log::warn!("유니크 인덱스 생성 실패 (이미 존재할 수 있음): {e}");
    }

    let token_service = web::Data::new(TokenService::new(&JwtConfig::secret()));
    let user_service = web::Data::new(UserService::new(user_repo.clone(), post_repo.clone()));
    let post_service = web::Data::new(PostService::new(post_repo, user_repo));

    start_http_server(token_service, user_service, post_service).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// CORS, 로깅, 경로 정규화 미들웨어를 포함합니다. 서비스 인스턴스는
/// `web::Data`로 워커마다 공유됩니다.
async fn start_http_server(
    token_service: web::Data<TokenService>,
    user_service: web::Data<UserService>,
    post_service: web::Data<PostService>,
) -> std::io::Result<()> {
    let bind_address = format!("{}:{}", ServerConfig::host(), ServerConfig::port());

    info!("서버가 http://{} 에서 실행중입니다", bind_address);
    info!("Health check: http://{}/health", bind_address);

    HttpServer::new(move || {
        App::new()
            .app_data(token_service.clone())
            .app_data(user_service.clone())
            .app_data(post_service.clone())
            // 요청 본문 크기 제한 (16KiB)
            .app_data(web::JsonConfig::default().limit(16 * 1024))
            .wrap(configure_cors())
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(routes::configure)
    })
    .bind(bind_address)?
    .run()
    .await
}

/// 로깅 시스템을 초기화합니다
///
/// `RUST_LOG` 환경변수로 레벨을 조정할 수 있습니다
/// (기본값: "info,actix_web=debug").
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

/// CORS 설정을 구성합니다
///
/// 허용 Origin은 `CORS_ORIGIN` 환경변수에서 읽습니다.
fn configure_cors() -> Cors {
    Cors::default()
        .allowed_origin(&CorsConfig::allowed_origin())
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "PATCH", "OPTIONS"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .supports_credentials()
        .max_age(3600)
}
