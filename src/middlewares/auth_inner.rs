//! 인증 미들웨어의 내부 서비스 구현

use std::rc::Rc;

use actix_web::{
    Error, HttpMessage, HttpResponse,
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, forward_ready},
    http::StatusCode,
    web,
};
use futures_util::future::LocalBoxFuture;
use log::{debug, warn};

use crate::domain::auth::authenticated_user::AuthenticatedUser;
use crate::services::auth::TokenService;

/// [`AuthMiddleware`]가 생성하는 요청 처리 서비스
///
/// [`AuthMiddleware`]: crate::middlewares::auth_middleware::AuthMiddleware
pub struct AuthMiddlewareService<S> {
    pub(crate) service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        Box::pin(async move {
            // 헤더 값을 Bearer 접두사 처리 없이 그대로 토큰으로 사용한다.
            let raw_token = req
                .headers()
                .get("authorization")
                .and_then(|value| value.to_str().ok())
                .map(str::trim)
                .unwrap_or("")
                .to_owned();

            if raw_token.is_empty() {
                debug!("인증 헤더 없이 보호된 경로 접근: {}", req.path());
                return Ok(reject(
                    req,
                    StatusCode::UNAUTHORIZED,
                    "인증 토큰이 필요합니다",
                ));
            }

            let token_service = match req.app_data::<web::Data<TokenService>>() {
                Some(token_service) => token_service.clone(),
                None => {
                    warn!("TokenService가 앱 데이터에 등록되지 않았습니다");
                    return Ok(reject(
                        req,
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "서버 내부 오류가 발생했습니다",
                    ));
                }
            };

            match token_service.verify(&raw_token) {
                Ok(claims) => {
                    req.extensions_mut().insert(AuthenticatedUser::from(claims));
                    let res = service.call(req).await?;
                    Ok(res.map_into_left_body())
                }
                Err(err) => {
                    debug!("토큰 검증 실패: {err}");
                    Ok(reject(
                        req,
                        StatusCode::FORBIDDEN,
                        "유효하지 않은 토큰입니다",
                    ))
                }
            }
        })
    }
}

/// 핸들러 진입 전에 에러 응답으로 요청을 종료
fn reject<B>(
    req: ServiceRequest,
    status: StatusCode,
    message: &str,
) -> ServiceResponse<EitherBody<B>> {
    let (request, _payload) = req.into_parts();
    let response = HttpResponse::build(status).json(serde_json::json!({ "error": message }));
    ServiceResponse::new(request, response).map_into_right_body()
}

#[cfg(test)]
mod tests {
    use actix_web::{App, HttpResponse, test, web};
    use mongodb::bson::oid::ObjectId;

    use crate::domain::auth::authenticated_user::AuthenticatedUser;
    use crate::domain::entities::users::user::User;
    use crate::middlewares::auth_middleware::AuthMiddleware;
    use crate::services::auth::TokenService;

    async fn whoami(user: AuthenticatedUser) -> HttpResponse {
        HttpResponse::Ok().json(serde_json::json!({ "username": user.username }))
    }

    fn sample_user() -> User {
        let mut user = User::new(
            "Tester".into(),
            "Kim".into(),
            "tester@example.com".into(),
            "tester".into(),
            "hashed".into(),
            Some(true),
        );
        user.id = Some(ObjectId::new());
        user
    }

    #[actix_web::test]
    async fn missing_header_is_rejected_with_401() {
        let token_service = web::Data::new(TokenService::new("test-secret"));
        let app = test::init_service(App::new().app_data(token_service).service(
            web::scope("/protected")
                .wrap(AuthMiddleware::new())
                .route("", web::get().to(whoami)),
        ))
        .await;

        let req = test::TestRequest::get().uri("/protected").to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status().as_u16(), 401);
    }

    #[actix_web::test]
    async fn invalid_token_is_rejected_with_403() {
        let token_service = web::Data::new(TokenService::new("test-secret"));
        let app = test::init_service(App::new().app_data(token_service).service(
            web::scope("/protected")
                .wrap(AuthMiddleware::new())
                .route("", web::get().to(whoami)),
        ))
        .await;

        let req = test::TestRequest::get()
            .uri("/protected")
            .insert_header(("authorization", "not-a-jwt"))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status().as_u16(), 403);
    }

    #[actix_web::test]
    async fn valid_token_reaches_handler_with_identity() {
        let token_service = TokenService::new("test-secret");
        let user = sample_user();
        let token = token_service.issue(&user).unwrap();

        let app = test::init_service(
            App::new().app_data(web::Data::new(token_service)).service(
                web::scope("/protected")
                    .wrap(AuthMiddleware::new())
                    .route("", web::get().to(whoami)),
            ),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/protected")
            .insert_header(("authorization", token))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert!(res.status().is_success());

        let body: serde_json::Value = test::read_body_json(res).await;
        assert_eq!(body["username"], "tester");
    }
}
