//! HTTP 요청 핸들러 모듈
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//! Spring Framework의 Controller 레이어와 동일한 역할을 수행합니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Client (Browser, Mobile App, API Client)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈) - HTTP 엔드포인트 처리        ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 비즈니스 로직                       ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - 데이터 접근                    ← Repository Layer
//! ├─────────────────────────────────────────────┤
//!   Entities - 도메인 모델                        ← Domain Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 모듈 구성
//!
//! - **`auth`**: 회원가입, 로그인
//! - **`users`**: 사용자 조회, 프로필 수정, 팔로우, 북마크
//! - **`posts`**: 게시물 CRUD, 좋아요
//!
//! 모든 핸들러는 `Result<HttpResponse, AppError>`를 반환하여 에러를
//! `?` 연산자로 전파하고, `AppError`의 `ResponseError` 구현이 일관된
//! JSON 에러 본문으로 변환합니다. 서비스 의존성은 `web::Data`로
//! 주입받습니다.

pub mod auth;
pub mod posts;
pub mod users;
