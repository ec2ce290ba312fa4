//! 게시물 관련 요청 DTO
//!
//! 게시물 작성과 수정 요청의 데이터 구조를 정의합니다.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// 게시물 작성 요청 DTO
///
/// 본문은 필수이며 공백만으로 이루어질 수 없습니다.
/// 미디어 필드는 생략 시 빈 문자열로 저장됩니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    /// 게시물 본문
    #[validate(custom(function = "validate_not_blank"))]
    pub content: String,

    /// 첨부 미디어 URL (기존 클라이언트 계약에 따라 키는 `mediaURL`)
    #[serde(rename = "mediaURL", default)]
    pub media_url: String,

    /// 미디어 대체 텍스트
    #[serde(default)]
    pub media_alt: String,
}

/// 게시물 수정 요청 DTO
///
/// 존재하는 필드만 갱신됩니다. 소유권 검사는 서비스 계층에서 수행합니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EditPostRequest {
    /// 새 본문 (전달되면 공백만으로 이루어질 수 없음)
    #[validate(custom(function = "validate_not_blank_opt"))]
    pub content: Option<String>,

    #[serde(rename = "mediaURL")]
    pub media_url: Option<String>,

    pub media_alt: Option<String>,
}

/// 공백만으로 이루어진 필수 입력값 거부
fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank_field")
            .with_message("게시물 본문이 비어 있습니다".into()));
    }
    Ok(())
}

fn validate_not_blank_opt(value: &str) -> Result<(), ValidationError> {
    validate_not_blank(value)
}
