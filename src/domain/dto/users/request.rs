//! 사용자 관련 요청 DTO
//!
//! 회원가입, 로그인, 프로필 수정 요청의 데이터 구조를 정의합니다.
//! 클라이언트 입력 데이터의 검증과 타입 안전성을 보장합니다.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// 회원가입 요청 DTO
///
/// JSON 역직렬화와 입력 검증을 자동으로 수행합니다.
/// 모든 필수 필드는 공백만으로 이루어질 수 없습니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    /// 이름
    #[validate(custom(function = "validate_not_blank"))]
    pub first_name: String,

    /// 성
    #[validate(custom(function = "validate_not_blank"))]
    pub last_name: String,

    /// 사용자 이메일 주소 (RFC 5322 표준)
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    /// 사용자명 (시스템 전체에서 고유)
    #[validate(custom(function = "validate_not_blank"))]
    pub username: String,

    /// 계정 비밀번호 (평문으로 전달되며 저장 전 해시됨)
    #[validate(custom(function = "validate_not_blank"))]
    pub password: String,

    /// 약관 동의 여부
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accept_terms_cond: Option<bool>,
}

/// 로그인 요청 DTO
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    /// 사용자명
    #[validate(custom(function = "validate_not_blank"))]
    pub username: String,

    /// 비밀번호
    #[validate(custom(function = "validate_not_blank"))]
    pub password: String,
}

/// 프로필 수정 요청 DTO
///
/// 기존 클라이언트 계약에 따라 수정할 필드들을 `userData` 객체로 감싸 전달합니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EditUserRequest {
    /// 수정할 프로필 필드 모음
    #[validate(nested)]
    pub user_data: UserProfilePatch,
}

/// 수정 가능한 프로필 필드
///
/// 존재하는 필드만 갱신됩니다. `username`은 변경할 수 없으며,
/// 전달된 경우 현재 값과 일치하는지 서비스 계층에서 검증합니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UserProfilePatch {
    pub first_name: Option<String>,

    pub last_name: Option<String>,

    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: Option<String>,

    /// 현재 사용자명과 일치해야 함 (변경 불가)
    pub username: Option<String>,

    /// 새 비밀번호 (전달되면 bcrypt로 재해시되어 저장)
    #[validate(length(min = 1, message = "비밀번호는 비울 수 없습니다"))]
    pub password: Option<String>,

    pub profile_pic: Option<String>,

    pub banner_img: Option<String>,

    pub bio: Option<String>,

    pub bio_link: Option<String>,
}

/// 공백만으로 이루어진 필수 입력값 거부
fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank_field")
            .with_message("필수 입력값이 비어 있습니다".into()));
    }
    Ok(())
}
