//! # 사용자 관리 서비스 구현
//!
//! 회원가입, 로그인, 프로필 조회를 담당하는 비즈니스 로직입니다.
//!
//! ## 서비스 아키텍처
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │                 UserService                  │
//! │  ┌──────────────┐ ┌──────────┐ ┌──────────┐  │
//! │  │ Registration │ │  Login   │ │ Profile  │  │
//! │  │ • Validate   │ │ • Verify │ │ • By ID  │  │
//! │  │ • Dup Check  │ │ • Token  │ │          │  │
//! │  │ • Hash+Token │ │          │ │          │  │
//! │  └──────────────┘ └──────────┘ └──────────┘  │
//! └──────────────────────────────────────────────┘
//!          │                    │
//!          ▼                    ▼
//!     dyn UserStore        TokenService
//! ```
//!
//! ## 보안 설계 원칙
//!
//! - **bcrypt 해싱**: 환경별 cost, 평문 비밀번호는 저장하지 않음
//! - **계정 열거 방지**: 없는 이메일과 틀린 비밀번호가 같은 401 메시지
//! - **민감 정보 제거**: 응답 DTO에는 비밀번호 해시가 없음

use std::sync::Arc;

use mongodb::bson::oid::ObjectId;

use crate::{
    core::errors::{AppError, AppResult, ErrorContext},
    domain::{
        dto::{
            users::{request::RegisterUserRequest, response::UserResponse},
            UploadedFile,
        },
        entities::{StoredBlob, User},
        models::auth::AuthenticatedUser,
    },
    repositories::UserStore,
    services::auth::TokenService,
    utils::string_utils::mask_email,
};

const INVALID_CREDENTIALS: &str = "Invalid email or password";

/// 사용자 관리 비즈니스 로직 서비스
///
/// ## 주요 책임
///
/// 1. **회원가입** - 입력 검증, 중복 이메일 방지, 해싱, 토큰 발급
/// 2. **로그인** - 비밀번호 검증 후 새 토큰 발급
/// 3. **조회** - 프로필 조회, 인증 미들웨어용 신원 확인
///
/// 생성 시 저장소와 토큰 서비스를 명시적으로 전달받습니다.
///
/// ```rust,ignore
/// let user_service = UserService::new(user_store, token_service, config.bcrypt_cost);
/// let registered = user_service.register(request, None).await?;
/// ```
pub struct UserService {
    user_store: Arc<dyn UserStore>,
    token_service: Arc<TokenService>,
    bcrypt_cost: u32,
}

impl UserService {
    pub fn new(user_store: Arc<dyn UserStore>, token_service: Arc<TokenService>, bcrypt_cost: u32) -> Self {
        Self {
            user_store,
            token_service,
            bcrypt_cost,
        }
    }

    /// 새 사용자 등록
    ///
    /// # Arguments
    ///
    /// * `request` - 이름, 이메일, 비밀번호
    /// * `profile_picture` - multipart로 받은 프로필 사진 (선택, 빈 파일은 무시)
    ///
    /// # Returns
    ///
    /// * `Ok(UserResponse)` - 토큰이 포함된 사용자 정보
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 입력값 검증 실패
    /// * `AppError::ConflictError` - 이미 가입된 이메일 (`"User already exists"`)
    /// * `AppError::InternalError` - 해싱/토큰 생성 실패
    ///
    /// # 성능 모니터링
    ///
    /// ```text
    /// [INFO] Password hashing took: 3.1ms
    /// ```
    pub async fn register(
        &self,
        request: RegisterUserRequest,
        profile_picture: Option<UploadedFile>,
    ) -> AppResult<UserResponse> {
        request.check()?;

        if self.user_store.find_by_email(&request.email).await?.is_some() {
            log::warn!("⚠️ 중복 가입 시도: {}", mask_email(&request.email));
            return Err(AppError::ConflictError("User already exists".to_string()));
        }

        let hash_start = std::time::Instant::now();
        let password_hash = bcrypt::hash(&request.password, self.bcrypt_cost)
            .context("비밀번호 해싱 실패")?;
        log::info!("Password hashing took: {:?}", hash_start.elapsed());

        let picture = profile_picture
            .filter(|file| !file.is_empty())
            .map(StoredBlob::from);

        let user = User::new(request.name, request.email, password_hash, picture);
        let created = self.user_store.insert(user).await?;
        let token = self.token_service.issue(&created.id)?;

        log::info!("✅ 사용자 등록 완료: {} ({})", created.id_string(), mask_email(&created.email));

        Ok(UserResponse::from(created).with_token(token))
    }

    /// 이메일/비밀번호 로그인
    ///
    /// 존재하지 않는 이메일과 틀린 비밀번호는 동일한
    /// `AuthenticationError("Invalid email or password")`로 응답합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 자격 증명 불일치
    /// * `AppError::InternalError` - 저장된 해시를 해석할 수 없음
    pub async fn login(&self, email: &str, password: &str) -> AppResult<UserResponse> {
        let Some(user) = self.user_store.find_by_email(email).await? else {
            log::warn!("🔒 로그인 실패 (미가입): {}", mask_email(email));
            return Err(AppError::AuthenticationError(INVALID_CREDENTIALS.to_string()));
        };

        let verify_start = std::time::Instant::now();
        let is_valid = bcrypt::verify(password, &user.password)
            .context("비밀번호 검증 실패")?;
        log::debug!("Password verification took: {:?}", verify_start.elapsed());

        if !is_valid {
            log::warn!("🔒 로그인 실패 (비밀번호 불일치): {}", mask_email(email));
            return Err(AppError::AuthenticationError(INVALID_CREDENTIALS.to_string()));
        }

        let token = self.token_service.issue(&user.id)?;
        log::info!("🔑 로그인 성공: {}", user.id_string());

        Ok(UserResponse::from(user).with_token(token))
    }

    /// 인증된 사용자의 프로필 조회 (토큰 없음)
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 토큰 발급 이후 사용자가 사라진 경우
    pub async fn get_profile(&self, user_id: &ObjectId) -> AppResult<UserResponse> {
        self.user_store
            .find_by_id(user_id)
            .await?
            .map(UserResponse::from)
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    /// 토큰의 `id` 클레임을 사용자 신원으로 변환합니다.
    ///
    /// ObjectId로 해석되지 않는 값이나 없는 사용자는 `Ok(None)`,
    /// 저장소 오류만 `Err`로 돌려줍니다.
    pub async fn resolve_identity(&self, user_id: &str) -> AppResult<Option<AuthenticatedUser>> {
        let Ok(object_id) = ObjectId::parse_str(user_id) else {
            return Ok(None);
        };

        let user = self.user_store.find_by_id(&object_id).await?;
        Ok(user.as_ref().map(AuthenticatedUser::from))
    }
}
