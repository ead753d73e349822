use crate::entities::{MitraStatus, mitra_entity as mitra};
use crate::error::{AppError, AppResult};
use crate::models::*;
use crate::utils::{
    JwtService, format_indonesian_phone, hash_password, validate_password, verify_password,
};
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};

/// Wrong email and wrong password are deliberately indistinguishable.
const LOGIN_FAILED: &str = "Email atau kata sandi salah";

#[derive(Clone)]
pub struct AuthService {
    pool: DatabaseConnection,
    jwt_service: JwtService,
}

impl AuthService {
    pub fn new(pool: DatabaseConnection, jwt_service: JwtService) -> Self {
        Self { pool, jwt_service }
    }

    pub async fn register(&self, request: RegisterRequest) -> AppResult<AuthResponse> {
        validate_register_request(&request)?;

        let email = request.email.trim().to_lowercase();

        // Checked up front for the product's own message; the unique index
        // still backstops concurrent registrations.
        let existing = mitra::Entity::find()
            .filter(mitra::Column::Email.eq(email.clone()))
            .one(&self.pool)
            .await?;
        if existing.is_some() {
            return Err(AppError::ValidationError(
                "Email sudah digunakan".to_string(),
            ));
        }

        let password_hash = hash_password(&request.password)?;
        let phone_number = format_indonesian_phone(request.phone_number.trim());

        let inserted = mitra::ActiveModel {
            nama_toko: Set(request.nama_toko.trim().to_string()),
            email: Set(email),
            password_hash: Set(password_hash),
            alamat: Set(request.alamat.trim().to_string()),
            phone_number: Set(phone_number),
            status: Set(MitraStatus::Pending),
            saldo: Set(0),
            ..Default::default()
        }
        .insert(&self.pool)
        .await?;

        log::info!("Registered new mitra {} ({})", inserted.id, inserted.email);

        let access_token = self
            .jwt_service
            .generate_access_token(inserted.id, &inserted.email)?;
        let refresh_token = self
            .jwt_service
            .generate_refresh_token(inserted.id, &inserted.email)?;

        Ok(AuthResponse {
            mitra: MitraResponse::from(inserted),
            access_token,
            refresh_token,
            expires_in: self.jwt_service.get_access_token_expires_in(),
        })
    }

    pub async fn login(&self, request: LoginRequest) -> AppResult<AuthResponse> {
        let email = request.email.trim().to_lowercase();

        let account = mitra::Entity::find()
            .filter(mitra::Column::Email.eq(email))
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::AuthError(LOGIN_FAILED.to_string()))?;

        let is_valid = verify_password(&request.password, &account.password_hash)?;
        if !is_valid {
            return Err(AppError::AuthError(LOGIN_FAILED.to_string()));
        }

        let access_token = self
            .jwt_service
            .generate_access_token(account.id, &account.email)?;
        let refresh_token = self
            .jwt_service
            .generate_refresh_token(account.id, &account.email)?;

        Ok(AuthResponse {
            mitra: MitraResponse::from(account),
            access_token,
            refresh_token,
            expires_in: self.jwt_service.get_access_token_expires_in(),
        })
    }

    pub async fn refresh_token(&self, refresh_token: &str) -> AppResult<AuthResponse> {
        let claims = self.jwt_service.verify_refresh_token(refresh_token)?;
        let mitra_id: i64 = claims
            .sub
            .parse()
            .map_err(|_| AppError::AuthError("Sesi tidak valid".to_string()))?;

        let account = mitra::Entity::find_by_id(mitra_id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::AuthError("Akun tidak ditemukan".to_string()))?;

        let access_token = self
            .jwt_service
            .generate_access_token(account.id, &account.email)?;

        Ok(AuthResponse {
            mitra: MitraResponse::from(account),
            access_token,
            refresh_token: refresh_token.to_string(),
            expires_in: self.jwt_service.get_access_token_expires_in(),
        })
    }
}

/// Mirrors the registration form: all fields required, matching password
/// confirmation, then the minimum password length.
fn validate_register_request(request: &RegisterRequest) -> AppResult<()> {
    let required = [
        &request.nama_toko,
        &request.email,
        &request.password,
        &request.confirm_password,
        &request.alamat,
        &request.phone_number,
    ];
    if required.iter().any(|field| field.trim().is_empty()) {
        return Err(AppError::ValidationError(
            "Semua field wajib diisi".to_string(),
        ));
    }
    if !request.email.contains('@') {
        return Err(AppError::ValidationError(
            "Format email tidak valid".to_string(),
        ));
    }
    if request.password != request.confirm_password {
        return Err(AppError::ValidationError(
            "Password dan konfirmasi password tidak cocok".to_string(),
        ));
    }
    validate_password(&request.password)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> RegisterRequest {
        RegisterRequest {
            nama_toko: "Toko Berkah Jaya".to_string(),
            email: "berkah@example.com".to_string(),
            password: "rahasia123".to_string(),
            confirm_password: "rahasia123".to_string(),
            alamat: "Jl. Merdeka No. 10".to_string(),
            phone_number: "081234567890".to_string(),
        }
    }

    fn message(err: AppError) -> String {
        match err {
            AppError::ValidationError(msg) => msg,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_valid_registration_passes() {
        assert!(validate_register_request(&request()).is_ok());
    }

    #[test]
    fn test_empty_fields_rejected() {
        let mut req = request();
        req.alamat = "   ".to_string();
        let err = validate_register_request(&req).unwrap_err();
        assert_eq!(message(err), "Semua field wajib diisi");
    }

    #[test]
    fn test_password_mismatch_rejected() {
        let mut req = request();
        req.confirm_password = "berbeda123".to_string();
        let err = validate_register_request(&req).unwrap_err();
        assert_eq!(message(err), "Password dan konfirmasi password tidak cocok");
    }

    #[test]
    fn test_short_password_rejected() {
        let mut req = request();
        req.password = "12345".to_string();
        req.confirm_password = "12345".to_string();
        let err = validate_register_request(&req).unwrap_err();
        assert_eq!(message(err), "Password minimal 6 karakter");
    }

    #[test]
    fn test_invalid_email_rejected() {
        let mut req = request();
        req.email = "bukan-email".to_string();
        let err = validate_register_request(&req).unwrap_err();
        assert_eq!(message(err), "Format email tidak valid");
    }
}
