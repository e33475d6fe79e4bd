//! Conversions from domain errors into [`AppError`]

use super::codes::ErrorCode;
use super::types::AppError;
use crate::catalog::CatalogError;
use crate::configurator::{ConfiguratorError, FormError};

impl From<ConfiguratorError> for AppError {
    fn from(err: ConfiguratorError) -> Self {
        match err {
            ConfiguratorError::UnknownMaterial(id) => {
                AppError::new(ErrorCode::MaterialNotFound).with_detail("id", id)
            }
            ConfiguratorError::UnknownFinish(id) => {
                AppError::new(ErrorCode::FinishNotFound).with_detail("id", id)
            }
        }
    }
}

impl From<FormError> for AppError {
    fn from(err: FormError) -> Self {
        let code = match &err {
            FormError::AlreadySubmitting => ErrorCode::AlreadySubmitting,
            FormError::ConsentRequired => ErrorCode::ConsentRequired,
            FormError::ContactRequired => ErrorCode::ContactRequired,
            FormError::CustomWoodRequired => ErrorCode::CustomWoodRequired,
            FormError::NotAuthenticated => ErrorCode::NotAuthenticated,
            FormError::SubmissionFailed(_) => ErrorCode::OrderSubmissionFailed,
        };
        AppError::new(code)
    }
}

impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        AppError::with_message(ErrorCode::CatalogInvalid, err.to_string())
    }
}
