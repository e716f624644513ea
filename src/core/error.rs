//! 核心错误处理模块

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::error;

use super::response::{ErrorsResponse, MessageResponse};

/// 核心错误类型
#[derive(Debug)]
pub enum CoreError {
    /// 400，`{"errores": [...]}`
    BadRequest(Vec<String>),
    /// 500，`{"mensaje": "..."}`
    InternalServerError(String),
}

impl IntoResponse for CoreError {
    fn into_response(self) -> Response {
        match self {
            CoreError::BadRequest(errores) => {
                (StatusCode::BAD_REQUEST, Json(ErrorsResponse { errores })).into_response()
            }
            CoreError::InternalServerError(mensaje) => {
                error!("Internal error: {}", mensaje);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(MessageResponse { mensaje }),
                )
                    .into_response()
            }
        }
    }
}

impl From<validator::ValidationErrors> for CoreError {
    fn from(err: validator::ValidationErrors) -> Self {
        let mut fields: Vec<_> = err.field_errors().into_iter().collect();
        fields.sort_by_key(|(field, _)| field.to_string());

        let messages: Vec<String> = fields
            .into_iter()
            .flat_map(|(_, errors)| {
                errors.iter().map(|error| {
                    error
                        .message
                        .as_ref()
                        .map(|msg| msg.to_string())
                        .unwrap_or_else(|| format!("Valor no válido ({})", error.code))
                })
            })
            .collect();

        CoreError::BadRequest(messages)
    }
}

impl From<JsonRejection> for CoreError {
    fn from(rejection: JsonRejection) -> Self {
        CoreError::BadRequest(vec![rejection.body_text()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::product::model::{ProductPayload, NOMBRE_VACIO, PRECIO_NEGATIVO, STOCK_NEGATIVO};
    use validator::Validate;

    #[test]
    fn test_validation_messages_ordered_by_field() {
        let payload = ProductPayload {
            nombre: " ".to_string(),
            precio: -3.0,
            stock: -1,
            ..Default::default()
        };
        let err = CoreError::from(payload.validate().unwrap_err());
        match err {
            CoreError::BadRequest(messages) => assert_eq!(
                messages,
                vec![
                    NOMBRE_VACIO.to_string(),
                    PRECIO_NEGATIVO.to_string(),
                    STOCK_NEGATIVO.to_string()
                ]
            ),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_status_codes() {
        let bad = CoreError::BadRequest(vec!["x".to_string()]).into_response();
        assert_eq!(bad.status(), StatusCode::BAD_REQUEST);

        let internal = CoreError::InternalServerError("boom".to_string()).into_response();
        assert_eq!(internal.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
