//! 核心响应处理模块

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::app::product::model::Product;

/// 保存成功：`{"mensaje": ..., "producto": ...}`
#[derive(Debug, Serialize, Deserialize)]
pub struct SavedResponse {
    pub mensaje: String,
    pub producto: Product,
}

/// 校验失败：`{"errores": [...]}`
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorsResponse {
    pub errores: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub mensaje: String,
}

/// 非空列表 200，空列表 204
pub fn collection_or_no_content<T: Serialize>(items: Vec<T>) -> Response {
    if items.is_empty() {
        StatusCode::NO_CONTENT.into_response()
    } else {
        (StatusCode::OK, Json(items)).into_response()
    }
}

/// 找到 200，未找到 204
pub fn found_or_no_content<T: Serialize>(item: Option<T>) -> Response {
    match item {
        Some(item) => (StatusCode::OK, Json(item)).into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    }
}

/// 创建与更新都返回 201
pub fn saved(mensaje: String, producto: Product) -> Response {
    (StatusCode::CREATED, Json(SavedResponse { mensaje, producto })).into_response()
}

pub fn text(status: StatusCode, body: &'static str) -> Response {
    (status, body).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_collection_is_no_content() {
        let response = collection_or_no_content(Vec::<Product>::new());
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let response = collection_or_no_content(vec![1, 2]);
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[test]
    fn test_absent_item_is_no_content() {
        assert_eq!(
            found_or_no_content::<Product>(None).status(),
            StatusCode::NO_CONTENT
        );
        assert_eq!(found_or_no_content(Some("x")).status(), StatusCode::OK);
    }
}
