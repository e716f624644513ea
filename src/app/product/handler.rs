//! 产品处理器

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    response::Response,
    Json,
};
use tracing::{info, warn};
use validator::Validate;

use super::model::ProductPayload;
use super::repository::{ListQuery, PageRequest, Pagination, Sort};
use crate::core::{error::CoreError, response};
use crate::AppState;

pub const BORRADO_OK: &str = "El producto se ha borrado correctamente";
pub const BORRADO_FALLIDO: &str = "No se ha podido eliminar";
pub const TAMANO_INVALIDO: &str = "El tamaño de página debe ser mayor que cero";

/// GET /productos
pub async fn list_products(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Response, CoreError> {
    let sort = Sort::by_name();

    let products = match Pagination::from(&query) {
        Pagination::Paged { size: 0, .. } => {
            return Err(CoreError::BadRequest(vec![TAMANO_INVALIDO.to_string()]));
        }
        Pagination::Paged { page, size } => state
            .products
            .find_page(PageRequest::of(page, size, sort))
            .await
            .map_err(|e| {
                CoreError::InternalServerError(format!("Error al consultar los productos: {}", e))
            })?,
        Pagination::Unpaginated => state.products.find_all(sort).await.map_err(|e| {
            CoreError::InternalServerError(format!("Error al consultar los productos: {}", e))
        })?,
    };

    Ok(response::collection_or_no_content(products))
}

/// GET /productos/:id
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Response, CoreError> {
    let product = state.products.find_by_id(id).await.map_err(|e| {
        CoreError::InternalServerError(format!("Error al consultar el producto: {}", e))
    })?;

    Ok(response::found_or_no_content(product))
}

/// POST /productos
pub async fn create_product(
    State(state): State<AppState>,
    payload: Result<Json<ProductPayload>, JsonRejection>,
) -> Result<Response, CoreError> {
    let Json(mut payload) = payload?;
    payload.validate()?;

    // 新建时由存储分配 id
    payload.id = None;

    let product = state.products.save(payload).await.map_err(|e| {
        CoreError::InternalServerError(format!("No se ha podido crear el producto: {}", e))
    })?;

    info!("Created product: {} ({})", product.nombre, product.id);

    Ok(response::saved(
        format!("El producto con id {} se ha creado exitosamente", product.id),
        product,
    ))
}

/// PUT /productos/:id
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    payload: Result<Json<ProductPayload>, JsonRejection>,
) -> Result<Response, CoreError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let product = state.products.save(payload.with_id(id)).await.map_err(|e| {
        CoreError::InternalServerError(format!("No se ha podido actualizar el producto: {}", e))
    })?;

    info!("Updated product: {} ({})", product.nombre, product.id);

    Ok(response::saved(
        format!("El producto con id {} se ha modificado exitosamente", product.id),
        product,
    ))
}

/// DELETE /productos/:id
///
/// 是否删除成功以随后的查询为准，而不是删除调用本身的结果。
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Response, CoreError> {
    if let Err(e) = state.products.delete_by_id(id).await {
        warn!("Delete of product {} reported an error: {}", id, e);
    }

    let remaining = state.products.find_by_id(id).await.map_err(|e| {
        CoreError::InternalServerError(format!("No se ha podido comprobar el borrado: {}", e))
    })?;

    match remaining {
        None => {
            info!("Deleted product: {}", id);
            Ok(response::text(StatusCode::OK, BORRADO_OK))
        }
        Some(_) => Ok(response::text(StatusCode::BAD_REQUEST, BORRADO_FALLIDO)),
    }
}
