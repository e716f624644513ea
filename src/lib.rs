//! # 产品 REST 服务
//!
//! 通过 HTTP 暴露 `/productos` 资源：
//! - 列表（可选分页，按名称排序）、按 id 查询、创建、更新、删除
//! - 仓储抽象 [`ProductRepository`]，PostgreSQL 与内存两种实现
//! - 统一的响应构造与错误映射

pub mod app;
pub mod core;
pub mod infrastructure;

use std::sync::Arc;
use std::time::Duration;

use axum::{middleware, routing::get, Router};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

pub use app::product::{InMemoryProductRepository, Product, ProductPayload, ProductRepository};
pub use crate::core::error::CoreError;

/// 应用状态
#[derive(Clone)]
pub struct AppState {
    pub products: Arc<dyn ProductRepository>,
}

impl AppState {
    pub fn new(products: Arc<dyn ProductRepository>) -> Self {
        Self { products }
    }
}

/// 创建路由
pub fn create_routes(state: AppState, timeout: Duration) -> Router {
    use app::product::handler;

    Router::new()
        .route("/health", get(app::health::health_check))
        .route(
            "/productos",
            get(handler::list_products).post(handler::create_product),
        )
        .route(
            "/productos/:id",
            get(handler::get_product)
                .put(handler::update_product)
                .delete(handler::delete_product),
        )
        .layer(
            ServiceBuilder::new()
                .layer(middleware::from_fn(
                    crate::core::middleware::request_logging_middleware,
                ))
                .layer(TraceLayer::new_for_http())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any),
                )
                .layer(TimeoutLayer::new(timeout)),
        )
        .with_state(state)
}
