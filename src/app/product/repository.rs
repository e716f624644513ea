//! 产品仓储抽象
//!
//! 处理器只依赖 [`ProductRepository`]，排序与分页都交给仓储实现。

use async_trait::async_trait;
use serde::Deserialize;

use super::model::{Product, ProductPayload};

/// 仓储错误
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("{0}")]
    DataAccess(String),
}

#[cfg(feature = "database")]
impl From<sqlx::Error> for RepositoryError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db) => RepositoryError::DataAccess(db.message().to_string()),
            other => RepositoryError::DataAccess(other.to_string()),
        }
    }
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Nombre,
    Id,
}

impl SortField {
    pub fn column(&self) -> &'static str {
        match self {
            SortField::Nombre => "nombre",
            SortField::Id => "id",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

impl Direction {
    pub fn keyword(&self) -> &'static str {
        match self {
            Direction::Asc => "ASC",
            Direction::Desc => "DESC",
        }
    }
}

/// 排序条件
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sort {
    pub field: SortField,
    pub direction: Direction,
}

impl Sort {
    /// 按名称升序
    pub fn by_name() -> Self {
        Self {
            field: SortField::Nombre,
            direction: Direction::Asc,
        }
    }

    pub fn by(field: SortField, direction: Direction) -> Self {
        Self { field, direction }
    }

    /// SQL 片段，只由枚举生成
    pub fn order_by_clause(&self) -> String {
        let clause = format!("ORDER BY {} {}", self.field.column(), self.direction.keyword());
        match self.field {
            // 同名记录按 id 排，保证分页稳定
            SortField::Nombre => format!("{}, id ASC", clause),
            SortField::Id => clause,
        }
    }

    pub fn compare(&self, a: &Product, b: &Product) -> std::cmp::Ordering {
        let ordering = match self.field {
            // 先忽略大小写比较，再按原文区分
            SortField::Nombre => a
                .nombre
                .to_lowercase()
                .cmp(&b.nombre.to_lowercase())
                .then_with(|| a.nombre.cmp(&b.nombre)),
            SortField::Id => a.id.cmp(&b.id),
        };
        let ordering = match self.direction {
            Direction::Asc => ordering,
            Direction::Desc => ordering.reverse(),
        };
        ordering.then_with(|| a.id.cmp(&b.id))
    }
}

/// 零基页码的分页请求
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub size: u32,
    pub sort: Sort,
}

impl PageRequest {
    pub fn of(page: u32, size: u32, sort: Sort) -> Self {
        Self { page, size, sort }
    }

    pub fn offset(&self) -> u64 {
        u64::from(self.page) * u64::from(self.size)
    }
}

/// 列表查询参数
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub page: Option<u32>,
    pub size: Option<u32>,
}

/// 列表模式：在分发到仓储之前一次性确定
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pagination {
    Unpaginated,
    Paged { page: u32, size: u32 },
}

impl From<&ListQuery> for Pagination {
    fn from(query: &ListQuery) -> Self {
        match (query.page, query.size) {
            (Some(page), Some(size)) => Pagination::Paged { page, size },
            _ => Pagination::Unpaginated,
        }
    }
}

/// 产品持久化接口
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn find_all(&self, sort: Sort) -> RepositoryResult<Vec<Product>>;

    async fn find_page(&self, request: PageRequest) -> RepositoryResult<Vec<Product>>;

    async fn find_by_id(&self, id: i64) -> RepositoryResult<Option<Product>>;

    /// `id` 为空时插入新记录，否则按 id 插入或覆盖
    async fn save(&self, product: ProductPayload) -> RepositoryResult<Product>;

    /// id 不存在时不报错
    async fn delete_by_id(&self, id: i64) -> RepositoryResult<()>;

    async fn ping(&self) -> RepositoryResult<()>;
}
