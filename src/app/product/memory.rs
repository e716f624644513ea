//! 内存仓储，用于测试和无数据库运行

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::model::{Product, ProductPayload};
use super::repository::{
    PageRequest, ProductRepository, RepositoryError, RepositoryResult, Sort,
};

pub const IDS_AGOTADOS: &str = "secuencia de ids agotada";

struct Store {
    rows: BTreeMap<i64, Product>,
    /// `None` 表示 id 已经用到 `i64::MAX`
    next_id: Option<i64>,
}

impl Default for Store {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            next_id: Some(1),
        }
    }
}

/// 内存仓储
///
/// 名称排序不区分大小写，但不做语言排序规则：带重音的首字母（如 "Ábaco"）
/// 排在所有 ASCII 字母之后，而 PostgreSQL 按库的 collation 排序，结果可能不同。
#[derive(Default)]
pub struct InMemoryProductRepository {
    store: RwLock<Store>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.store.read().await.rows.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    async fn sorted(&self, sort: Sort) -> Vec<Product> {
        let store = self.store.read().await;
        let mut items: Vec<Product> = store.rows.values().cloned().collect();
        items.sort_by(|a, b| sort.compare(a, b));
        items
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn find_all(&self, sort: Sort) -> RepositoryResult<Vec<Product>> {
        Ok(self.sorted(sort).await)
    }

    async fn find_page(&self, request: PageRequest) -> RepositoryResult<Vec<Product>> {
        let items = self.sorted(request.sort).await;
        let offset = usize::try_from(request.offset()).unwrap_or(usize::MAX);
        Ok(items
            .into_iter()
            .skip(offset)
            .take(request.size as usize)
            .collect())
    }

    async fn find_by_id(&self, id: i64) -> RepositoryResult<Option<Product>> {
        Ok(self.store.read().await.rows.get(&id).cloned())
    }

    async fn save(&self, payload: ProductPayload) -> RepositoryResult<Product> {
        let mut store = self.store.write().await;
        let id = match payload.id {
            Some(id) => id,
            None => match store.next_id {
                // 新建绝不覆盖已有记录
                Some(candidate) if !store.rows.contains_key(&candidate) => candidate,
                _ => return Err(RepositoryError::DataAccess(IDS_AGOTADOS.to_string())),
            },
        };
        if let Some(next) = store.next_id {
            store.next_id = id.checked_add(1).map(|after| next.max(after));
        }

        let product = Product {
            id,
            nombre: payload.nombre,
            descripcion: payload.descripcion,
            precio: payload.precio,
            stock: payload.stock,
        };
        store.rows.insert(id, product.clone());
        Ok(product)
    }

    async fn delete_by_id(&self, id: i64) -> RepositoryResult<()> {
        self.store.write().await.rows.remove(&id);
        Ok(())
    }

    async fn ping(&self) -> RepositoryResult<()> {
        Ok(())
    }
}
