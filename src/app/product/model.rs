//! 产品数据模型

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

pub const NOMBRE_VACIO: &str = "El nombre del producto no puede estar vacío";
pub const NOMBRE_LARGO: &str = "El nombre del producto no puede superar los 100 caracteres";
pub const DESCRIPCION_LARGA: &str = "La descripción no puede superar los 255 caracteres";
pub const PRECIO_NEGATIVO: &str = "El precio no puede ser negativo";
pub const STOCK_NEGATIVO: &str = "El stock no puede ser negativo";

/// 持久化后的产品记录
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "database", derive(sqlx::FromRow))]
pub struct Product {
    pub id: i64,
    pub nombre: String,
    pub descripcion: Option<String>,
    pub precio: f64,
    pub stock: i32,
}

/// 创建/更新请求体
///
/// `id` 为 `None` 时由存储分配；缺失的字段取默认值，
/// 这样空名称会走校验而不是反序列化失败。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct ProductPayload {
    #[serde(default)]
    pub id: Option<i64>,

    #[serde(default)]
    #[validate(
        custom(function = "not_blank"),
        length(max = 100, message = "El nombre del producto no puede superar los 100 caracteres")
    )]
    pub nombre: String,

    #[serde(default)]
    #[validate(length(max = 255, message = "La descripción no puede superar los 255 caracteres"))]
    pub descripcion: Option<String>,

    #[serde(default)]
    #[validate(range(min = 0.0, message = "El precio no puede ser negativo"))]
    pub precio: f64,

    #[serde(default)]
    #[validate(range(min = 0, message = "El stock no puede ser negativo"))]
    pub stock: i32,
}

impl ProductPayload {
    /// 用路径参数覆盖请求体中的 id
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some(Cow::from(NOMBRE_VACIO));
        return Err(err);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(nombre: &str) -> ProductPayload {
        ProductPayload {
            nombre: nombre.to_string(),
            precio: 10.5,
            stock: 3,
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_payload() {
        assert!(payload("Teclado").validate().is_ok());
    }

    #[test]
    fn test_blank_name_rejected() {
        let errors = payload("   ").validate().unwrap_err();
        let field = errors.field_errors();
        let messages: Vec<_> = field
            .values()
            .flat_map(|errs| errs.iter())
            .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
            .collect();
        assert_eq!(messages, vec![NOMBRE_VACIO.to_string()]);
    }

    #[test]
    fn test_negative_values_rejected() {
        let mut p = payload("Ratón");
        p.precio = -1.0;
        p.stock = -4;
        let errors = p.validate().unwrap_err();
        assert_eq!(errors.field_errors().len(), 2);
    }

    fn messages(errors: &validator::ValidationErrors) -> Vec<String> {
        errors
            .field_errors()
            .values()
            .flat_map(|errs| errs.iter())
            .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
            .collect()
    }

    #[test]
    fn test_name_length_limit() {
        assert!(payload(&"ñ".repeat(100)).validate().is_ok());

        let errors = payload(&"ñ".repeat(101)).validate().unwrap_err();
        assert_eq!(messages(&errors), vec![NOMBRE_LARGO.to_string()]);
    }

    #[test]
    fn test_description_length_limit() {
        let mut p = payload("Cable");
        p.descripcion = Some("x".repeat(255));
        assert!(p.validate().is_ok());

        p.descripcion = Some("x".repeat(256));
        let errors = p.validate().unwrap_err();
        assert_eq!(messages(&errors), vec![DESCRIPCION_LARGA.to_string()]);
    }

    #[test]
    fn test_missing_fields_default() {
        let p: ProductPayload = serde_json::from_str(r#"{"precio": 2.0}"#).unwrap();
        assert_eq!(p.id, None);
        assert_eq!(p.nombre, "");
        assert_eq!(p.stock, 0);
        assert!(p.validate().is_err());
    }

    #[test]
    fn test_path_id_overrides_body() {
        let p = payload("Monitor").with_id(5);
        assert_eq!(p.id, Some(5));

        let mut with_body_id = payload("Monitor");
        with_body_id.id = Some(99);
        assert_eq!(with_body_id.with_id(5).id, Some(5));
    }
}
