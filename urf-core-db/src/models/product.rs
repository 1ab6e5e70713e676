use heapless::String as HeaplessString;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::{DbError, DbResult};
use crate::models::identifiable::Identifiable;
use crate::models::versioned::Versioned;
use crate::utils::hash_as_i64;

/// Maximum length of a product name, mirrored by the `product.product_name` column
pub const PRODUCT_NAME_MAX_LEN: usize = 100;

/// Represents a product in the database.
///
/// Wire format: `id`, `productName`, `unitPrice`, `hash`.
/// `name` is accepted as an alias for `productName` on input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductModel {
    /// Store-generated key (0 until the product has been inserted)
    #[serde(default)]
    pub id: i32,

    #[serde(rename = "productName", alias = "name")]
    pub name: HeaplessString<PRODUCT_NAME_MAX_LEN>,

    #[serde(rename = "unitPrice", with = "rust_decimal::serde::arbitrary_precision")]
    pub unit_price: Decimal,

    /// Hash of the entity with hash field set to 0
    /// - 0: for new entities not yet created, or an update without a token
    /// - Non-zero: the token the row carried when it was read
    #[serde(default)]
    pub hash: i64,
}

impl ProductModel {
    /// Builds an unsaved product, failing if the name exceeds the column width
    pub fn new(name: &str, unit_price: Decimal) -> DbResult<Self> {
        let name = HeaplessString::from_str(name).map_err(|_| {
            DbError::Validation(format!(
                "Value for 'productName' is too long (max {PRODUCT_NAME_MAX_LEN} chars)"
            ))
        })?;
        Ok(Self {
            id: 0,
            name,
            unit_price,
            hash: 0,
        })
    }

    /// Builds a product with an explicit id and a computed token
    pub fn with_id(id: i32, name: &str, unit_price: Decimal) -> DbResult<Self> {
        let mut product = Self::new(name, unit_price)?;
        product.id = id;
        product.rehash()?;
        Ok(product)
    }
}

impl Identifiable for ProductModel {
    type Id = i32;

    const ENTITY_NAME: &'static str = "Product";

    fn get_id(&self) -> i32 {
        self.id
    }

    fn set_id(&mut self, id: i32) {
        self.id = id;
    }
}

/// Fields covered by the concurrency token
#[derive(Serialize)]
struct ProductHashView<'a> {
    id: i32,
    name: &'a str,
    unit_price: Decimal,
}

impl Versioned for ProductModel {
    fn get_hash(&self) -> i64 {
        self.hash
    }

    fn set_hash(&mut self, hash: i64) {
        self.hash = hash;
    }

    /// Hashes the exact decimal, normalized so `1.50` and `1.5` share a token
    fn compute_hash(&self) -> DbResult<i64> {
        hash_as_i64(&ProductHashView {
            id: self.id,
            name: self.name.as_str(),
            unit_price: self.unit_price.normalize(),
        })
    }
}
