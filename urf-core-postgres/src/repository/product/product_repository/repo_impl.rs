use crate::unit_of_work::Executor;
use crate::utils::{get_heapless_string, TryFromRow};
use sqlx::{postgres::PgRow, Row};
use urf_core_db::{DbResult, ProductModel};

pub struct ProductRepositoryImpl {
    pub executor: Executor,
}

impl ProductRepositoryImpl {
    pub fn new(executor: Executor) -> Self {
        Self { executor }
    }
}

impl TryFromRow<PgRow> for ProductModel {
    fn try_from_row(row: &PgRow) -> DbResult<Self> {
        Ok(ProductModel {
            id: row.try_get("id")?,
            name: get_heapless_string(row, "product_name")?,
            unit_price: row.try_get("unit_price")?,
            hash: row.try_get("hash")?,
        })
    }
}
