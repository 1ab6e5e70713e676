use rust_decimal::Decimal;
use urf_core_db::ProductModel;

pub fn create_test_product(name: &str, unit_price: i64) -> ProductModel {
    ProductModel::new(name, Decimal::from(unit_price)).unwrap()
}
