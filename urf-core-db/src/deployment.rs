use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

use crate::error::DbResult;
use crate::models::product::ProductModel;

/// The two deployables sharing one contract. They differ only in naming,
/// connection configuration and seed data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Deployment {
    Demo,
    #[default]
    Sample,
}

impl Deployment {
    /// Name of the session context, used in logs and as the default database name
    pub fn context_name(&self) -> &'static str {
        match self {
            Deployment::Demo => "UrfDemoContext",
            Deployment::Sample => "UrfSampleContext",
        }
    }

    /// Rows written once, when the schema is created
    pub fn seed_products(&self) -> DbResult<Vec<ProductModel>> {
        match self {
            Deployment::Demo => Ok(Vec::new()),
            Deployment::Sample => Ok(vec![
                ProductModel::with_id(1, "Chai", Decimal::from(1))?,
                ProductModel::with_id(2, "Chang", Decimal::from(2))?,
                ProductModel::with_id(3, "Cappuccino", Decimal::from(3))?,
            ]),
        }
    }
}

impl fmt::Display for Deployment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Deployment::Demo => write!(f, "demo"),
            Deployment::Sample => write!(f, "sample"),
        }
    }
}

impl FromStr for Deployment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "demo" => Ok(Deployment::Demo),
            "sample" => Ok(Deployment::Sample),
            other => Err(format!("Unknown deployment '{other}' (expected 'demo' or 'sample')")),
        }
    }
}
