use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// 发票明细表 (line_items)
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct LineItem {
    pub id: i32,
    pub invoice_id: i32,         // 关联发票ID
    pub description: String,
    pub quantity: i32,
    pub unit_price: BigDecimal,
    pub amount: BigDecimal,      // 不校验 quantity * unit_price
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// 新建明细
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewLineItem {
    pub description: String,
    pub quantity: i32,
    pub unit_price: BigDecimal,
    pub amount: BigDecimal,
}
