use bigdecimal::BigDecimal;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// 发票主表 (invoices)
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Invoice {
    pub id: i32,
    pub invoice_number: String,
    pub invoice_date: NaiveDate,
    pub due_date: NaiveDate,
    pub company_name: String,
    pub company_address: String,
    pub company_email: String,
    pub company_phone: String,
    pub client_name: String,
    pub client_address: String,
    pub client_email: String,
    pub notes: Option<String>,
    pub total_amount: BigDecimal,
    pub status: Option<String>,               // 默认 'draft'
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// 新建发票 (id 与时间戳由数据库生成)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewInvoice {
    pub invoice_number: String,
    pub invoice_date: NaiveDate,
    pub due_date: NaiveDate,
    pub company_name: String,
    pub company_address: String,
    pub company_email: String,
    pub company_phone: String,
    pub client_name: String,
    pub client_address: String,
    pub client_email: String,
    pub notes: Option<String>,
    pub total_amount: BigDecimal,
    pub status: Option<String>,               // None 时使用列默认值
}
