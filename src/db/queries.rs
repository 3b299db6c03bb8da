use crate::models::{Invoice, LineItem, NewInvoice, NewLineItem};
use sqlx::PgPool;

/// 插入发票, 返回新ID
pub async fn insert_invoice(
    pool: &PgPool,
    invoice: &NewInvoice,
) -> Result<i32, sqlx::Error> {
    sqlx::query_scalar::<_, i32>(
        r#"
        INSERT INTO invoices (
            invoice_number, invoice_date, due_date,
            company_name, company_address, company_email, company_phone,
            client_name, client_address, client_email,
            notes, total_amount, status
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, COALESCE($13, 'draft'))
        RETURNING id
        "#
    )
    .bind(&invoice.invoice_number)
    .bind(invoice.invoice_date)
    .bind(invoice.due_date)
    .bind(&invoice.company_name)
    .bind(&invoice.company_address)
    .bind(&invoice.company_email)
    .bind(&invoice.company_phone)
    .bind(&invoice.client_name)
    .bind(&invoice.client_address)
    .bind(&invoice.client_email)
    .bind(&invoice.notes)
    .bind(&invoice.total_amount)
    .bind(&invoice.status)
    .fetch_one(pool)
    .await
}

/// 查询发票
pub async fn get_invoice(
    pool: &PgPool,
    invoice_id: i32,
) -> Result<Option<Invoice>, sqlx::Error> {
    sqlx::query_as::<_, Invoice>(
        r#"
        SELECT id, invoice_number, invoice_date, due_date,
               company_name, company_address, company_email, company_phone,
               client_name, client_address, client_email,
               notes, total_amount, status, created_at, updated_at
        FROM invoices
        WHERE id = $1
        "#
    )
    .bind(invoice_id)
    .fetch_optional(pool)
    .await
}

/// 插入明细, 返回新ID
pub async fn insert_line_item(
    pool: &PgPool,
    invoice_id: i32,
    item: &NewLineItem,
) -> Result<i32, sqlx::Error> {
    sqlx::query_scalar::<_, i32>(
        r#"
        INSERT INTO line_items (invoice_id, description, quantity, unit_price, amount)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id
        "#
    )
    .bind(invoice_id)
    .bind(&item.description)
    .bind(item.quantity)
    .bind(&item.unit_price)
    .bind(&item.amount)
    .fetch_one(pool)
    .await
}

/// 查询发票下的全部明细 (按ID升序)
pub async fn list_line_items(
    pool: &PgPool,
    invoice_id: i32,
) -> Result<Vec<LineItem>, sqlx::Error> {
    sqlx::query_as::<_, LineItem>(
        r#"
        SELECT id, invoice_id, description, quantity, unit_price, amount, created_at, updated_at
        FROM line_items
        WHERE invoice_id = $1
        ORDER BY id
        "#
    )
    .bind(invoice_id)
    .fetch_all(pool)
    .await
}

/// 删除发票, 明细由外键级联删除
pub async fn delete_invoice(
    pool: &PgPool,
    invoice_id: i32,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM invoices WHERE id = $1")
        .bind(invoice_id)
        .execute(pool)
        .await?;

    tracing::info!("Deleted invoice {}, {} row(s) affected", invoice_id, result.rows_affected());
    Ok(result.rows_affected())
}
