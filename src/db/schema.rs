/// 建表所在的 schema
pub const PUBLIC_SCHEMA: &str = "public";

/// 主表名, 存在性检查只看这张表
pub const INVOICES_TABLE: &str = "invoices";

pub const LINE_ITEMS_TABLE: &str = "line_items";

pub const LINE_ITEMS_INVOICE_INDEX: &str = "idx_line_items_invoice_id";

/// 目录查询: 指定 schema 下是否存在指定表
pub const TABLE_EXISTS_QUERY: &str = r#"
    SELECT EXISTS (
        SELECT FROM information_schema.tables
        WHERE table_schema = $1
          AND table_name = $2
    )
"#;

/// 发票主表
pub const CREATE_INVOICES_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS invoices (
        id SERIAL PRIMARY KEY,
        invoice_number VARCHAR(50) NOT NULL,
        invoice_date DATE NOT NULL,
        due_date DATE NOT NULL,

        company_name VARCHAR(255) NOT NULL,
        company_address TEXT NOT NULL,
        company_email VARCHAR(255) NOT NULL,
        company_phone VARCHAR(50) NOT NULL,

        client_name VARCHAR(255) NOT NULL,
        client_address TEXT NOT NULL,
        client_email VARCHAR(255) NOT NULL,

        notes TEXT,
        total_amount DECIMAL(10, 2) NOT NULL,
        status VARCHAR(50) DEFAULT 'draft',

        created_at TIMESTAMP WITH TIME ZONE DEFAULT CURRENT_TIMESTAMP,
        updated_at TIMESTAMP WITH TIME ZONE DEFAULT CURRENT_TIMESTAMP
    )
"#;

/// 发票明细表, 删除发票时级联删除明细
pub const CREATE_LINE_ITEMS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS line_items (
        id SERIAL PRIMARY KEY,
        invoice_id INTEGER NOT NULL REFERENCES invoices(id) ON DELETE CASCADE,
        description TEXT NOT NULL,
        quantity INTEGER NOT NULL,
        unit_price DECIMAL(10, 2) NOT NULL,
        amount DECIMAL(10, 2) NOT NULL,

        created_at TIMESTAMP WITH TIME ZONE DEFAULT CURRENT_TIMESTAMP,
        updated_at TIMESTAMP WITH TIME ZONE DEFAULT CURRENT_TIMESTAMP
    )
"#;

pub const CREATE_LINE_ITEMS_INVOICE_INDEX: &str = r#"
    CREATE INDEX IF NOT EXISTS idx_line_items_invoice_id ON line_items(invoice_id)
"#;

/// 按执行顺序排列的建表步骤 (步骤名, DDL)
/// 明细表依赖主表, 索引依赖明细表, 顺序不可调换
pub const SCHEMA_STATEMENTS: [(&str, &str); 3] = [
    ("create table invoices", CREATE_INVOICES_TABLE),
    ("create table line_items", CREATE_LINE_ITEMS_TABLE),
    ("create index idx_line_items_invoice_id", CREATE_LINE_ITEMS_INVOICE_INDEX),
];
