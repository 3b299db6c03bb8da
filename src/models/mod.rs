pub mod init_result;
pub mod invoice;
pub mod line_item;

pub use init_result::{InitOutcome, InitResult, SchemaError};
pub use invoice::{Invoice, NewInvoice};
pub use line_item::{LineItem, NewLineItem};
