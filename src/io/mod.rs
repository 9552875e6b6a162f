//! Filesystem adapters: locating workbooks and moving tables in and out of
//! `.xlsx` files.

pub mod excel_read;
pub mod excel_write;
pub mod scan;
