pub mod data_table;
pub mod form_field;
pub mod generic_dialog;
pub mod page_header;
pub mod pagination_controls;
