pub mod commit;
pub mod document;
