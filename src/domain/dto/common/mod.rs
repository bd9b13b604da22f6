//! 리소스 공통 DTO

pub mod pagination;

pub use pagination::{Page, PageMeta, PageQuery, PageRequest};
