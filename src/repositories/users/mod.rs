//! 사용자 컬렉션(`users`)에 대한 MongoDB 리포지토리

pub mod user_repo;

pub use user_repo::UserRepository;
