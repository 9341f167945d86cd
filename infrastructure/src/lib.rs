pub mod discord;
pub mod storage;
