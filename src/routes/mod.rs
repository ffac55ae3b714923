pub mod docs;
pub mod ping;
