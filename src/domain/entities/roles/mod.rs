pub mod role_record;

pub use role_record::*;
