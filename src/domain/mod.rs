// Domain layer: the record types and the ports the adapters implement.

pub mod model;
pub mod ports;

pub use model::{NewRecord, Record};
pub use ports::{ConfigProvider, RecordStore, DEFAULT_LIST_LIMIT};
