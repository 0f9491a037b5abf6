pub mod inverted;
pub mod record_index;
