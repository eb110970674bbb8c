pub mod day_key;
pub mod event_record;
pub mod event_type;

pub use day_key::DayKey;
pub use event_record::EventRecord;
