pub mod signal;

pub use signal::{FieldValue, SIGNAL_ID, SignalRecord};
