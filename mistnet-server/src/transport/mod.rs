mod ws_sink;

pub use ws_sink::{OUTBOUND_QUEUE_CAPACITY, WsSink};
