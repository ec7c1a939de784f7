mod pairing;
mod room_table;

pub use pairing::*;
pub use room_table::*;
