pub mod money;
pub mod time;

pub use money::format_money;
pub use time::format_timestamp;
