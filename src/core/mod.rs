pub mod clock;
pub mod roster;

pub use roster::Roster;
