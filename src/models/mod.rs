pub mod employee;
pub mod session;

pub use employee::Employee;
pub use session::{Session, SessionEntry};

/// Capability shared by anything that can appear as a row in one of the
/// selectable lists (employees, session history). Two unrelated types
/// implement it; rendering only ever sees these three strings.
pub trait ListEntry {
    fn title(&self) -> String;
    fn description(&self) -> String;
    fn filter_value(&self) -> String {
        self.title()
    }
}
