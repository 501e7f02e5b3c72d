use crate::core::library::BookStatus;

pub mod model;

// Book is the read side shared by catalog entries and the snapshots handed to the console.
pub trait Book {
    fn title(&self) -> &str;
    fn author(&self) -> &str;
    fn genre(&self) -> &str;
    fn status(&self) -> BookStatus;

    fn is_available(&self) -> bool {
        self.status() == BookStatus::Available
    }

    /// Renders `"<title>" by <author> (<genre>) [Available|Checked Out]`.
    fn describe(&self) -> String {
        format!("\"{}\" by {} ({}) [{}]", self.title(), self.author(), self.genre(), self.status())
    }
}
