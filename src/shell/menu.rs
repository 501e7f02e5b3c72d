pub const MENU: &str = "\nMenu:\n1. View available books\n2. Checkout a book\n3. Return a book\n4. Exit\nChoose an option: ";

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum MenuOption {
    ViewAvailable,
    Checkout,
    Return,
    Exit,
    Invalid,
}

impl From<&str> for MenuOption {
    fn from(s: &str) -> Self {
        match s.trim() {
            "1" => MenuOption::ViewAvailable,
            "2" => MenuOption::Checkout,
            "3" => MenuOption::Return,
            "4" => MenuOption::Exit,
            _ => MenuOption::Invalid,
        }
    }
}
