use serde::{Deserialize, Serialize};

// Configuration abstracts config options for a console session
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub branch_id: String,
    pub patron_name: String,
}

impl Configuration {
    pub fn new(branch_id: &str) -> Self {
        Configuration {
            branch_id: branch_id.to_string(),
            patron_name: "Guest".to_string(),
        }
    }

    pub fn with_patron_name(mut self, patron_name: &str) -> Self {
        self.patron_name = patron_name.to_string();
        self
    }
}
