use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::checkout::domain::CheckoutService;
use crate::core::command::{Command, CommandError};

pub struct CheckoutBookCommand<'a> {
    checkout_service: &'a mut dyn CheckoutService,
}

impl<'a> CheckoutBookCommand<'a> {
    pub fn new(checkout_service: &'a mut dyn CheckoutService) -> Self {
        Self {
            checkout_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CheckoutBookCommandRequest {
    title: String,
}

impl CheckoutBookCommandRequest {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CheckoutBookCommandResponse {
    pub book: BookDto,
}

impl CheckoutBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

impl<'a> Command<CheckoutBookCommandRequest, CheckoutBookCommandResponse> for CheckoutBookCommand<'a> {
    fn execute(&mut self, req: CheckoutBookCommandRequest) -> Result<CheckoutBookCommandResponse, CommandError> {
        self.checkout_service.checkout(req.title.as_str())
            .map_err(CommandError::from).map(CheckoutBookCommandResponse::new)
    }
}
