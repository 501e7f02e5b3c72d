use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::checkout::domain::CheckoutService;
use crate::core::command::{Command, CommandError};

pub struct ReturnBookCommand<'a> {
    checkout_service: &'a mut dyn CheckoutService,
}

impl<'a> ReturnBookCommand<'a> {
    pub fn new(checkout_service: &'a mut dyn CheckoutService) -> Self {
        Self {
            checkout_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ReturnBookCommandRequest {
    title: String,
}

impl ReturnBookCommandRequest {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ReturnBookCommandResponse {
    pub book: BookDto,
}

impl ReturnBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

impl<'a> Command<ReturnBookCommandRequest, ReturnBookCommandResponse> for ReturnBookCommand<'a> {
    fn execute(&mut self, req: ReturnBookCommandRequest) -> Result<ReturnBookCommandResponse, CommandError> {
        self.checkout_service.returned(req.title.as_str())
            .map_err(CommandError::from).map(ReturnBookCommandResponse::new)
    }
}
