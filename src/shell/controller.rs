use std::io::{BufRead, Write};
use tracing::{debug, info, warn};
use crate::books::domain::Book;
use crate::catalog::command::browse_genre_cmd::{BrowseGenreCommand, BrowseGenreCommandRequest};
use crate::checkout::command::checkout_book_cmd::{CheckoutBookCommand, CheckoutBookCommandRequest};
use crate::checkout::command::return_book_cmd::{ReturnBookCommand, ReturnBookCommandRequest};
use crate::checkout::domain::CheckoutService;
use crate::checkout::factory::create_checkout_service;
use crate::core::command::{Command, CommandError};
use crate::core::domain::Configuration;
use crate::core::library::{LibraryError, LibraryResult, PatronTier};
use crate::shell::menu::{MENU, MenuOption};

// Step tells the menu loop whether to keep reading commands
#[derive(Debug, PartialEq)]
enum Step {
    Continue,
    Exit,
}

// Shell drives one console session over any line-oriented input and output.
pub struct Shell<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
        }
    }

    pub fn run(&mut self, config: &Configuration) -> LibraryResult<()> {
        let Some(answer) = self.prompt("Are you a premium user? (yes/no): ")? else {
            debug!("input closed before the session started");
            return Ok(());
        };
        let tier = PatronTier::from_answer(answer.as_str());
        let mut service = create_checkout_service(config, tier);
        info!(branch = %config.branch_id, patron = %config.patron_name, tier = %tier, "session started");

        loop {
            let Some(option) = self.prompt(MENU)? else {
                debug!("input closed, ending session");
                break;
            };
            let step = match MenuOption::from(option.as_str()) {
                MenuOption::ViewAvailable => self.view_available(&*service)?,
                MenuOption::Checkout => self.checkout(&mut *service)?,
                MenuOption::Return => self.return_book(&mut *service)?,
                MenuOption::Exit => {
                    writeln!(self.output, "Thanks for visiting the library.")?;
                    Step::Exit
                }
                MenuOption::Invalid => {
                    debug!(option = %option, "invalid menu option");
                    writeln!(self.output, "Invalid option.")?;
                    Step::Continue
                }
            };
            if step == Step::Exit {
                break;
            }
        }
        self.output.flush()?;
        info!("session ended");
        Ok(())
    }

    fn view_available(&mut self, service: &dyn CheckoutService) -> LibraryResult<Step> {
        let Some(genre) = self.prompt("Enter genre to browse: ")? else {
            return Ok(Step::Exit);
        };
        let res = BrowseGenreCommand::new(service).execute(BrowseGenreCommandRequest::new(genre.as_str()));
        match res {
            Ok(res) => {
                writeln!(self.output, "Available books in genre '{}':", res.genre)?;
                for book in res.books.iter() {
                    writeln!(self.output, " - {}", book.describe())?;
                }
                if res.books.is_empty() {
                    writeln!(self.output, "No available books in this genre.")?;
                }
            }
            Err(err) => self.report(err)?,
        }
        Ok(Step::Continue)
    }

    fn checkout(&mut self, service: &mut dyn CheckoutService) -> LibraryResult<Step> {
        let Some(title) = self.prompt("Enter book title to checkout: ")? else {
            return Ok(Step::Exit);
        };
        match CheckoutBookCommand::new(service).execute(CheckoutBookCommandRequest::new(title.as_str())) {
            Ok(res) => writeln!(self.output, "Successfully checked out: {}", res.book.describe())?,
            Err(err) => self.report(err)?,
        }
        Ok(Step::Continue)
    }

    fn return_book(&mut self, service: &mut dyn CheckoutService) -> LibraryResult<Step> {
        let Some(title) = self.prompt("Enter book title to return: ")? else {
            return Ok(Step::Exit);
        };
        match ReturnBookCommand::new(service).execute(ReturnBookCommandRequest::new(title.as_str())) {
            Ok(res) => writeln!(self.output, "Returned: {}", res.book.describe())?,
            Err(err) => self.report(err)?,
        }
        Ok(Step::Continue)
    }

    // user-facing errors are printed, anything else ends the session
    fn report(&mut self, err: CommandError) -> LibraryResult<()> {
        if err.recoverable() {
            writeln!(self.output, "{}", err)?;
            Ok(())
        } else {
            warn!(error = %err, "command failed");
            Err(LibraryError::from(err))
        }
    }

    // None once the input is exhausted
    fn prompt(&mut self, text: &str) -> LibraryResult<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}
