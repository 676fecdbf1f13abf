//! Interactive coordinator interface
//!
//! Blocking and sequential: one prompt is answered before the next menu
//! selection is read. End of input behaves like `7`.

use anyhow::Result;
use application::Dispatcher;
use domain::Action;
use std::io::{BufRead, Write};

pub const BANNER: &str = "==== Rural Education Program Coordinator Interface ====";
pub const INVALID_SELECTION: &str = "Invalid selection. Please choose 1-7.";

/// One menu selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Run(Action),
    Exit,
}

impl MenuChoice {
    /// `1`..`6` select an action in menu order, `7` exits
    pub fn parse(input: &str) -> Option<Self> {
        let index = match input.trim() {
            "1" => 0,
            "2" => 1,
            "3" => 2,
            "4" => 3,
            "5" => 4,
            "6" => 5,
            "7" => return Some(MenuChoice::Exit),
            _ => return None,
        };
        Some(MenuChoice::Run(Action::ALL[index]))
    }
}

pub fn write_menu<W: Write>(output: &mut W) -> std::io::Result<()> {
    writeln!(output, "\n{}\n", BANNER)?;
    writeln!(output, "Available actions:")?;
    for (index, action) in Action::ALL.iter().enumerate() {
        writeln!(output, "{}. {} - {}", index + 1, action, action.summary())?;
    }
    writeln!(output, "7. exit - Exit the interface")
}

/// Coordinator loop over arbitrary input and output handles
pub struct Coordinator<'a, R, W> {
    dispatcher: &'a Dispatcher,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Coordinator<'a, R, W> {
    pub fn new(dispatcher: &'a Dispatcher, input: R, output: W) -> Self {
        Self {
            dispatcher,
            input,
            output,
        }
    }

    pub async fn run(mut self) -> Result<()> {
        write_menu(&mut self.output)?;

        loop {
            let Some(selection) = self.prompt("\nSelect an action (1-7): ")? else {
                break;
            };

            let action = match MenuChoice::parse(&selection) {
                Some(MenuChoice::Exit) => break,
                Some(MenuChoice::Run(action)) => action,
                None => {
                    writeln!(self.output, "{}", INVALID_SELECTION)?;
                    continue;
                }
            };

            if !self.handle(action).await? {
                break;
            }
        }

        writeln!(self.output, "Exiting coordinator interface")?;
        Ok(())
    }

    /// Collect the query details and print the answer. Returns `false` when
    /// input ran out mid-request.
    async fn handle(&mut self, action: Action) -> Result<bool> {
        let Some(query) = self.prompt("Enter your question or request: ")? else {
            return Ok(false);
        };

        let village = match self.ask_optional(
            "Do you want to specify a village? (y/n): ",
            "Enter village ID (e.g., V001): ",
        )? {
            Some(village) => village,
            None => return Ok(false),
        };

        let teacher = if action.accepts_teacher() {
            match self.ask_optional(
                "Do you want to specify a teacher? (y/n): ",
                "Enter teacher ID (e.g., T001): ",
            )? {
                Some(teacher) => teacher,
                None => return Ok(false),
            }
        } else {
            None
        };

        match self
            .dispatcher
            .request(&query, action, village.as_deref(), teacher.as_deref())
            .await
        {
            Ok(response) => {
                writeln!(self.output, "\nResponse:")?;
                writeln!(self.output, "{}", response)?;
            }
            Err(e) => writeln!(self.output, "Error: {}", e)?,
        }
        Ok(true)
    }

    /// `Some(None)` when declined, `Some(Some(id))` when given, `None` at end of input
    fn ask_optional(&mut self, question: &str, follow_up: &str) -> Result<Option<Option<String>>> {
        let Some(answer) = self.prompt(question)? else {
            return Ok(None);
        };
        if !answer.eq_ignore_ascii_case("y") {
            return Ok(Some(None));
        }
        Ok(self.prompt(follow_up)?.map(Some))
    }

    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}
