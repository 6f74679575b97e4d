use crate::catalog::CatalogConnection;
use crate::error::SchemaError;
use crate::session::Session;
use crate::struct_generator::make;
use std::io::{BufRead, Write};
use tracing::debug;

const QUIT: &str = "quit";
const USE: &str = "use";

/// `mysql <user>@<host>:<database>>`, with `(none)` when no database is selected.
pub fn prompt(username: &str, host: &str, database: Option<&str>) -> String {
    format!("mysql {}@{}:{}>", username, host, database.unwrap_or("(none)"))
}

#[derive(Debug, PartialEq, Eq)]
pub enum Command<'a> {
    Empty,
    Quit,
    Use(&'a str),
    Generate(Vec<&'a str>),
}

impl<'a> Command<'a> {
    pub fn parse(line: &'a str) -> Self {
        if line.trim().is_empty() {
            return Command::Empty;
        }
        if line == QUIT {
            return Command::Quit;
        }

        let words: Vec<&str> = line.split(' ').collect();
        if words[0] == USE {
            // the last word names the database, as in `use  shop`
            return Command::Use(words[words.len() - 1]);
        }

        Command::Generate(line.split(',').collect())
    }
}

/// Reads commands from `input` until `quit` or end of input, writing prompts and results to
/// `output`.
pub async fn run<C, R, W>(
    session: &mut Session<C>,
    username: &str,
    host: &str,
    input: R,
    mut output: W,
) -> Result<(), SchemaError>
where
    C: CatalogConnection,
    R: BufRead,
    W: Write,
{
    write!(output, "{}", prompt(username, host, session.database()))?;
    output.flush()?;

    for line in input.lines() {
        let line = line?;
        let line = line.trim_end_matches('\r');

        match Command::parse(line) {
            Command::Empty => {}
            Command::Quit => break,
            Command::Use(database) => {
                if session.use_database(database).await.is_err() {
                    writeln!(output, "(1049, \"Unknown database '{}'\")", database)?;
                }
            }
            Command::Generate(tables) => {
                if session.database().is_none() {
                    writeln!(output, "(1046, 'No database selected')")?;
                } else {
                    debug!(?tables, "generating structs");
                    writeln!(output, "{}", make(session, &tables).await)?;
                }
            }
        }

        write!(output, "{}", prompt(username, host, session.database()))?;
        output.flush()?;
    }

    Ok(())
}
