use clap::Args;
use serde_json::Value;
use std::io::{self, BufRead, Write};

use search_loss_core::config::CalculatorConfig;
use search_loss_core::estimator::Field;
use search_loss_core::presentation::RenderedView;
use search_loss_core::session::{Session, SessionEvent};

use crate::input;
use crate::output;
use crate::OutputFormat;

/// Arguments for an interactive session
#[derive(Args)]
pub struct SessionArgs {
    /// Print the view only for `show` and at the end, not after every event
    #[arg(long)]
    pub quiet: bool,
}

/// A parsed stdin line.
#[derive(Debug, PartialEq)]
enum Command {
    Event(SessionEvent),
    Show,
    Quit,
}

const HELP: &str = "commands: set <field> <text> | slide <field> <number> | \
                    period [monthly|annual] | locale [domestic|international] | show | quit";

pub fn run_session(
    args: SessionArgs,
    config: CalculatorConfig,
    format: OutputFormat,
) -> Result<Value, Box<dyn std::error::Error>> {
    let mut session = Session::new(config);
    let interactive = input::stdin::is_interactive();

    if interactive {
        eprintln!("{HELP}");
    }

    let stdin = io::stdin();
    drive(&mut session, stdin.lock(), args.quiet, interactive, |view| {
        output::format_output(&format, &serde_json::to_value(view)?);
        io::stdout().flush()?;
        Ok(())
    })?;
    Ok(Value::Null)
}

/// Feed every line of `reader` to the session, handing each view that
/// should be printed to `emit`.
fn drive<R: BufRead>(
    session: &mut Session,
    reader: R,
    quiet: bool,
    interactive: bool,
    mut emit: impl FnMut(&RenderedView) -> Result<(), Box<dyn std::error::Error>>,
) -> Result<(), Box<dyn std::error::Error>> {
    if !quiet {
        emit(&session.render())?;
    }

    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        match parse_line(trimmed) {
            Ok(Command::Event(event)) => {
                let view = session.apply(event);
                if !quiet {
                    emit(&view)?;
                }
            }
            Ok(Command::Show) => emit(&session.render())?,
            Ok(Command::Quit) => break,
            Err(e) if interactive => eprintln!("{e}\n{HELP}"),
            Err(e) => return Err(e),
        }
    }

    if quiet {
        emit(&session.render())?;
    }
    Ok(())
}

fn parse_line(line: &str) -> Result<Command, Box<dyn std::error::Error>> {
    let mut parts = line.splitn(3, char::is_whitespace);
    let verb = parts.next().unwrap_or_default().to_ascii_lowercase();
    let first = parts.next().map(str::trim);
    let rest = parts.next().map(str::trim);

    let command = match verb.as_str() {
        "set" | "edit" => {
            let field: Field = first.ok_or("set: missing field")?.parse()?;
            Command::Event(SessionEvent::Edit {
                field,
                raw: rest.unwrap_or_default().to_string(),
            })
        }
        "slide" => {
            let field: Field = first.ok_or("slide: missing field")?.parse()?;
            let value: f64 = rest.ok_or("slide: missing value")?.parse()?;
            Command::Event(SessionEvent::Slide { field, value })
        }
        "period" => match first {
            Some(p) => Command::Event(SessionEvent::SetPeriod { period: p.parse()? }),
            None => Command::Event(SessionEvent::TogglePeriod),
        },
        "locale" => match first {
            Some(l) => Command::Event(SessionEvent::SetLocale { locale: l.parse()? }),
            None => Command::Event(SessionEvent::ToggleLocale),
        },
        "show" => Command::Show,
        "quit" | "exit" => Command::Quit,
        other => return Err(format!("unknown command '{other}'").into()),
    };
    Ok(command)
}
