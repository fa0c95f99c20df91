//! Interactive shell: one seeded lexicon, many commands.

use crate::{
    cli::{ShellCommand, ShellLine},
    commands,
    error::CliError,
};
use clap::{CommandFactory, Parser};
use rustyline::{DefaultEditor, error::ReadlineError};
use sarf::core::lexicon::Lexicon;
use std::io::{self, Write};

const PROMPT: &str = "sarf> ";

///
/// Flow
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Flow {
    Continue,
    Quit,
}

pub(crate) fn run(lexicon: &mut Lexicon) -> Result<(), CliError> {
    let mut editor = DefaultEditor::new()?;
    let mut out = io::stdout();

    writeln!(out, "sarf {} shell; type `help` for commands", sarf::VERSION)?;

    loop {
        let line = match editor.readline(PROMPT) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(err) => return Err(err.into()),
        };

        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        editor.add_history_entry(line)?;

        if step(line, lexicon, &mut out)? == Flow::Quit {
            break;
        }
    }

    Ok(())
}

/// Run one input line. Parse and lexicon errors are printed and the shell
/// continues; output failures end it.
pub(crate) fn step(
    line: &str,
    lexicon: &mut Lexicon,
    out: &mut impl Write,
) -> Result<Flow, CliError> {
    let tokens = match split_line(line) {
        Ok(tokens) => tokens,
        Err(msg) => {
            writeln!(out, "error: {msg}")?;
            return Ok(Flow::Continue);
        }
    };

    let command = match ShellLine::try_parse_from(tokens) {
        Ok(parsed) => parsed.command,
        Err(err) => {
            write!(out, "{}", err.render())?;
            return Ok(Flow::Continue);
        }
    };

    match command {
        ShellCommand::Quit => return Ok(Flow::Quit),
        ShellCommand::Help => write!(out, "{}", ShellLine::command().render_help())?,
        command => match commands::apply(command, lexicon, out) {
            Ok(()) => {}
            Err(err) if err.is_recoverable() => writeln!(out, "error: {err}")?,
            Err(err) => return Err(err),
        },
    }

    Ok(Flow::Continue)
}

/// Whitespace-separated words; single or double quotes group words that
/// contain spaces, such as most scheme names.
pub(crate) fn split_line(line: &str) -> Result<Vec<String>, String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut quote = None;

    for c in line.chars() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => current.push(c),
            None if c == '"' || c == '\'' => {
                quote = Some(c);
                in_token = true;
            }
            None if c.is_whitespace() => {
                if in_token {
                    tokens.push(std::mem::take(&mut current));
                    in_token = false;
                }
            }
            None => {
                current.push(c);
                in_token = true;
            }
        }
    }

    if let Some(q) = quote {
        return Err(format!("unclosed {q} quote"));
    }
    if in_token {
        tokens.push(current);
    }

    Ok(tokens)
}

///
/// TESTS
///
