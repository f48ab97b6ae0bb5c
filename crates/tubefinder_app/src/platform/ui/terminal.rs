use std::io::{self, Write};

use tubefinder_core::ButtonView;

use super::render::UiCommand;

pub const HELP_TEXT: &str = "\
Commands:
  search <query>            search for videos (also: s, /)
  quality <row> <quality>   pick 720p, 480p or 360p for a row (also: q)
  download <row>            open the download for a row (also: d)
  help                      show this help
  quit                      exit";

/// Applies display commands to a line-oriented terminal.
pub struct Terminal<W: Write> {
    out: W,
}

impl<W: Write> Terminal<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn apply(&mut self, cmds: &[UiCommand]) -> io::Result<()> {
        for cmd in cmds {
            match cmd {
                UiCommand::BeginFrame => writeln!(self.out)?,
                UiCommand::SearchBar { query, button } => {
                    writeln!(self.out, "Query: {query}  {}", button_text(button))?;
                }
                UiCommand::ResultsMessage(message) => writeln!(self.out, "  {message}")?,
                UiCommand::ResultRow {
                    number,
                    title,
                    options,
                    selected,
                    button,
                } => {
                    writeln!(self.out, "  {number:>2}. {title}")?;
                    let choices = options
                        .iter()
                        .map(|option| {
                            if option == selected {
                                format!("({option})")
                            } else {
                                option.to_string()
                            }
                        })
                        .collect::<Vec<_>>()
                        .join(" ");
                    writeln!(self.out, "      quality: {choices}  {}", button_text(button))?;
                }
                UiCommand::Alert(message) => writeln!(self.out, "!! {message}")?,
            }
        }
        self.out.flush()
    }

    pub fn hint(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.out, "-- {message}")?;
        self.out.flush()
    }

    pub fn help(&mut self) -> io::Result<()> {
        writeln!(self.out, "{HELP_TEXT}")?;
        self.out.flush()
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

fn button_text(button: &ButtonView) -> String {
    if button.enabled {
        format!("[{}]", button.label)
    } else {
        format!("<{}>", button.label)
    }
}
