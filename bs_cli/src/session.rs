//! Interactive menu loop.

use crate::{
    console::{Console, Tone},
    menu::{self, MenuChoice, ParseError},
};
use anyhow::{Context, Result};
use bracket_schema::TournamentProcessor;
use std::io::{BufRead, Write};

const TITLE: &str = "Schema loader";

/// One interactive run over an input and output stream
pub struct Session<R, W, C> {
    processor: TournamentProcessor,
    input: R,
    output: W,
    console: C,
    json: bool,
}

impl<R: BufRead, W: Write, C: Console> Session<R, W, C> {
    pub fn new(processor: TournamentProcessor, input: R, output: W, console: C) -> Self {
        Self {
            processor,
            input,
            output,
            console,
            json: false,
        }
    }

    /// Print reports as JSON instead of text
    pub fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    /// Consume the session, handing back the output stream
    pub fn into_output(self) -> W {
        self.output
    }

    /// Show the menu until the user exits or input ends
    pub fn run(&mut self) -> Result<()> {
        self.console.set_title(TITLE)?;
        self.console.clear()?;

        loop {
            self.console.set_tone(Tone::Heading)?;
            writeln!(self.output, "{}", menu::MENU)?;
            self.console.set_tone(Tone::Normal)?;

            let Some(line) = self.read_line()? else {
                break;
            };

            match menu::parse_choice(&line) {
                Ok(MenuChoice::SelectSchema) => {
                    self.console.clear()?;
                    self.select_schema()?;
                    self.pause()?;
                }
                Ok(MenuChoice::Advance) => {
                    self.console.clear()?;
                    self.advance()?;
                    self.pause()?;
                }
                Ok(MenuChoice::Exit) => {
                    self.console.clear()?;
                    self.console.set_tone(Tone::Warning)?;
                    writeln!(self.output, "Exiting...")?;
                    break;
                }
                Err(e) => self.show_error(&e)?,
            }
        }

        self.console.reset()?;
        Ok(())
    }

    fn select_schema(&mut self) -> Result<()> {
        let Some((total_players, group_size)) = self.ask_layout()? else {
            return Ok(());
        };
        self.console.clear()?;

        match self.processor.process_tournament(total_players, group_size) {
            Ok(report) => {
                self.console.set_tone(Tone::Report)?;
                if self.json {
                    let json = serde_json::to_string_pretty(&report)
                        .context("Failed to serialize report")?;
                    writeln!(self.output, "{json}")?;
                } else {
                    write!(self.output, "{report}")?;
                }
            }
            Err(e) => self.show_error(&e)?,
        }
        Ok(())
    }

    fn advance(&mut self) -> Result<()> {
        let Some((total_players, group_size)) = self.ask_layout()? else {
            return Ok(());
        };
        let Some(round) = self.ask("Round number: ", menu::parse_count)? else {
            return Ok(());
        };
        let Some(ranking) = self.ask(
            "Final standing, best first (comma separated): ",
            menu::parse_ranking,
        )?
        else {
            return Ok(());
        };

        match self
            .processor
            .advance(total_players, group_size, round, &ranking)
        {
            Ok(advancement) => {
                self.console.set_tone(Tone::Success)?;
                if self.json {
                    let json = serde_json::to_string_pretty(&advancement)
                        .context("Failed to serialize advancement")?;
                    writeln!(self.output, "{json}")?;
                } else {
                    write!(self.output, "{advancement}")?;
                }
            }
            Err(e) => self.show_error(&e)?,
        }
        Ok(())
    }

    fn ask_layout(&mut self) -> Result<Option<(u32, u32)>> {
        let Some(total_players) = self.ask("Number of players: ", menu::parse_count)? else {
            return Ok(None);
        };
        let Some(group_size) = self.ask("Group size: ", menu::parse_count)? else {
            return Ok(None);
        };
        Ok(Some((total_players, group_size)))
    }

    /// Prompt once; parse failures are shown and yield `None`
    fn ask<T>(
        &mut self,
        prompt: &str,
        parse: fn(&str) -> Result<T, ParseError>,
    ) -> Result<Option<T>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let Some(line) = self.read_line()? else {
            return Ok(None);
        };
        match parse(&line) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                self.show_error(&e)?;
                Ok(None)
            }
        }
    }

    fn pause(&mut self) -> Result<()> {
        self.console.set_tone(Tone::Normal)?;
        writeln!(self.output, "\nPress Enter to return to the menu.")?;
        self.output.flush()?;
        self.read_line()?;
        self.console.clear()?;
        Ok(())
    }

    fn show_error(&mut self, error: &dyn std::fmt::Display) -> Result<()> {
        self.console.set_tone(Tone::Error)?;
        writeln!(self.output, "\n{error}")?;
        self.console.set_tone(Tone::Normal)?;
        Ok(())
    }

    /// Read one line; `None` at end of input
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read from stdin")?;
        Ok((read > 0).then_some(line))
    }
}
