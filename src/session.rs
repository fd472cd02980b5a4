//! Interactive query loop.
//!
//! Prompts for a city, confirms the closest known name, prints the ranked
//! tours, and asks whether to run another query. End of input stops the
//! loop at any prompt.

use std::io::{BufRead, Write};

use log::warn;

use crate::config::TripConfig;
use crate::distance::DistanceTable;
use crate::error::{Error, Result};
use crate::planner::plan;
use crate::population::PopulationTable;
use crate::report::{write_report, ReportOptions};
use crate::resolve::CityResolver;

/// Loaded data and settings shared by every query.
pub struct Session<'a> {
    pub distances: &'a DistanceTable,
    pub populations: &'a PopulationTable,
    pub resolver: &'a CityResolver,
    pub config: TripConfig,
    pub options: ReportOptions,
}

impl Session<'_> {
    /// Plans and reports tours for a single, already resolved city.
    pub fn query<W: Write>(&self, city: &str, output: &mut W) -> Result<()> {
        let ranked = plan(city, self.distances, self.populations, &self.config)?;
        write_report(output, &ranked, self.distances, &self.config, &self.options)
    }

    /// Runs the prompt loop until the user declines another query or input
    /// ends.
    ///
    /// A city missing from one of the tables (the start, or a tour city
    /// without a population) is reported by name and table, and the loop
    /// continues.
    pub fn run<R: BufRead, W: Write>(&self, input: &mut R, output: &mut W) -> Result<()> {
        loop {
            let Some(city) = self.prompt_city(input, output)? else {
                return Ok(());
            };

            match self.query(&city, output) {
                Ok(()) => {}
                Err(Error::UnknownCity(c)) => {
                    warn!("cannot plan from '{city}': '{c}' is missing from a table");
                    let missing = if self.distances.contains(&c) {
                        "population"
                    } else {
                        "distance"
                    };
                    writeln!(output, "No {missing} data for '{c}'.")?;
                }
                Err(e) => return Err(e),
            }

            match ask(input, output, "Another query? (yes/no): ")? {
                Some(answer) if answer != "no" => continue,
                _ => return Ok(()),
            }
        }
    }

    fn prompt_city<R: BufRead, W: Write>(&self, input: &mut R, output: &mut W) -> Result<Option<String>> {
        loop {
            let Some(typed) = ask(input, output, "Enter city name: ")? else {
                return Ok(None);
            };
            let Some(candidate) = self.resolver.best_match(&typed) else {
                writeln!(output, "No city resembles '{typed}'.")?;
                continue;
            };
            let question = format!("Did you mean {}? (yes/no): ", candidate.city);
            match ask(input, output, &question)? {
                Some(answer) if answer == "yes" => return Ok(Some(candidate.city)),
                Some(_) => continue,
                None => return Ok(None),
            }
        }
    }
}

fn ask<R: BufRead, W: Write>(input: &mut R, output: &mut W, prompt: &str) -> Result<Option<String>> {
    write!(output, "{prompt}")?;
    output.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
