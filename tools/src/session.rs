//! Interactive parameter collection — the prompt-per-field session.
//!
//! Each field is read as one line, parsed, and validated immediately;
//! the first failure aborts the session before the next prompt is
//! shown. A line that does not parse (or EOF) fails its field's
//! validation.
//!
//! Reads from any `BufRead` and writes prompts to any `Write`, so the
//! tests below drive the session with in-memory buffers.

use anyhow::Result;
use sir_core::{
    error::{SimError, ValidationError},
    params::{self, SimParameters, MAX_CYCLES, MAX_POPULATION, MIN_POPULATION},
};
use std::io::{BufRead, Write};
use std::str::FromStr;

/// Run the six-prompt session and build the validated parameter set.
pub fn collect_parameters(
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> Result<SimParameters> {
    let cycles = read_field::<i64>(
        input,
        output,
        &format!("Enter the number of cycles to run (1-{MAX_CYCLES}): "),
        ValidationError::CycleLimit,
    )?;
    params::validate_cycle_limit(cycles)?;

    let population = read_field::<i64>(
        input,
        output,
        &format!("Enter the size of the population ({MIN_POPULATION}-{MAX_POPULATION}): "),
        ValidationError::PopulationSize,
    )?;
    let population_size = params::validate_population_size(population)?;

    let infected = read_field::<i64>(
        input,
        output,
        "Enter the initial number of infected individuals: ",
        ValidationError::InitialInfected,
    )?;
    let initial_infected = params::validate_initial_infected(infected, population_size)?;

    let recovered = read_field::<i64>(
        input,
        output,
        "Enter the initial number of recovered individuals: ",
        ValidationError::InitialRecovered,
    )?;
    params::validate_initial_recovered(recovered, population_size, initial_infected)?;

    let infection_rate = read_field::<f64>(
        input,
        output,
        "Enter the infection rate (0.00-1.00): ",
        ValidationError::InfectionRate,
    )?;
    params::validate_infection_rate(infection_rate)?;

    let recovery_rate = read_field::<f64>(
        input,
        output,
        "Enter the recovery rate (0.00-1.00): ",
        ValidationError::RecoveryRate,
    )?;
    params::validate_recovery_rate(recovery_rate)?;

    let built = SimParameters::new(
        cycles,
        population,
        infected,
        recovered,
        infection_rate,
        recovery_rate,
    )?;
    Ok(built)
}

/// Prompt, read one line, parse. EOF or an unparseable line yields the
/// field's validation error.
fn read_field<T: FromStr>(
    input: &mut impl BufRead,
    output: &mut impl Write,
    prompt: &str,
    invalid: ValidationError,
) -> Result<T> {
    write!(output, "{prompt}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(anyhow::Error::new(SimError::from(invalid)));
    }
    line.trim()
        .parse()
        .map_err(|_| anyhow::Error::new(SimError::from(invalid)))
}
