//! sim-runner: console front end for the SIR epidemic simulator.
//!
//! Usage:
//!   sim-runner
//!       interactive prompt session
//!   sim-runner --cycles 30 --population 1000 --infected 10 \
//!              --recovered 0 --infection-rate 0.30 --recovery-rate 0.10
//!       headless run, same text output
//!   sim-runner <flags...> --json
//!       one JSON line per observed cycle, then a summary line

mod session;

use anyhow::Result;
use sir_core::{
    engine::{CycleStep, RunSummary, SimEngine},
    error::{SimError, ValidationError},
    params::SimParameters,
    report::{self, CycleObservation},
    types::{Cycle, PersonCount},
};
use std::env;
use std::io::{self, Write};
use std::process;

const SIM_FLAGS: [&str; 6] = [
    "--cycles",
    "--population",
    "--infected",
    "--recovered",
    "--infection-rate",
    "--recovery-rate",
];

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let json_mode = args.iter().any(|a| a == "--json");
    let headless = json_mode || args.iter().any(|a| SIM_FLAGS.contains(&a.as_str()));

    let result = if headless {
        run_headless(&args, json_mode)
    } else {
        run_interactive()
    };

    match result {
        Ok(()) => Ok(()),
        Err(err) => match err.downcast_ref::<SimError>() {
            // Validation failures get the one-line report and exit 1.
            Some(validation) => {
                eprintln!("ERROR: {validation}");
                process::exit(1);
            }
            None => Err(err),
        },
    }
}

fn run_interactive() -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write!(out, "{}", report::banner())?;
    out.flush()?;

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let params = session::collect_parameters(&mut input, &mut out)?;

    run_text(&params, &mut out)
}

fn run_headless(args: &[String], json_mode: bool) -> Result<()> {
    let cycles = required::<i64>(args, "--cycles", ValidationError::CycleLimit)?;
    let population = required::<i64>(args, "--population", ValidationError::PopulationSize)?;
    let infected = required::<i64>(args, "--infected", ValidationError::InitialInfected)?;
    let recovered = required::<i64>(args, "--recovered", ValidationError::InitialRecovered)?;
    let infection_rate = required::<f64>(args, "--infection-rate", ValidationError::InfectionRate)?;
    let recovery_rate = required::<f64>(args, "--recovery-rate", ValidationError::RecoveryRate)?;

    let params = SimParameters::new(
        cycles,
        population,
        infected,
        recovered,
        infection_rate,
        recovery_rate,
    )?;
    log::debug!("headless run: {params:?}");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if json_mode {
        run_json(&params, &mut out)
    } else {
        write!(out, "{}", report::banner())?;
        run_text(&params, &mut out)
    }
}

/// Drive the engine, printing the text blocks: the starting conditions
/// for cycle 0, one block per later cycle, the completion line.
fn run_text(params: &SimParameters, out: &mut impl Write) -> Result<()> {
    let mut engine = SimEngine::new(params.clone());
    loop {
        match engine.step() {
            CycleStep::Advanced(obs) if obs.cycle == 0 => {
                write!(out, "{}", report::starting_conditions(engine.params(), &obs))?;
            }
            CycleStep::Advanced(obs) => write!(out, "{}", report::cycle_block(&obs))?,
            CycleStep::Halted(outcome) => {
                write!(out, "{}", report::completion(&outcome))?;
                out.flush()?;
                return Ok(());
            }
        }
    }
}

/// Drive the engine, emitting one JSON line per observation and a
/// final summary line.
fn run_json(params: &SimParameters, out: &mut impl Write) -> Result<()> {
    let mut engine = SimEngine::new(params.clone());
    loop {
        match engine.step() {
            CycleStep::Advanced(obs) => {
                let line = ObservationLine::from(&obs);
                writeln!(out, "{}", serde_json::to_string(&line)?)?;
            }
            CycleStep::Halted(outcome) => {
                let summary = RunSummary {
                    outcome,
                    final_state: *engine.state(),
                    cycles_reported: engine.cycle(),
                };
                writeln!(out, "{}", serde_json::to_string(&summary)?)?;
                out.flush()?;
                return Ok(());
            }
        }
    }
}

/// One observed cycle as emitted in `--json` mode. Percentages are the
/// raw quotients; 2-decimal rounding is text-mode display only.
#[derive(serde::Serialize)]
struct ObservationLine {
    cycle:               Cycle,
    susceptible:         PersonCount,
    infected:            PersonCount,
    recovered:           PersonCount,
    percent_susceptible: f64,
    percent_infected:    f64,
    percent_recovered:   f64,
}

impl From<&CycleObservation> for ObservationLine {
    fn from(obs: &CycleObservation) -> Self {
        Self {
            cycle:               obs.cycle,
            susceptible:         obs.susceptible,
            infected:            obs.infected,
            recovered:           obs.recovered,
            percent_susceptible: obs.percent_susceptible(),
            percent_infected:    obs.percent_infected(),
            percent_recovered:   obs.percent_recovered(),
        }
    }
}

/// Read a required `--flag value` pair. A missing flag or unparseable
/// value fails that field's validation, same as the prompt session.
fn required<T: std::str::FromStr>(
    args: &[String],
    flag: &str,
    invalid: ValidationError,
) -> Result<T> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
        .ok_or_else(|| anyhow::Error::new(SimError::from(invalid)))
}
