extern crate leapfrog2d;
extern crate clap;
use clap::{Arg, ArgAction, ArgMatches, Command};
use leapfrog2d::{Case, LeapFrog, Result, StepReport};
use leapfrog2d::constants::{DEFAULT_TIME_STEP, DEFAULT_EPSILON, DEFAULT_TICKS};
use leapfrog2d::output;
use std::io::Write;
use std::path::Path;
use std::process;
use std::time::Instant;
use tracing::{error, info};

fn cli() -> Command {
    Command::new("leapfrog2d")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Planar N-body simulator based on a kick-drift leapfrog with optional time step correction.")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(Command::new("start")
                .about("Start a simulation")
                .arg(Arg::new("start_case_filename")
                    .required(true)
                    .index(1)
                    .help("JSON case description"))
                .arg(Arg::new("snapshot_filename")
                    .required(true)
                    .index(2)
                    .help("Recovery snapshot filename (.json or binary)"))
                .arg(Arg::new("history_filename")
                    .required(true)
                    .index(3)
                    .help("History CSV filename"))
                .arg(Arg::new("particles_filename")
                    .long("particles")
                    .value_name("csv")
                    .help("Save the final state of every particle to this CSV file"))
                .arg(Arg::new("silent")
                    .short('s')
                    .long("silent")
                    .action(ArgAction::SetTrue)
                    .help("Do not print the progress line")))
        .subcommand(Command::new("resume")
                .about("Resume a simulation")
                .arg(Arg::new("resume_case_filename")
                    .required(true)
                    .index(1)
                    .help("Recovery snapshot filename"))
                .arg(Arg::new("history_filename")
                    .required(true)
                    .index(2)
                    .help("History CSV filename"))
                .arg(Arg::new("ticks")
                    .long("ticks")
                    .value_name("n")
                    .value_parser(clap::value_parser!(u64))
                    .help("Number of additional ticks"))
                .arg(Arg::new("particles_filename")
                    .long("particles")
                    .value_name("csv")
                    .help("Save the final state of every particle to this CSV file"))
                .arg(Arg::new("silent")
                    .short('s')
                    .long("silent")
                    .action(ArgAction::SetTrue)
                    .help("Do not print the progress line")))
        .subcommand(Command::new("random")
                .about("Write a case with randomly generated particles")
                .arg(Arg::new("n_particles")
                    .required(true)
                    .index(1)
                    .value_parser(clap::value_parser!(usize))
                    .help("Number of particles"))
                .arg(Arg::new("case_filename")
                    .required(true)
                    .index(2)
                    .help("JSON case description to create"))
                .arg(Arg::new("seed")
                    .long("seed")
                    .value_parser(clap::value_parser!(u64))
                    .default_value("0"))
                .arg(Arg::new("time_step")
                    .long("time-step")
                    .value_name("years")
                    .value_parser(clap::value_parser!(f64))
                    .default_value("0.001"))
                .arg(Arg::new("epsilon")
                    .long("epsilon")
                    .value_name("AU/yr")
                    .value_parser(clap::value_parser!(f64))
                    .default_value("5.0"))
                .arg(Arg::new("ticks")
                    .long("ticks")
                    .value_name("n")
                    .value_parser(clap::value_parser!(u64))
                    .default_value("1000"))
                .arg(Arg::new("correction")
                    .long("correction")
                    .action(ArgAction::SetTrue)
                    .help("Enable the time step correction")))
}

fn main() {
    leapfrog2d::logging::init();
    let matches = cli().get_matches();

    let outcome = match matches.subcommand() {
        Some(("start", start_matches)) => start(start_matches),
        Some(("resume", resume_matches)) => resume(resume_matches),
        Some(("random", random_matches)) => random(random_matches),
        _ => unreachable!(),
    };

    if let Err(e) = outcome {
        error!("{}", e);
        process::exit(1);
    }
}

fn required<'a>(matches: &'a ArgMatches, id: &str) -> &'a Path {
    // clap enforces the presence of required arguments before we get here
    Path::new(matches.get_one::<String>(id).map(|s| s.as_str()).unwrap_or_default())
}

fn start(matches: &ArgMatches) -> Result<()> {
    let case_path = required(matches, "start_case_filename");
    let snapshot_path = required(matches, "snapshot_filename");
    let history_path = required(matches, "history_filename");
    if snapshot_path.exists() {
        error!("File '{}' already exists.", snapshot_path.display());
        process::exit(1);
    }

    let case = Case::read(case_path)?;
    let mut universe_integrator = case.into_integrator()?;
    info!("Created new simulation based on '{}' with {} particles", case_path.display(), universe_integrator.get_n_particles());
    simulate(&mut universe_integrator, case.ticks, case.recovery_snapshot_period, snapshot_path, history_path,
             matches.get_one::<String>("particles_filename").map(Path::new), matches.get_flag("silent"))
}

fn resume(matches: &ArgMatches) -> Result<()> {
    let snapshot_path = required(matches, "resume_case_filename");
    let history_path = required(matches, "history_filename");
    let mut universe_integrator = output::restore_snapshot(snapshot_path)?;
    let ticks = matches.get_one::<u64>("ticks").copied().unwrap_or(DEFAULT_TICKS);
    let recovery_snapshot_period = leapfrog2d::constants::DEFAULT_RECOVERY_SNAPSHOT_PERIOD;
    simulate(&mut universe_integrator, ticks, recovery_snapshot_period, snapshot_path, history_path,
             matches.get_one::<String>("particles_filename").map(Path::new), matches.get_flag("silent"))
}

fn random(matches: &ArgMatches) -> Result<()> {
    let case_path = required(matches, "case_filename");
    let n_particles = matches.get_one::<usize>("n_particles").copied().unwrap_or_default();
    let seed = matches.get_one::<u64>("seed").copied().unwrap_or_default();

    let mut case = Case::default();
    case.time_step = leapfrog2d::error::ensure_positive("time_step", matches.get_one::<f64>("time_step").copied().unwrap_or(DEFAULT_TIME_STEP))?;
    case.epsilon = leapfrog2d::error::ensure_positive("epsilon", matches.get_one::<f64>("epsilon").copied().unwrap_or(DEFAULT_EPSILON))?;
    case.ticks = matches.get_one::<u64>("ticks").copied().unwrap_or(DEFAULT_TICKS);
    case.correction_enabled = matches.get_flag("correction");
    case.bodies = leapfrog2d::tools::random_bodies(n_particles, seed, &[])?
        .iter()
        .map(leapfrog2d::BodyCase::from)
        .collect();
    case.write(case_path)?;
    info!("Wrote {} random particles to '{}'", n_particles, case_path.display());
    Ok(())
}

fn print_progress(universe_integrator: &LeapFrog, report: &StepReport) {
    print!("Tick: {} | Year: {:0.3} | Time step: {:0.3e} years                    \r",
           report.tick, universe_integrator.get_current_time(), report.time_step);
    let _ = std::io::stdout().flush();
}

fn simulate(universe_integrator: &mut LeapFrog, ticks: u64, recovery_snapshot_period: u64,
            snapshot_path: &Path, history_path: &Path, particles_path: Option<&Path>, silent_mode: bool) -> Result<()> {
    let t1 = Instant::now();
    let initial_energy = universe_integrator.universe().compute_total_energy();
    let initial_angular_momentum = universe_integrator.universe().compute_total_angular_momentum();
    info!("Running {} ticks, time step {} years, epsilon {} AU/yr, correction {}",
          ticks, universe_integrator.nominal_time_step(), universe_integrator.epsilon(),
          if universe_integrator.correction_enabled() { "enabled" } else { "disabled" });

    for _ in 0..ticks {
        let report = match universe_integrator.iterate() {
            Some(report) => report,
            None => {
                info!("There are no particles to simulate");
                break;
            },
        };
        if !silent_mode {
            print_progress(universe_integrator, &report);
        }
        if recovery_snapshot_period > 0 && universe_integrator.get_current_iteration() % recovery_snapshot_period == 0 {
            output::write_recovery_snapshot(snapshot_path, universe_integrator)?;
        }
    }
    if !silent_mode {
        println!();
    }

    output::write_recovery_snapshot(snapshot_path, universe_integrator)?;
    output::write_history_file(history_path, universe_integrator)?;
    if let Some(particles_path) = particles_path {
        output::write_particle_snapshot_file(particles_path, universe_integrator.universe())?;
    }

    if universe_integrator.get_n_particles() > 1 {
        let energy = universe_integrator.universe().compute_total_energy();
        let angular_momentum = universe_integrator.universe().compute_total_angular_momentum();
        info!("Relative energy error: {:0.3e}", ((energy - initial_energy) / initial_energy).abs());
        if initial_angular_momentum != 0. {
            info!("Relative angular momentum error: {:0.3e}", ((angular_momentum - initial_angular_momentum) / initial_angular_momentum).abs());
        }
    }
    info!("Execution time: {:0.3} seconds", t1.elapsed().as_secs_f64());
    Ok(())
}
