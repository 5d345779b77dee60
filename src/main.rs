use clap::{value_t, App, Arg, ArgMatches, SubCommand};
use log::error;

use piecewise_bezier::experiment::local_control_experiment;
use piecewise_bezier::report::{compare, sine_control_points};
use piecewise_bezier::{BenchmarkConfig, Result};

fn main() {
    env_logger::init();

    let params = App::new(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .about("Compares high degree bezier curves with chains of cubic segments")
        .subcommand(
            SubCommand::with_name("compare")
                .about("Times sampling one high degree curve against a chain of cubics through the same points")
                .arg(
                    Arg::with_name("control-points")
                        .long("control-points")
                        .short("n")
                        .takes_value(true)
                        .default_value("19")
                        .help("Number of control points, must be 3m + 1"),
                )
                .arg(
                    Arg::with_name("iterations")
                        .long("iterations")
                        .short("i")
                        .takes_value(true)
                        .default_value("1000")
                        .help("How often each curve is sampled"),
                )
                .arg(
                    Arg::with_name("samples")
                        .long("samples")
                        .short("s")
                        .takes_value(true)
                        .default_value("100")
                        .help("Points per curve (per segment for the chain)"),
                ),
        )
        .subcommand(
            SubCommand::with_name("local-control")
                .about("Measures how much a shift of the start point moves curves of increasing degree")
                .arg(
                    Arg::with_name("max-degree")
                        .long("max-degree")
                        .short("d")
                        .takes_value(true)
                        .default_value("15")
                        .help("Highest degree to measure"),
                )
                .arg(
                    Arg::with_name("shift")
                        .long("shift")
                        .takes_value(true)
                        .default_value("1.0")
                        .help("Vertical shift applied to the start point"),
                )
                .arg(
                    Arg::with_name("samples")
                        .long("samples")
                        .short("s")
                        .takes_value(true)
                        .default_value("100")
                        .help("Points per curve"),
                ),
        )
        .get_matches();

    let result = match params.subcommand() {
        ("compare", Some(params)) => run_compare(params),
        ("local-control", Some(params)) => run_local_control(params),
        _ => {
            println!("{}", params.usage());
            Ok(())
        }
    };

    if let Err(err) = result {
        error!("{}", err);
        eprintln!("{}", err);
        std::process::exit(1);
    }
}

fn run_compare(params: &ArgMatches) -> Result<()> {
    let control_points = value_t!(params, "control-points", usize).unwrap_or_else(|e| e.exit());
    let config = BenchmarkConfig {
        iterations: value_t!(params, "iterations", usize).unwrap_or_else(|e| e.exit()),
        samples_per_curve: value_t!(params, "samples", usize).unwrap_or_else(|e| e.exit()),
    };

    let report = compare(&sine_control_points(control_points), &config)?;
    print!("{}", report);
    Ok(())
}

fn run_local_control(params: &ArgMatches) -> Result<()> {
    let max_degree = value_t!(params, "max-degree", usize).unwrap_or_else(|e| e.exit());
    let shift = value_t!(params, "shift", f64).unwrap_or_else(|e| e.exit());
    let samples = value_t!(params, "samples", usize).unwrap_or_else(|e| e.exit());

    println!("Running Local Control Effect Experiment on Bézier Curves");
    println!("{}", "=".repeat(60));
    println!();
    for influence in local_control_experiment(max_degree, shift, samples)? {
        println!(
            "Degree {}: Average influence = {:.2}% of P0 shift",
            influence.degree, influence.percentage
        );
    }
    println!();
    println!("{}", "=".repeat(60));
    Ok(())
}
