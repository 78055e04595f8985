use std::env;
use std::fs;
use std::mem::size_of;
use std::process;
use std::str::FromStr;
use std::time::Instant;

use ctfft::options::{Algorithm, Options};
use ctfft::signal::{first_mismatch, format_spectrum, parse_reference, try_generate_inputs};
use ctfft::{fft_with_opts, Complex};

/// Largest `<size>` whose `2^size` samples still fit in a single allocation
const MAX_SIZE: u32 = (isize::MAX as usize / size_of::<Complex>()).ilog2();

/// What to do with the spectrum once it has been computed
#[derive(Debug, PartialEq)]
enum Mode {
    /// Print the transform time
    Time,
    /// Print the spectrum itself
    Dump,
    /// Compare against a reference file, then print the transform time
    Verify(String),
}

#[derive(Debug)]
struct Args {
    size: u32,
    options: Options,
    mode: Mode,
}

fn usage(program: &str) -> String {
    format!("usage: {program} <size> [--iterative | --auto] [--dump | <reference-file>]")
}

fn fail(message: impl std::fmt::Display) -> ! {
    eprintln!("{message}");
    process::exit(1);
}

fn parse_args(args: &[String]) -> Result<Args, String> {
    let program = args.first().map_or("ctfft", String::as_str);

    let size = args.get(1).ok_or_else(|| usage(program))?;
    let size = match u32::from_str(size) {
        Ok(size) if size <= MAX_SIZE => size,
        _ => {
            return Err(format!(
                "invalid <size>; must be a non-negative integer no larger than {MAX_SIZE}\n{}",
                usage(program)
            ))
        }
    };

    let mut options = Options::default();
    let mut mode = Mode::Time;
    for arg in &args[2..] {
        match arg.as_str() {
            "--iterative" => options = Options::with_algorithm(Algorithm::Iterative),
            "--auto" => options = Options::guess_options(1 << size),
            "--dump" => mode = Mode::Dump,
            flag if flag.starts_with("--") => {
                return Err(format!("unknown option {flag}\n{}", usage(program)))
            }
            path => mode = Mode::Verify(path.to_string()),
        }
    }

    Ok(Args {
        size,
        options,
        mode,
    })
}

fn main() {
    let args: Vec<String> = env::args().collect();
    let Args {
        size,
        options,
        mode,
    } = parse_args(&args).unwrap_or_else(|err| fail(err));

    let mut signals = try_generate_inputs(1 << size).unwrap_or_else(|err| fail(err));

    let now = Instant::now();
    if let Err(err) = fft_with_opts(&mut signals, &options) {
        fail(err);
    }
    let elapsed = now.elapsed();

    match mode {
        Mode::Dump => {
            print!("{}", format_spectrum(&signals));
            return;
        }
        Mode::Verify(path) => {
            let content = fs::read_to_string(&path)
                .unwrap_or_else(|err| fail(format!("failed to read {path}: {err}")));
            let expected = parse_reference(&content).unwrap_or_else(|err| fail(err));

            if let Some(idx) = first_mismatch(&signals, &expected) {
                fail(format!(
                    "spectrum differs from {path} at index {idx} (computed {} samples, reference has {})",
                    signals.len(),
                    expected.len()
                ));
            }
        }
        Mode::Time => {}
    }

    let ms = elapsed.as_nanos() as f64 / 1_000_000.0;
    println!("execution time: {ms:.3} ms");
}
