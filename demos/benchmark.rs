use std::env;
use std::str::FromStr;

use ctfft::fft_with_opts;
use ctfft::options::{Algorithm, Options};
use ctfft::Complex;
use utilities::gen_random_signal;

fn benchmark_fft(n: usize, algorithm: Algorithm) {
    let big_n = 1 << n; // 2.pow(n)
    let mut reals = vec![0.0; big_n];
    let mut imags = vec![0.0; big_n];
    gen_random_signal(&mut reals, &mut imags);

    let mut signal: Vec<Complex> = reals
        .into_iter()
        .zip(imags)
        .map(|(re, im)| Complex::new(re, im))
        .collect();
    let opts = Options::with_algorithm(algorithm);

    let now = std::time::Instant::now();
    fft_with_opts(&mut signal, &opts).unwrap();
    let elapsed = now.elapsed().as_nanos();
    println!("{elapsed}");
}

fn main() {
    let args: Vec<String> = env::args().collect();
    assert!(args.len() >= 2, "Usage {} <n> [--iterative]", args[0]);

    let n = usize::from_str(&args[1]).unwrap();
    let algorithm = if args.len() > 2 && args[2] == "--iterative" {
        Algorithm::Iterative
    } else {
        Algorithm::Recursive
    };

    benchmark_fft(n, algorithm);
}
