//! Command-line pi digit generator
//!
//! Prints the hexadecimal fraction of pi to stdout, four 64-bit
//! digits per line. The digit count defaults to the build-time
//! precision and may be overridden by the first argument; underscores
//! in the argument are ignored, so `machin-pi 10_000` works.

use std::env;
use std::time::Instant;

use machin_pi::{pi, pi_with_precision};

fn main() {
    let precision = env::args().nth(1).map(|arg| {
        arg.replace('_', "")
            .parse::<usize>()
            .expect("precision should be a number of 64-bit digits")
    });

    let start = Instant::now();
    let p = match precision {
        Some(n) => pi_with_precision(n),
        None => pi(),
    };
    eprintln!("computed {} digits in {:.3?}", p.precision(), start.elapsed());

    println!("3.");
    println!("{}", p);
}
