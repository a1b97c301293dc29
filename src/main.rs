//! Command-line shell around the computus library.
//!
//! Takes a single `YEAR` argument, validates it against the supported
//! window, and prints the year followed by the five movable dates. Any
//! invalid invocation (wrong argument count, non-integer, out-of-range
//! year) gets the same usage message on stderr and exit status 1.

use std::env;
use std::process;

use computus::date::{in_supported_range, MAXYEAR, MINYEAR};
use computus::feasts::{monthday_line, MovableFeasts};

/// Validates the argument list (everything after the program name) down to
/// a single in-range year, or `None` for any invalid invocation.
fn parse_year(args: &[String]) -> Option<i32> {
    match args {
        [arg] => {
            let year = arg.parse::<i32>().ok()?;
            in_supported_range(year).then_some(year)
        }
        _ => None,
    }
}

fn usage(program: &str) -> ! {
    eprintln!(
        "Usage: {} YEAR, with YEAR in range {}-{}",
        program, MINYEAR, MAXYEAR
    );
    process::exit(1);
}

fn main() {
    let argv: Vec<String> = env::args().collect();
    let program = argv.first().map(String::as_str).unwrap_or("computus");

    let year = match parse_year(argv.get(1..).unwrap_or(&[])) {
        Some(year) => year,
        None => usage(program),
    };

    let feasts = MovableFeasts::for_year(year);
    println!("Year {}", year);
    for (label, date) in feasts.labeled() {
        println!("{}", monthday_line(label, date));
    }
}
