#[macro_use]
extern crate clap;

use clap::Arg;
use std::process;
use ucpu::constants;

fn main() {
    let matches = app_from_crate!()
        .arg(
            Arg::with_name("INPUT")
                .help("The machine code listing to run")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .long("verbose")
                .help("Prints the state changes of every cycle"),
        )
        .get_matches();

    let input = matches.value_of("INPUT").unwrap();
    let verbose = matches.is_present("verbose");

    println!("Loading program: {}", input);

    match usim::run_file(input, verbose, constants::DEFAULT_MAX_CYCLES) {
        Ok((sim, _)) => {
            usim::print_final_state(&sim);
        }
        Err(err) => {
            eprintln!("ERROR: {}", err);
            process::exit(1);
        }
    }
}
