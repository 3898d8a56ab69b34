use compact_sieve::internal;
use compact_sieve::sieve;
use compact_sieve::bits;

use std::time::Instant;
use std::{env, process};

use getopts::Options;

use rand::Rng;

mod utils;

//-----------------------------------------------------------------------------

fn main() {
    let config = Config::new();

    println!("Counting the primes in [2, {}], {} round(s) per sieve", config.limit, config.rounds);
    println!("");

    sieve_benchmark("Compacted sieve", config.limit, config.rounds, |limit| {
        sieve::count_primes(limit).unwrap_or_else(|err| {
            eprintln!("{}", err);
            process::exit(1);
        })
    });
    sieve_benchmark("Dense sieve", config.limit, config.rounds, internal::count_primes_dense);

    popcount_benchmark(config.words);

    utils::report_memory_usage();
}

//-----------------------------------------------------------------------------

pub struct Config {
    pub limit: u64,
    pub rounds: usize,
    pub words: usize,
}

impl Config {
    const LIMIT: u64 = 1_000_000_000;
    const ROUNDS: usize = 3;
    const WORDS: usize = 10_000_000;

    pub fn new() -> Config {
        let args: Vec<String> = env::args().collect();
        let program = args[0].clone();

        let mut opts = Options::new();
        opts.optopt("l", "limit", "count the primes up to INT (default 1000000000)", "INT");
        opts.optopt("r", "rounds", "number of rounds per sieve (default 3)", "INT");
        opts.optopt("n", "words", "number of words in the popcount comparison (default 10000000)", "INT");
        opts.optflag("h", "help", "print this help");
        let matches = match opts.parse(&args[1..]) {
            Ok(m) => m,
            Err(f) => {
                eprintln!("{}", f.to_string());
                process::exit(1);
            }
        };

        let mut config = Config {
            limit: Self::LIMIT,
            rounds: Self::ROUNDS,
            words: Self::WORDS,
        };
        if matches.opt_present("h") {
            let header = format!("Usage: {} [options]", program);
            print!("{}", opts.usage(&header));
            process::exit(0);
        }
        if let Some(s) = matches.opt_str("l") {
            match s.parse::<u64>() {
                Ok(n) => {
                    config.limit = n;
                },
                Err(f) => {
                    eprintln!("--limit: {}", f.to_string());
                    process::exit(1);
                },
            }
        }
        if let Some(s) = matches.opt_str("r") {
            match s.parse::<usize>() {
                Ok(n) => {
                    if n == 0 {
                        eprintln!("Invalid round count: {}", n);
                        process::exit(1);
                    }
                    config.rounds = n;
                },
                Err(f) => {
                    eprintln!("--rounds: {}", f.to_string());
                    process::exit(1);
                },
            }
        }
        if let Some(s) = matches.opt_str("n") {
            match s.parse::<usize>() {
                Ok(n) => {
                    if n == 0 {
                        eprintln!("Invalid word count: {}", n);
                        process::exit(1);
                    }
                    config.words = n;
                },
                Err(f) => {
                    eprintln!("--words: {}", f.to_string());
                    process::exit(1);
                },
            }
        }

        config
    }
}

//-----------------------------------------------------------------------------

fn sieve_benchmark<F: Fn(u64) -> u32>(name: &str, limit: u64, rounds: usize, count: F) {
    println!("{} up to {}", name, limit);
    for _ in 0..rounds {
        let now = Instant::now();
        let result = count(limit);
        utils::report_primes(result, now.elapsed());
    }
    println!("");
}

fn popcount_benchmark(words: usize) {
    println!("Generating {} random words for the popcount comparison", words);
    let mut values: Vec<u64> = Vec::with_capacity(words);
    let mut rng = rand::thread_rng();
    for _ in 0..words {
        values.push(rng.gen());
    }
    println!("");

    popcount_run("Hardware popcount", &values, |value| value.count_ones());
    popcount_run("Naive popcount", &values, bits::count_ones_naive);
    popcount_run("Sideways popcount", &values, bits::count_ones_sideways);
}

fn popcount_run<F: Fn(u64) -> u32>(name: &str, values: &[u64], count: F) {
    println!("{} over {} words", name, values.len());
    let now = Instant::now();
    let mut checksum: u64 = 0;
    for value in values.iter() {
        checksum += count(*value) as u64;
    }
    utils::report_checksum(checksum, values.len(), now.elapsed());
}

//-----------------------------------------------------------------------------
