use antikythera::{Error, FaceCommand, FaceConfig, Orrery, Result};
use std::env;
use std::io::{self, BufRead};
use std::process;
use std::sync::mpsc::{self, Sender};
use std::thread;

const USAGE: &str = "usage: antikythera [--utc-offset MINUTES] [--scale N]

Reads sky updates from stdin, one per line: `<key> <value>`, e.g.
    sun 16384
    moon 200deg
    0x01 95deg";

fn main() {
    init_tracing();

    if let Err(err) = run() {
        eprintln!("antikythera: {err}");
        process::exit(1);
    }
}

#[cfg(feature = "tracing")]
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
}

#[cfg(not(feature = "tracing"))]
fn init_tracing() {}

fn run() -> Result<()> {
    let config = parse_args(env::args().skip(1))?;
    let (sender, receiver) = mpsc::channel();
    thread::spawn(move || read_commands(io::stdin().lock(), sender));

    let mut orrery = Orrery::new(config);
    orrery.show_with_commands(receiver)
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<FaceConfig> {
    let mut utc_offset = 0;
    let mut scale = 3;
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--utc-offset" => utc_offset = flag_value(&arg, args.next())?,
            "--scale" => scale = flag_value(&arg, args.next())?,
            "-h" | "--help" => {
                println!("{USAGE}");
                process::exit(0);
            }
            _ => {
                return Err(Error::Argument {
                    arg,
                    reason: "unknown flag".to_string(),
                })
            }
        }
    }
    Ok(FaceConfig::builder()
        .utc_offset_minutes(utc_offset)
        .window_scale(scale)
        .build())
}

fn flag_value<T: std::str::FromStr>(flag: &str, value: Option<String>) -> Result<T> {
    let value = value.ok_or_else(|| Error::Argument {
        arg: flag.to_string(),
        reason: "missing value".to_string(),
    })?;
    value.parse().map_err(|_| Error::Argument {
        arg: value.clone(),
        reason: format!("not a valid value for {flag}"),
    })
}

/// Forward parsed lines until stdin closes or the window goes away
fn read_commands(input: impl BufRead, sender: Sender<FaceCommand>) {
    for line in input.lines() {
        let Ok(line) = line else { break };
        if line.trim().is_empty() || line.trim_start().starts_with('#') {
            continue;
        }
        match line.parse::<FaceCommand>() {
            Ok(command) => {
                if sender.send(command).is_err() {
                    break;
                }
            }
            Err(err) => eprintln!("antikythera: {err}"),
        }
    }
}
