/* -------------------------------------------------------------------------- *\
 *                |   █████╗ ██╗   ██╗██████╗  █████╗ ███████╗ |              *
 *                |  ██╔══██╗██║   ██║██╔══██╗██╔══██╗██╔════╝ |              *
 *                |  ███████║██║   ██║██████╔╝███████║█████╗   |              *
 *                |  ██╔══██║██║   ██║██╔══██╗██╔══██║██╔══╝   |              *
 *                |  ██║  ██║╚██████╔╝██║  ██║██║  ██║███████╗ |              *
 *                |  ╚═╝  ╚═╝ ╚═════╝ ╚═╝  ╚═╝╚═╝  ╚═╝╚══════╝ |              *
 *                +--------------------------------------------+              *
 *                                                                            *
 *                         Distributed Systems Runtime                        *
 * -------------------------------------------------------------------------- *
 * Copyright 2022 - 2024, the aurae contributors                              *
 * SPDX-License-Identifier: Apache-2.0                                        *
\* -------------------------------------------------------------------------- */

#![warn(clippy::unwrap_used)]

use clap::{error::ErrorKind, Parser, ValueEnum};
use nix::unistd::Pid;
use signalprobe::{
    init, receiver,
    sender::{KillDelivery, SignalSender},
    SignalTable,
};
use std::io;
use tracing::{error, info, trace};

const EXIT_OKAY: i32 = 0;
const EXIT_USAGE: i32 = 1;
const EXIT_ERROR: i32 = 2;

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Sender,
    Receiver,
}

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct SignalProbeOptions {
    /// 'sender' (signal sender) or 'receiver' (signal receiver)
    #[clap(short, long, value_enum, default_value_t = Mode::Receiver)]
    mode: Mode,

    /// Target process id
    #[clap(short, long, value_parser = clap::value_parser!(i32).range(1..))]
    pid: Option<i32>,

    /// Signal name to send. If it is not given, all signals except for
    /// SIGKILL will be sent.
    #[clap(short, long)]
    signal: Option<String>,

    #[clap(short, long)]
    verbose: bool,
}

fn receive() -> i32 {
    // One thread only: the signal mask set up by the subscription has to
    // cover every thread in the process.
    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            error!("failed to build runtime: {e}");
            return EXIT_ERROR;
        }
    };

    match runtime.block_on(receiver::run(SignalTable::standard())) {
        Ok(never) => match never {},
        Err(e) => {
            error!("{e}");
            EXIT_ERROR
        }
    }
}

fn send(pid: Pid, signal: Option<&str>) -> i32 {
    let mut sender =
        SignalSender::new(SignalTable::standard(), KillDelivery, io::stdout());

    let result = match signal {
        Some(name) => sender.send_one(pid, name).map(|outcome| {
            trace!("{outcome:?}");
        }),
        None => sender.send_all(pid).map(|report| {
            info!(
                "sweep finished: {} sent, {} skipped",
                report.sent.len(),
                report.skipped.len()
            );
        }),
    };

    match result {
        Ok(()) => EXIT_OKAY,
        Err(e) => {
            error!("{e}");
            // Logging may be filtered off; the OS error is always shown.
            eprintln!("{e}");
            EXIT_ERROR
        }
    }
}

fn usage() -> i32 {
    let program = std::env::args_os()
        .next()
        .map(|arg| arg.to_string_lossy().into_owned())
        .unwrap_or_else(|| "signalprobe".into());
    println!(
        "Usage: {program} --mode sender --pid <target process id> [--signal <name>]"
    );
    EXIT_USAGE
}

fn main() {
    let options = match SignalProbeOptions::try_parse() {
        Ok(options) => options,
        Err(e)
            if matches!(
                e.kind(),
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion
            ) =>
        {
            e.exit()
        }
        Err(e) => {
            // Usage errors go to stdout, next to the rest of the output.
            print!("{e}");
            std::process::exit(EXIT_USAGE);
        }
    };

    if let Err(e) = init::init(options.verbose) {
        eprintln!("{e}");
        std::process::exit(EXIT_ERROR);
    }

    trace!("**Logging: Verbose Mode**");

    let exit_code = match options.mode {
        Mode::Receiver => receive(),
        Mode::Sender => match options.pid {
            Some(pid) => send(
                Pid::from_raw(pid),
                options.signal.as_deref().filter(|name| !name.is_empty()),
            ),
            None => usage(),
        },
    };

    std::process::exit(exit_code);
}
