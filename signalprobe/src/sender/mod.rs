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

//! Delivers one named signal, or sweeps the whole [SignalTable], to a
//! target process.
//!
//! A sweep stops the target first, sends everything else, and continues the
//! target last. `SIGKILL` is never part of a sweep.

pub use delivery::{Deliver, KillDelivery};
pub use error::{Result, SenderError};

use crate::signal_table::{SignalEntry, SignalTable};
use nix::sys::signal::Signal;
use nix::unistd::Pid;
use std::io::Write;
use tracing::{debug, info, warn};

mod delivery;
mod error;

static PAUSE: SignalEntry = SignalEntry::new("SIGSTOP", Signal::SIGSTOP);
static RESUME: SignalEntry = SignalEntry::new("SIGCONT", Signal::SIGCONT);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendOutcome {
    Sent(Signal),
    UnknownName,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanStep<'a> {
    Send(&'a SignalEntry),
    Skip(&'a SignalEntry),
}

/// Names sent and skipped by a sweep, in the order they were processed.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SweepReport {
    pub sent: Vec<&'static str>,
    pub skipped: Vec<&'static str>,
}

/// Orders a sweep over `table`.
///
/// The plan always opens with `SIGSTOP` and closes with `SIGCONT`. In
/// between, every entry is sent in table order except entries numbered
/// `SIGKILL` or `SIGCONT` (skipped) and entries numbered `SIGSTOP` (already
/// sent). Aliases of one number are sent once per name.
pub fn broadcast_plan<'a>(table: &SignalTable<'a>) -> Vec<PlanStep<'a>> {
    let mut plan = Vec::with_capacity(table.len() + 2);
    plan.push(PlanStep::Send(&PAUSE));
    for entry in table {
        match entry.signal {
            Signal::SIGSTOP => {}
            Signal::SIGKILL | Signal::SIGCONT => plan.push(PlanStep::Skip(entry)),
            _ => plan.push(PlanStep::Send(entry)),
        }
    }
    plan.push(PlanStep::Send(&RESUME));
    plan
}

#[derive(Debug)]
pub struct SignalSender<'a, D, W> {
    table: SignalTable<'a>,
    delivery: D,
    out: W,
}

impl<'a, D: Deliver, W: Write> SignalSender<'a, D, W> {
    pub fn new(table: SignalTable<'a>, delivery: D, out: W) -> Self {
        Self { table, delivery, out }
    }

    /// Resolves `name` and delivers it to `pid`.
    ///
    /// An unknown name is reported and returns [SendOutcome::UnknownName]
    /// without touching the OS.
    pub fn send_one(&mut self, pid: Pid, name: &str) -> Result<SendOutcome> {
        let Some(entry) = self.table.entry(name) else {
            warn!("unknown signal name: {name}");
            writeln!(self.out, "Unknown signal name: {name}")?;
            return Ok(SendOutcome::UnknownName);
        };

        self.send(pid, entry)?;
        Ok(SendOutcome::Sent(entry.signal))
    }

    /// Executes [broadcast_plan] against `pid`, aborting on the first
    /// delivery failure.
    pub fn send_all(&mut self, pid: Pid) -> Result<SweepReport> {
        let plan = broadcast_plan(&self.table);
        info!("sweeping {} steps to pid {pid}", plan.len());

        let mut report = SweepReport::default();
        for step in plan {
            match step {
                PlanStep::Send(entry) => {
                    self.send(pid, entry)?;
                    report.sent.push(entry.name);
                }
                PlanStep::Skip(entry) => {
                    debug!("skipping {entry}");
                    writeln!(self.out, "Skipped: {entry}")?;
                    report.skipped.push(entry.name);
                }
            }
        }

        Ok(report)
    }

    fn send(&mut self, pid: Pid, entry: &SignalEntry) -> Result<()> {
        self.delivery.deliver(pid, entry.signal).map_err(|source| {
            SenderError::Delivery {
                name: entry.name,
                number: entry.number(),
                pid,
                source,
            }
        })?;
        debug!("delivered {entry} to pid {pid}");
        writeln!(self.out, "Sent: {entry}")?;
        Ok(())
    }
}
