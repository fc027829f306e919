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

//! Observes every signal in the [SignalTable] and reports each delivery.
//!
//! `SIGINT` and `SIGTERM` are captured like everything else until the first
//! `SIGUSR1` arrives. From then on they take their default action, which is
//! the way to stop a running receiver short of `SIGKILL`.

pub use disposition::{Disposition, DispositionControl, ProcessDisposition};
pub use error::{ReceiverError, Result};
pub use subscription::SignalSubscription;

use crate::signal_table::SignalTable;
use nix::sys::signal::Signal;
use std::convert::Infallible;
use std::io::{self, Write};
use tracing::{debug, info};

mod disposition;
mod error;
mod subscription;

/// Signal that flips [Disposition::Intercepting] to [Disposition::Reset].
pub const TRIGGER: Signal = Signal::SIGUSR1;

/// Signals returned to their default action on reset.
pub const RESET_SIGNALS: [Signal; 2] = [Signal::SIGINT, Signal::SIGTERM];

pub const RESET_NOTICE: &str = "(Reset SIGINT and SIGTERM. Now you can interrupt this program with SIGINT and SIGTERM)";

/// Queue slots needed so that a full sweep over `table` fits without the
/// reader waiting on the report loop. A sweep sends once per name, so this
/// is the number of names rather than the number of distinct signals.
pub fn buffer_capacity(table: &SignalTable<'_>) -> usize {
    table.len()
}

#[derive(Debug)]
pub struct SignalReceiver<'a, C, W> {
    table: SignalTable<'a>,
    control: C,
    out: W,
    disposition: Disposition,
}

impl<'a, C: DispositionControl, W: Write> SignalReceiver<'a, C, W> {
    pub fn new(table: SignalTable<'a>, control: C, out: W) -> Self {
        Self { table, control, out, disposition: Disposition::default() }
    }

    pub fn disposition(&self) -> Disposition {
        self.disposition
    }

    pub fn announce(&mut self, pid: u32) -> Result<()> {
        writeln!(self.out, "PID: {pid}")?;
        Ok(())
    }

    /// Reports one delivered signal with every name aliasing its number,
    /// then resets disposition if it was the first [TRIGGER].
    pub fn handle(&mut self, number: i32) -> Result<()> {
        let mut line = String::from("Received:");
        for name in self.table.number_to_names(number) {
            line.push(' ');
            line.push_str(name);
        }
        writeln!(self.out, "{line} ({number})")?;

        if number == TRIGGER as i32 {
            self.reset()?;
        }

        Ok(())
    }

    fn reset(&mut self) -> Result<()> {
        if self.disposition == Disposition::Reset {
            debug!("disposition already reset");
            return Ok(());
        }

        self.control.restore_default(&RESET_SIGNALS)?;
        self.disposition = Disposition::Reset;
        info!("restored default disposition for {RESET_SIGNALS:?}");
        writeln!(self.out, "{RESET_NOTICE}")?;
        Ok(())
    }
}

/// Subscribes to every signal in `table` and reports deliveries on stdout
/// until the process is terminated.
///
/// Must run on a current-thread runtime started from the main thread, see
/// [SignalSubscription::open].
pub async fn run(table: SignalTable<'static>) -> Result<Infallible> {
    let signals = table.signals();
    let subscription =
        SignalSubscription::open(&signals).map_err(ReceiverError::Subscribe)?;
    let mut events = subscription.forward(buffer_capacity(&table));
    info!("subscribed to {} signals", signals.len());

    let mut receiver = SignalReceiver::new(table, ProcessDisposition, io::stdout());
    receiver.announce(std::process::id())?;

    while let Some(number) = events.recv().await {
        receiver.handle(number)?;
    }

    Err(ReceiverError::SubscriptionClosed)
}
