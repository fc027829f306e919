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

use nix::sys::signal::{SigSet, Signal};
use nix::sys::signalfd::{SfdFlags, SignalFd};
use std::io;
use tokio::io::unix::AsyncFd;
use tokio::sync::mpsc::{self, Receiver};
use tracing::{error, trace};

/// Every delivery of the subscribed signals, read from a `signalfd`.
///
/// The signals are blocked on the calling thread so they stay pending until
/// read. Open this before any other thread exists, otherwise another thread
/// may still take process-directed signals under their old disposition.
#[derive(Debug)]
pub struct SignalSubscription {
    fd: AsyncFd<SignalFd>,
}

impl SignalSubscription {
    pub fn open(signals: &[Signal]) -> io::Result<Self> {
        let mut mask = SigSet::empty();
        for signal in signals {
            mask.add(*signal);
        }
        mask.thread_block()?;

        let fd = SignalFd::with_flags(
            &mask,
            SfdFlags::SFD_NONBLOCK | SfdFlags::SFD_CLOEXEC,
        )?;

        Ok(Self { fd: AsyncFd::new(fd)? })
    }

    /// Waits for the next pending signal and returns its number.
    pub async fn next(&mut self) -> io::Result<i32> {
        loop {
            let mut guard = self.fd.readable_mut().await?;
            let read = guard.try_io(|fd| match fd.get_mut().read_signal() {
                Ok(Some(info)) => Ok(info.ssi_signo as i32),
                Ok(None) => Err(io::ErrorKind::WouldBlock.into()),
                Err(errno) => Err(errno.into()),
            });

            if let Ok(result) = read {
                return result;
            }
        }
    }

    /// Moves the subscription into a task that feeds a queue of `capacity`
    /// slots. A full queue holds the reader back instead of dropping events.
    pub fn forward(mut self, capacity: usize) -> Receiver<i32> {
        let (tx, rx) = mpsc::channel(capacity);

        let _ignored = tokio::spawn(async move {
            loop {
                let number = match self.next().await {
                    Ok(number) => number,
                    Err(e) => {
                        error!("reading signalfd failed: {e}");
                        break;
                    }
                };

                trace!("signal {number} pending");
                if tx.send(number).await.is_err() {
                    // receiver is gone
                    break;
                }
            }
        });

        rx
    }
}
