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

use nix::sys::signal::Signal;
use nix::unistd::Pid;
use tracing::trace;

/// Hands a signal to the OS for delivery to another process.
pub trait Deliver {
    fn deliver(&mut self, pid: Pid, signal: Signal) -> nix::Result<()>;
}

/// Delivers through `kill(2)`.
#[derive(Debug, Default, Clone, Copy)]
pub struct KillDelivery;

impl Deliver for KillDelivery {
    fn deliver(&mut self, pid: Pid, signal: Signal) -> nix::Result<()> {
        trace!("kill({pid}, {signal})");
        nix::sys::signal::kill(pid, signal)
    }
}

impl<D: Deliver + ?Sized> Deliver for &mut D {
    fn deliver(&mut self, pid: Pid, signal: Signal) -> nix::Result<()> {
        (**self).deliver(pid, signal)
    }
}
