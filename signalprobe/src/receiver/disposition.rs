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

use nix::sys::signal::{sigaction, SaFlags, SigAction, SigHandler, SigSet, Signal};

/// Whether the receiver still captures `SIGINT` and `SIGTERM`.
///
/// The only transition is `Intercepting -> Reset`; nothing leads back.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    #[default]
    Intercepting,
    Reset,
}

/// Returns signals to the OS default action.
pub trait DispositionControl {
    fn restore_default(&mut self, signals: &[Signal]) -> nix::Result<()>;
}

/// Restores `SIG_DFL` for the current process and lifts the mask the
/// subscription placed on the calling thread.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessDisposition;

impl DispositionControl for ProcessDisposition {
    fn restore_default(&mut self, signals: &[Signal]) -> nix::Result<()> {
        let default = SigAction::new(
            SigHandler::SigDfl,
            SaFlags::empty(),
            SigSet::empty(),
        );

        let mut unblock = SigSet::empty();
        for signal in signals {
            // SAFETY: SIG_DFL installs no handler code of ours.
            let _previous = unsafe { sigaction(*signal, &default) }?;
            unblock.add(*signal);
        }

        // Anything already pending is acted on as soon as it is unblocked.
        unblock.thread_unblock()
    }
}

impl<C: DispositionControl + ?Sized> DispositionControl for &mut C {
    fn restore_default(&mut self, signals: &[Signal]) -> nix::Result<()> {
        (**self).restore_default(signals)
    }
}
