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

//! Canonical signal names and the platform numbers they resolve to.
//!
//! Several names alias the same number (`SIGCHLD`/`SIGCLD`,
//! `SIGIO`/`SIGPOLL`, `SIGABRT`/`SIGIOT`, `SIGSYS`/`SIGUNUSED`), so
//! looking up a number yields every matching name rather than one.

use nix::sys::signal::Signal;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SignalEntry {
    pub name: &'static str,
    pub signal: Signal,
}

impl SignalEntry {
    pub const fn new(name: &'static str, signal: Signal) -> Self {
        Self { name, signal }
    }

    pub fn number(&self) -> i32 {
        self.signal as i32
    }
}

impl Display for SignalEntry {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.number())
    }
}

/// Every standard (non-realtime) signal name Linux defines, historical
/// aliases included, sorted by name.
pub static SIGNALS: &[SignalEntry] = &[
    SignalEntry::new("SIGABRT", Signal::SIGABRT),
    SignalEntry::new("SIGALRM", Signal::SIGALRM),
    SignalEntry::new("SIGBUS", Signal::SIGBUS),
    SignalEntry::new("SIGCHLD", Signal::SIGCHLD),
    SignalEntry::new("SIGCLD", Signal::SIGCHLD),
    SignalEntry::new("SIGCONT", Signal::SIGCONT),
    SignalEntry::new("SIGFPE", Signal::SIGFPE),
    SignalEntry::new("SIGHUP", Signal::SIGHUP),
    SignalEntry::new("SIGILL", Signal::SIGILL),
    SignalEntry::new("SIGINT", Signal::SIGINT),
    SignalEntry::new("SIGIO", Signal::SIGIO),
    SignalEntry::new("SIGIOT", Signal::SIGABRT),
    SignalEntry::new("SIGKILL", Signal::SIGKILL),
    SignalEntry::new("SIGPIPE", Signal::SIGPIPE),
    SignalEntry::new("SIGPOLL", Signal::SIGIO),
    SignalEntry::new("SIGPROF", Signal::SIGPROF),
    SignalEntry::new("SIGPWR", Signal::SIGPWR),
    SignalEntry::new("SIGQUIT", Signal::SIGQUIT),
    SignalEntry::new("SIGSEGV", Signal::SIGSEGV),
    #[cfg(not(any(
        target_arch = "mips",
        target_arch = "mips64",
        target_arch = "sparc64"
    )))]
    SignalEntry::new("SIGSTKFLT", Signal::SIGSTKFLT),
    SignalEntry::new("SIGSTOP", Signal::SIGSTOP),
    SignalEntry::new("SIGSYS", Signal::SIGSYS),
    SignalEntry::new("SIGTERM", Signal::SIGTERM),
    SignalEntry::new("SIGTRAP", Signal::SIGTRAP),
    SignalEntry::new("SIGTSTP", Signal::SIGTSTP),
    SignalEntry::new("SIGTTIN", Signal::SIGTTIN),
    SignalEntry::new("SIGTTOU", Signal::SIGTTOU),
    SignalEntry::new("SIGUNUSED", Signal::SIGSYS),
    SignalEntry::new("SIGURG", Signal::SIGURG),
    SignalEntry::new("SIGUSR1", Signal::SIGUSR1),
    SignalEntry::new("SIGUSR2", Signal::SIGUSR2),
    SignalEntry::new("SIGVTALRM", Signal::SIGVTALRM),
    SignalEntry::new("SIGWINCH", Signal::SIGWINCH),
    SignalEntry::new("SIGXCPU", Signal::SIGXCPU),
    SignalEntry::new("SIGXFSZ", Signal::SIGXFSZ),
];

/// Read-only view over a list of [SignalEntry].
///
/// Iteration order is the order of the backing slice and stays fixed for the
/// lifetime of the process.
#[derive(Debug, Clone, Copy)]
pub struct SignalTable<'a> {
    entries: &'a [SignalEntry],
}

impl SignalTable<'static> {
    /// The table for the platform this binary was built for.
    pub fn standard() -> Self {
        Self { entries: SIGNALS }
    }
}

impl<'a> SignalTable<'a> {
    pub fn new(entries: &'a [SignalEntry]) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'a, SignalEntry> {
        self.entries.iter()
    }

    pub fn name_to_number(&self, name: &str) -> Option<Signal> {
        self.entry(name).map(|entry| entry.signal)
    }

    pub fn entry(&self, name: &str) -> Option<&'a SignalEntry> {
        self.entries.iter().find(|entry| entry.name == name)
    }

    /// All names mapping to `number`, in table order. Empty when the number
    /// is not in the table.
    pub fn number_to_names(&self, number: i32) -> Vec<&'a str> {
        self.entries
            .iter()
            .filter(|entry| entry.number() == number)
            .map(|entry| entry.name)
            .collect()
    }

    /// Distinct signals in the table, in order of first appearance.
    pub fn signals(&self) -> Vec<Signal> {
        let mut signals = Vec::with_capacity(self.entries.len());
        for entry in self.entries {
            if !signals.contains(&entry.signal) {
                signals.push(entry.signal);
            }
        }
        signals
    }
}

impl<'a> IntoIterator for &SignalTable<'a> {
    type Item = &'a SignalEntry;
    type IntoIter = std::slice::Iter<'a, SignalEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
