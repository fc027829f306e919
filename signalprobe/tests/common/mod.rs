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

#![allow(dead_code)]

use nix::unistd::Pid;
use std::{
    io::{BufRead, BufReader},
    process::{Child, Command, ExitStatus, Output, Stdio},
    sync::mpsc,
    thread,
    time::{Duration, Instant},
};

pub const TIMEOUT: Duration = Duration::from_secs(10);

pub const RESET_NOTICE: &str = "(Reset SIGINT and SIGTERM. Now you can interrupt this program with SIGINT and SIGTERM)";

pub fn signalprobe() -> Command {
    Command::new(env!("CARGO_BIN_EXE_signalprobe"))
}

/// Runs the sender to completion against `pid`.
pub fn send(pid: Pid, signal: Option<&str>) -> Output {
    let mut command = signalprobe();
    let _ = command.arg("--mode").arg("sender").arg("--pid").arg(pid.to_string());
    if let Some(signal) = signal {
        let _ = command.arg("--signal").arg(signal);
    }
    command.output().expect("run sender")
}

pub fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout).lines().map(str::to_string).collect()
}

/// Kills the child on drop so a failing assertion never leaks a receiver.
pub struct ChildGuard {
    child: Option<Child>,
}

impl ChildGuard {
    pub fn new(child: Child) -> Self {
        Self { child: Some(child) }
    }

    pub fn child_mut(&mut self) -> Option<&mut Child> {
        self.child.as_mut()
    }

    /// Polls until the child exits or `timeout` passes.
    pub fn wait_timeout(&mut self, timeout: Duration) -> Option<ExitStatus> {
        let child = self.child.as_mut()?;
        let start = Instant::now();
        while start.elapsed() < timeout {
            if let Some(status) = child.try_wait().expect("try_wait") {
                return Some(status);
            }
            thread::sleep(Duration::from_millis(10));
        }
        None
    }
}

impl Drop for ChildGuard {
    fn drop(&mut self) {
        if let Some(mut child) = self.child.take() {
            let _ = child.kill();
            let _ = child.wait();
        }
    }
}

/// A receiver process with its stdout split into lines on a reader thread.
pub struct RunningReceiver {
    pub guard: ChildGuard,
    pub pid: Pid,
    lines: mpsc::Receiver<String>,
}

impl RunningReceiver {
    pub fn spawn() -> Self {
        let mut child = signalprobe()
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .expect("spawn receiver");
        let stdout = child.stdout.take().expect("piped stdout");

        let (tx, lines) = mpsc::channel();
        let _reader = thread::spawn(move || {
            for line in BufReader::new(stdout).lines() {
                let Ok(line) = line else { break };
                if tx.send(line).is_err() {
                    break;
                }
            }
        });

        let mut receiver =
            Self { guard: ChildGuard::new(child), pid: Pid::from_raw(0), lines };
        let announce = receiver.next_line().expect("receiver announces its pid");
        let pid = announce
            .strip_prefix("PID: ")
            .and_then(|pid| pid.parse().ok())
            .unwrap_or_else(|| panic!("unexpected first line {announce:?}"));
        receiver.pid = Pid::from_raw(pid);
        receiver
    }

    pub fn next_line(&self) -> Option<String> {
        self.lines.recv_timeout(TIMEOUT).ok()
    }

    /// Reads lines until every one of `expected` has shown up, in any
    /// order.
    pub fn wait_for_lines(&self, expected: &[&str]) -> Vec<String> {
        let mut missing: Vec<&str> = expected.to_vec();
        let mut seen = Vec::new();
        let deadline = Instant::now() + TIMEOUT;
        while !missing.is_empty() {
            let Some(remaining) =
                deadline.checked_duration_since(Instant::now())
            else {
                break;
            };
            match self.lines.recv_timeout(remaining) {
                Ok(line) => {
                    missing.retain(|expected| *expected != line);
                    seen.push(line);
                }
                Err(_) => break,
            }
        }
        assert!(missing.is_empty(), "never saw {missing:?}, saw {seen:#?}");
        seen
    }
}
