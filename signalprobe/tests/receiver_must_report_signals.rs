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

mod common;

use common::{send, stdout_lines, RunningReceiver, RESET_NOTICE, TIMEOUT};
use std::os::unix::process::ExitStatusExt;

#[test]
fn receiver_must_report_every_alias() {
    let receiver = RunningReceiver::spawn();

    let output = send(receiver.pid, Some("SIGUSR2"));
    assert_eq!(stdout_lines(&output), vec!["Sent: SIGUSR2 (12)"]);
    assert_eq!(receiver.next_line().as_deref(), Some("Received: SIGUSR2 (12)"));

    let output = send(receiver.pid, Some("SIGCLD"));
    assert_eq!(stdout_lines(&output), vec!["Sent: SIGCLD (17)"]);
    assert_eq!(
        receiver.next_line().as_deref(),
        Some("Received: SIGCHLD SIGCLD (17)")
    );
}

#[test]
fn receiver_must_intercept_sigterm_until_sigusr1() {
    let mut receiver = RunningReceiver::spawn();

    let _ = send(receiver.pid, Some("SIGTERM"));
    assert_eq!(receiver.next_line().as_deref(), Some("Received: SIGTERM (15)"));
    let _ = send(receiver.pid, Some("SIGINT"));
    assert_eq!(receiver.next_line().as_deref(), Some("Received: SIGINT (2)"));

    let _ = send(receiver.pid, Some("SIGUSR1"));
    assert_eq!(receiver.next_line().as_deref(), Some("Received: SIGUSR1 (10)"));
    assert_eq!(receiver.next_line().as_deref(), Some(RESET_NOTICE));

    // A second trigger is reported but announces nothing.
    let _ = send(receiver.pid, Some("SIGUSR1"));
    let _ = send(receiver.pid, Some("SIGUSR2"));
    assert_eq!(receiver.next_line().as_deref(), Some("Received: SIGUSR1 (10)"));
    assert_eq!(receiver.next_line().as_deref(), Some("Received: SIGUSR2 (12)"));

    let _ = send(receiver.pid, Some("SIGTERM"));
    let status = receiver
        .guard
        .wait_timeout(TIMEOUT)
        .expect("receiver should terminate on SIGTERM after reset");
    assert_eq!(status.signal(), Some(15), "{status:?}");
}
