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

use nix::unistd::Pid;
use std::io;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SenderError>;

#[derive(Error, Debug)]
pub enum SenderError {
    #[error("failed to deliver {name} ({number}) to pid {pid}: {source}")]
    Delivery {
        name: &'static str,
        number: i32,
        pid: Pid,
        source: nix::Error,
    },
    #[error("failed to write sender report: {0}")]
    Output(#[from] io::Error),
}
