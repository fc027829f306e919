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

use std::io;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ReceiverError>;

#[derive(Error, Debug)]
pub enum ReceiverError {
    #[error("failed to subscribe to signals: {0}")]
    Subscribe(#[source] io::Error),
    #[error("failed to write receiver report: {0}")]
    Output(#[from] io::Error),
    #[error("failed to restore default disposition: {0}")]
    Disposition(#[from] nix::Error),
    #[error("signal subscription closed")]
    SubscriptionClosed,
}
