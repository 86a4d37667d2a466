// IP Detail - Logger
// Copyright (C) 2025 Akaere Networks
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Logging setup.
//!
//! Everything is written to stderr so that stdout only ever carries the JSON
//! report. Colours are enabled when stderr is a terminal.

use tracing::Level;

/// Pick the maximum log level from CLI arguments
pub fn level_from_args(debug: bool, trace: bool) -> Level {
    if trace {
        Level::TRACE
    } else if debug {
        Level::DEBUG
    } else {
        Level::WARN
    }
}

/// Initialize the global subscriber from CLI arguments
pub fn init_from_args(debug: bool, trace: bool) {
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level_from_args(debug, trace))
        .with_target(trace)
        .with_ansi(atty::is(atty::Stream::Stderr))
        .with_writer(std::io::stderr);

    // A subscriber may already be installed when embedded as a library
    if subscriber.try_init().is_err() {
        tracing::debug!("Global subscriber already set, keeping it");
    }
}
