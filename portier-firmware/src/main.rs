//! Portier - Badge Access Terminal Firmware
//!
//! Main firmware binary for RP2040-based door controllers. A badge reader
//! sends its tag over UART; the terminal checks it against a compiled-in
//! allow-list, reports the result on a 16x2 LCD and pulses the lock relay.
//!
//! Everything runs in one foreground loop with blocking waits.
//!
//! # Interrupts
//!
//! No interrupt handlers are bound; the UART is polled. A receive interrupt
//! would be added through `bind_interrupts!` here and would share the
//! terminal's in-progress identifier with this loop, so that identifier
//! would have to move behind a critical-section mutex first.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_time::Delay;
use {defmt_rtt as _, panic_probe as _};

use portier_core::{AccessPolicy, Decision, Terminal};

mod board;

/// Allow-list compiled from access.toml
mod access {
    include!(concat!(env!("OUT_DIR"), "/access_list.rs"));
}

/// Main entry point
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Portier firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let board = board::init(p);

    let policy = AccessPolicy::new(access::AUTHORIZED_TAGS);
    info!("Access list: {} tags", policy.entries().len());
    for tag in policy.unreachable_entries() {
        warn!("Access list entry {=str} can never match a badge", tag);
    }

    let mut terminal = Terminal::new(board.serial, board.display, board.lock, Delay, policy);
    terminal.boot();
    info!("Terminal ready, waiting for badges");

    loop {
        let id = terminal.scan();
        debug!("Badge read: {}", id);

        match terminal.evaluate(&id) {
            Decision::Granted => info!("Access granted: {}", id),
            Decision::Denied => info!("Access denied: {}", id),
        }
    }
}
