// Copyright 2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

mod cli;
mod config;
mod ui;

use git_stamp::stamp::Stamp;
use std::fs;
use std::io::Write;

fn main() {
    env_logger::init();

    // Parse CLI arguments
    let args = cli::CliArgs::parse_args();

    // Validate arguments
    if let Err(e) = args.validate() {
        ui::print_error(&e);
        std::process::exit(1);
    }

    // Resolve git executable, repository and output format
    let config = match config::build_stamp_config(&args) {
        Ok(c) => c,
        Err(e) => {
            ui::print_error(&format!("Configuration error: {}", e));
            std::process::exit(1);
        }
    };

    let stamp = match Stamp::collect(&config.git) {
        Ok(s) => s,
        Err(e) => {
            ui::print_error(&e.to_string());
            std::process::exit(1);
        }
    };

    let rendered = match config.format.render(&stamp) {
        Ok(r) => r,
        Err(e) => {
            ui::print_error(&e);
            std::process::exit(1);
        }
    };

    match config.output {
        Some(ref path) => {
            if let Err(e) = fs::write(path, &rendered) {
                ui::print_error(&format!("Failed to write {}: {}", path.display(), e));
                std::process::exit(1);
            }
            ui::status(&format!("Stamp {} written to {}", stamp.version(), path.display()));
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            if let Err(e) = stdout.write_all(rendered.as_bytes()).and_then(|_| stdout.flush()) {
                ui::print_error(&format!("Failed to write stamp: {}", e));
                std::process::exit(1);
            }
        }
    }
}
