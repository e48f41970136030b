/// User interface and status output utilities
///
/// This module handles:
/// - Serialized console output
/// - Colored terminal text
/// - Status message formatting
///
/// Stdout carries the stamp itself, so everything here goes to stderr.
use lazy_static::lazy_static;
use std::io::Write;
use std::sync::Mutex;

/// Execute a function with exclusive access to console output
fn status_lock<F>(f: F)
where
    F: FnOnce(),
{
    lazy_static! {
        static ref LOCK: Mutex<()> = Mutex::new(());
    }
    let _guard = LOCK.lock();
    f();
}

/// Print colored text to stderr, with fallback to plain text
fn print_color(s: &str, fg: term::color::Color) {
    if !really_print_color(s, fg) {
        eprint!("{}", s);
    }

    fn really_print_color(s: &str, fg: term::color::Color) -> bool {
        match term::stderr() {
            Some(ref mut t) => {
                if t.fg(fg).is_err() {
                    return false;
                }
                let _ = t.attr(term::Attr::Bold);
                if write!(t, "{}", s).is_err() {
                    return false;
                }
                let _ = t.reset();
                true
            }
            None => false,
        }
    }
}

/// Print a status message with "git-stamp: " prefix
pub fn status(s: &str) {
    status_lock(|| {
        eprintln!("git-stamp: {}", s);
    });
}

/// Print an error message with colored "error" prefix
pub fn print_error(msg: &str) {
    status_lock(|| {
        print_color("error", term::color::BRIGHT_RED);
        eprintln!(": {}", msg);
    });
}
