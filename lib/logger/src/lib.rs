//! Kernel logging.
//!
//! This crate owns what a log line looks like: the level tag, the
//! source location, and the per-level ANSI color. The kernel only
//! supplies a raw sink for the finished line, resolved at link time
//! through `crate_interface`, so this crate never depends on the
//! console it prints through.

#![no_std]

use log::{Level, LevelFilter, Log, Metadata, Record};

/// The sink a finished log line is written to. Implemented by the
/// kernel on top of its console.
#[crate_interface::def_interface]
pub trait LogSink: Send + Sync {
    fn print(args: core::fmt::Arguments);
}

struct KernelLog;

impl Log for KernelLog {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        crate_interface::call_interface!(LogSink::print(format_args!(
            "\u{1B}[{}m[{:>5}][{}:{}] {}\u{1B}[0m\n",
            color_code(record.level()),
            record.level(),
            record.file().unwrap_or("?"),
            record.line().unwrap_or(0),
            record.args(),
        )));
    }

    fn flush(&self) {}
}

/// Installs the logger. The maximum level is baked in at build time
/// through the `LOG` environment variable and defaults to `info`.
pub fn init() {
    static KERNEL_LOG: KernelLog = KernelLog;
    log::set_logger(&KERNEL_LOG).ok();
    log::set_max_level(
        option_env!("LOG")
            .and_then(|name| name.parse().ok())
            .unwrap_or(LevelFilter::Info),
    );
}

/// ANSI SGR code per level: errors red, warnings bright yellow, info
/// cyan, debug green, trace grey.
fn color_code(level: Level) -> u8 {
    match level {
        Level::Error => 31,
        Level::Warn => 93,
        Level::Info => 36,
        Level::Debug => 32,
        Level::Trace => 90,
    }
}
