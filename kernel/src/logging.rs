use core::fmt;

use logger::LogSink;

struct Console;

#[crate_interface::impl_interface]
impl LogSink for Console {
    fn print(args: fmt::Arguments) {
        crate::console::print(args);
    }
}
