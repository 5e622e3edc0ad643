//! Kernel entry and bring-up.
//!
//! The SBI firmware drops every hart into `_start` in supervisor mode
//! with paging disabled, traps delegated, and the console usable through
//! the legacy SBI calls. `rust_main` brings the subsystems up in
//! dependency order and then parks the hart, which from that point on is
//! driven entirely by interrupts.

#![cfg_attr(target_arch = "riscv64", no_std)]
#![cfg_attr(target_arch = "riscv64", no_main)]

#[cfg(target_arch = "riscv64")]
extern crate alloc;

#[cfg(target_arch = "riscv64")]
mod console;
#[cfg(target_arch = "riscv64")]
mod lang_item;
#[cfg(target_arch = "riscv64")]
mod logging;
#[cfg(target_arch = "riscv64")]
mod selftest;
#[cfg(target_arch = "riscv64")]
mod trap;

#[cfg(target_arch = "riscv64")]
core::arch::global_asm!(include_str!("entry.S"));

#[cfg(target_arch = "riscv64")]
#[unsafe(no_mangle)]
pub fn rust_main(hart_id: usize) -> ! {
    use mm::address::PhysAddr;

    clear_bss();
    driver::console::init();
    logger::init();
    log::info!("[kernel] booting on hart {}", hart_id);

    unsafe {
        mm::heap::init_heap_allocator();
        mm::frame::init_frame_allocator(
            PhysAddr::new(config::mm::kernel_end_phys()),
            PhysAddr::new(config::mm::RAM_END),
        );
    }
    log::info!(
        "[kernel] {} frames free",
        mm::frame::free_frames()
    );

    mm::vm::page_table::init_kernel_page_table();
    unsafe {
        mm::vm::page_table::activate_kernel_page_table();
    }
    log::info!("[kernel] paging enabled");

    driver::plic::init();
    driver::plic::init_hart(0);
    trap::init_hart();
    arch::interrupt::enable_interrupt();

    selftest::run();

    log::info!("[kernel] setup complete; waiting for interrupts");
    loop {
        arch::interrupt::wait_for_interrupt();
    }
}

#[cfg(target_arch = "riscv64")]
fn clear_bss() {
    unsafe extern "C" {
        fn _sbss();
        fn _ebss();
    }
    (_sbss as usize.._ebss as usize)
        .for_each(|addr| unsafe { (addr as *mut u8).write_volatile(0) });
}

#[cfg(not(target_arch = "riscv64"))]
fn main() {}
