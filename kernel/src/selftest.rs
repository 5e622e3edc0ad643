//! On-target smoke scenarios, run once at the end of bring-up.
//!
//! These mirror the checks the kernel grew up with: straight-line
//! exercises of the frame allocator, the page-table engine, the kernel
//! address space and the timer path, fatal on the first mismatch.

use core::sync::atomic::Ordering;

use alloc::vec::Vec;

use config::board::{CLOCK_FREQ, TIMER_INTERVAL};
use config::mm::PAGE_SIZE;
use mm::address::VirtAddr;
use mm::frame::{alloc_count, alloc_frame, free_frame, free_frames};
use mm::vm::page_table::{KERNEL_PAGE_TABLE, PageTable};
use mm::vm::pte::PteFlags;

use crate::trap::TICKS;

pub fn run() {
    physical_memory();
    page_table();
    kernel_space();
    timer_ticks();
    log::info!("[selftest] all scenarios passed");
}

fn physical_memory() {
    let free_before = free_frames();
    let allocs_before = alloc_count();

    let p1 = alloc_frame().expect("selftest: frame allocation failed");
    let p2 = alloc_frame().expect("selftest: frame allocation failed");
    assert_ne!(p1, p2, "selftest: allocator returned the same frame twice");
    assert_eq!(p1.to_usize() % PAGE_SIZE, 0, "selftest: frame misaligned");

    let bytes = unsafe { core::slice::from_raw_parts(p1.to_usize() as *const u8, PAGE_SIZE) };
    assert!(
        bytes.iter().all(|&b| b == 0),
        "selftest: allocated frame not zeroed"
    );
    unsafe {
        (p1.to_usize() as *mut u32).write_volatile(0x1234_5678);
        assert_eq!((p1.to_usize() as *const u32).read_volatile(), 0x1234_5678);
    }

    free_frame(p1);
    free_frame(p2);

    // A small batch, the way callers that set up several pages at once
    // hit the allocator.
    let batch: Vec<_> = (0..8).map(|_| alloc_frame().unwrap()).collect();
    for (i, a) in batch.iter().enumerate() {
        for b in &batch[i + 1..] {
            assert_ne!(a, b, "selftest: duplicate frame in batch");
        }
    }
    for frame in batch {
        free_frame(frame);
    }

    assert_eq!(free_frames(), free_before);
    assert_eq!(alloc_count(), allocs_before + 10);
    log::info!("[selftest] physical memory ok");
}

fn page_table() {
    let free_before = free_frames();

    let mut pt = PageTable::build().expect("selftest: page table root");
    let frame = alloc_frame().expect("selftest: leaf frame");
    let va = VirtAddr::new(0x100_0000);
    pt.map_range(va, PAGE_SIZE, frame, PteFlags::R | PteFlags::W)
        .expect("selftest: map failed");

    assert_eq!(pt.resolve(va), Some(frame));
    let entry = pt
        .find_entry(va.page_number())
        .expect("selftest: leaf entry missing");
    assert!(entry.is_valid() && entry.is_leaf());
    assert!(entry.flags().contains(PteFlags::R | PteFlags::W));
    assert!(!entry.flags().contains(PteFlags::X));

    assert_eq!(
        pt.map_range(va, PAGE_SIZE, frame, PteFlags::R),
        Err(mm::mm_error::VmError::AlreadyMapped)
    );

    pt.unmap_range(va, PAGE_SIZE);
    assert_eq!(pt.resolve(va), None);
    pt.teardown();
    assert_eq!(free_frames(), free_before);
    log::info!("[selftest] page table ok");
}

fn kernel_space() {
    use config::device::UART0_BASE;
    use config::mm::RAM_START;

    for addr in [UART0_BASE, RAM_START, RAM_START + 0x123_4567] {
        let resolved = KERNEL_PAGE_TABLE
            .resolve(VirtAddr::new(addr))
            .expect("selftest: kernel mapping missing");
        assert_eq!(resolved.to_usize(), addr);
    }
    // Full tree dump; visible with LOG=debug.
    KERNEL_PAGE_TABLE.dump();
    log::info!("[selftest] kernel space ok");
}

/// Busy-waits through five timer ticks and checks the cadence against
/// the programmed interval.
fn timer_ticks() {
    let start_ticks = TICKS.load(Ordering::Relaxed);
    let start_time = arch::time::get_time();
    while TICKS.load(Ordering::Relaxed) < start_ticks + 5 {
        core::hint::spin_loop();
    }
    let elapsed = arch::time::get_time() - start_time;

    assert!(
        elapsed >= 4 * TIMER_INTERVAL,
        "selftest: ticks arrived too fast"
    );
    assert!(
        elapsed <= 6 * TIMER_INTERVAL,
        "selftest: ticks arrived too slow"
    );
    log::info!(
        "[selftest] timer ok: 5 ticks in {} ms",
        elapsed / (CLOCK_FREQ / 1000)
    );
}
