//! Physical page-frame allocator.
//!
//! Frames are 4 KiB and handed out as raw physical addresses. Free frames
//! form an intrusive list: the first word of each free frame holds the
//! address of the next one, so the allocator keeps no metadata outside
//! the frames themselves and both paths are O(1).
//!
//! The pool is installed before paging is enabled and the kernel address
//! space later maps the whole arena at identity, which is what allows a
//! frame's physical address to be used directly as a pointer to its
//! storage.
//!
//! A frame is either on the freelist or held by exactly one owner; the
//! link word is meaningful only while the frame is free, and allocation
//! wipes the entire frame before handing it out.

use config::mm::PAGE_SIZE;
use mutex::SpinNoIrqLock;

use crate::address::PhysAddr;

/// Global frame allocator.
static FRAME_ALLOCATOR: FrameAllocator = FrameAllocator::new();

/// Freelist head and the bookkeeping counters.
struct FreeList {
    /// Physical address of the first free frame; 0 when the list is empty.
    head: usize,
    /// Frames ever installed.
    total: usize,
    /// Frames currently free.
    free: usize,
    /// Successful allocations since initialisation.
    allocations: usize,
}

/// A pool of 4 KiB physical frames with O(1) allocation and release.
///
/// All state sits behind one lock. The zero-fill of a frame being
/// allocated happens inside the critical section, so no caller can
/// observe a frame that still carries its previous contents.
pub struct FrameAllocator {
    list: SpinNoIrqLock<FreeList>,
}

impl FrameAllocator {
    pub const fn new() -> Self {
        FrameAllocator {
            list: SpinNoIrqLock::new(FreeList {
                head: 0,
                total: 0,
                free: 0,
                allocations: 0,
            }),
        }
    }

    /// Installs every frame covered by `[start, end)`.
    ///
    /// `start` is rounded up and `end` down to page boundaries; a range
    /// that covers no whole frame installs nothing.
    ///
    /// # Safety
    /// The range must be memory owned by the caller and not in use for
    /// anything else for as long as the allocator is live.
    pub unsafe fn init(&self, start: PhysAddr, end: PhysAddr) {
        let mut frame = start.page_round_up().to_usize();
        let end = end.page_round_down().to_usize();
        let mut list = self.list.lock();
        while frame + PAGE_SIZE <= end {
            unsafe {
                (frame as *mut usize).write(list.head);
            }
            list.head = frame;
            list.total += 1;
            list.free += 1;
            frame += PAGE_SIZE;
        }
    }

    /// Pops a frame off the freelist and zeroes it.
    ///
    /// Returns `None` when the pool is exhausted; never blocks or
    /// retries.
    pub fn alloc(&self) -> Option<PhysAddr> {
        let mut list = self.list.lock();
        if list.head == 0 {
            return None;
        }
        let frame = list.head;
        // Read the link before the zero-fill wipes it.
        list.head = unsafe { (frame as *const usize).read() };
        list.free -= 1;
        list.allocations += 1;
        unsafe {
            core::ptr::write_bytes(frame as *mut u8, 0, PAGE_SIZE);
        }
        Some(PhysAddr::new(frame))
    }

    /// Returns a frame to the pool.
    ///
    /// `frame` must have come out of [`alloc`](Self::alloc) and must not
    /// be used afterwards. A null address is ignored; a misaligned one is
    /// ignored in release builds and trips an assertion in debug builds.
    pub fn free(&self, frame: PhysAddr) {
        let addr = frame.to_usize();
        if addr == 0 {
            return;
        }
        debug_assert_eq!(addr % PAGE_SIZE, 0, "free: misaligned frame {:#x}", addr);
        if addr % PAGE_SIZE != 0 {
            return;
        }
        let mut list = self.list.lock();
        unsafe {
            (addr as *mut usize).write(list.head);
        }
        list.head = addr;
        list.free += 1;
    }

    /// Frames ever installed.
    pub fn total_frames(&self) -> usize {
        self.list.lock().total
    }

    /// Frames currently free.
    pub fn free_frames(&self) -> usize {
        self.list.lock().free
    }

    /// Successful allocations since initialisation.
    pub fn alloc_count(&self) -> usize {
        self.list.lock().allocations
    }
}

/// Initialises the global frame allocator over `[start, end)`.
///
/// # Safety
/// Must be called only once, with a range of otherwise unused physical
/// memory.
pub unsafe fn init_frame_allocator(start: PhysAddr, end: PhysAddr) {
    unsafe {
        FRAME_ALLOCATOR.init(start, end);
    }
    log::debug!(
        "frame allocator: {} frames in [{:#x}, {:#x})",
        FRAME_ALLOCATOR.total_frames(),
        start.page_round_up().to_usize(),
        end.page_round_down().to_usize(),
    );
}

/// Allocates a zeroed frame from the global pool.
pub fn alloc_frame() -> Option<PhysAddr> {
    FRAME_ALLOCATOR.alloc()
}

/// Returns a frame to the global pool.
pub fn free_frame(frame: PhysAddr) {
    FRAME_ALLOCATOR.free(frame)
}

/// Frames ever installed in the global pool.
pub fn total_frames() -> usize {
    FRAME_ALLOCATOR.total_frames()
}

/// Frames currently free in the global pool.
pub fn free_frames() -> usize {
    FRAME_ALLOCATOR.free_frames()
}

/// Successful allocations from the global pool.
pub fn alloc_count() -> usize {
    FRAME_ALLOCATOR.alloc_count()
}

#[cfg(test)]
mod tests {
    use alloc::alloc::{Layout, alloc_zeroed};

    use super::*;

    /// Leaks a page-aligned arena of `frames` pages and returns its range.
    fn arena(frames: usize) -> (PhysAddr, PhysAddr) {
        let layout = Layout::from_size_align(frames * PAGE_SIZE, PAGE_SIZE).unwrap();
        let base = unsafe { alloc_zeroed(layout) } as usize;
        assert_ne!(base, 0);
        (PhysAddr::new(base), PhysAddr::new(base + frames * PAGE_SIZE))
    }

    #[test]
    fn init_installs_every_covered_frame() {
        let pool = FrameAllocator::new();
        let (start, end) = arena(16);
        unsafe { pool.init(start, end) };
        assert_eq!(pool.total_frames(), 16);
        assert_eq!(pool.free_frames(), 16);
        assert_eq!(pool.alloc_count(), 0);
    }

    #[test]
    fn init_aligns_inwards() {
        let pool = FrameAllocator::new();
        let (start, end) = arena(4);
        // Chop one byte off each end: the first and last frames are no
        // longer fully covered.
        unsafe {
            pool.init(
                PhysAddr::new(start.to_usize() + 1),
                PhysAddr::new(end.to_usize() - 1),
            )
        };
        assert_eq!(pool.total_frames(), 2);
    }

    #[test]
    fn empty_range_installs_nothing() {
        let pool = FrameAllocator::new();
        let (start, _) = arena(1);
        unsafe { pool.init(start, start) };
        assert_eq!(pool.total_frames(), 0);
        assert_eq!(pool.alloc(), None);
    }

    #[test]
    fn alloc_free_cycle() {
        let pool = FrameAllocator::new();
        let (start, end) = arena(16);
        unsafe { pool.init(start, end) };

        let p1 = pool.alloc().unwrap();
        assert_eq!(p1.to_usize() % PAGE_SIZE, 0);
        let p2 = pool.alloc().unwrap();
        assert_ne!(p1, p2);
        assert_eq!(pool.free_frames(), 14);
        assert_eq!(pool.alloc_count(), 2);

        pool.free(p1);
        pool.free(p2);
        assert_eq!(pool.free_frames(), 16);
        assert_eq!(pool.total_frames(), 16);
    }

    #[test]
    fn allocated_frames_are_zeroed() {
        let pool = FrameAllocator::new();
        let (start, end) = arena(2);
        unsafe { pool.init(start, end) };

        let frame = pool.alloc().unwrap();
        let bytes = unsafe { core::slice::from_raw_parts(frame.to_usize() as *const u8, PAGE_SIZE) };
        assert!(bytes.iter().all(|&b| b == 0));

        // Dirty the frame, recycle it, and check the next allocation of
        // the same frame comes back clean. The freelist is LIFO, so the
        // frame just freed is the next one out.
        unsafe { core::ptr::write_bytes(frame.to_usize() as *mut u8, 0xAB, PAGE_SIZE) };
        pool.free(frame);
        let again = pool.alloc().unwrap();
        assert_eq!(again, frame);
        let bytes = unsafe { core::slice::from_raw_parts(again.to_usize() as *const u8, PAGE_SIZE) };
        assert!(bytes.iter().all(|&b| b == 0));
    }

    #[test]
    fn exhaustion_reports_none() {
        let pool = FrameAllocator::new();
        let (start, end) = arena(3);
        unsafe { pool.init(start, end) };

        let mut held = [None; 3];
        for slot in held.iter_mut() {
            *slot = pool.alloc();
            assert!(slot.is_some());
        }
        assert_eq!(pool.alloc(), None);
        assert_eq!(pool.free_frames(), 0);

        for frame in held.into_iter().flatten() {
            pool.free(frame);
        }
        assert_eq!(pool.free_frames(), 3);
    }

    #[test]
    fn counters_balance() {
        let pool = FrameAllocator::new();
        let (start, end) = arena(8);
        unsafe { pool.init(start, end) };

        let a = pool.alloc().unwrap();
        let b = pool.alloc().unwrap();
        let outstanding = 2;
        assert_eq!(pool.free_frames() + outstanding, pool.total_frames());
        pool.free(b);
        assert_eq!(pool.free_frames() + 1, pool.total_frames());
        pool.free(a);
        assert_eq!(pool.free_frames(), pool.total_frames());
    }

    #[test]
    fn null_free_is_ignored() {
        let pool = FrameAllocator::new();
        let (start, end) = arena(1);
        unsafe { pool.init(start, end) };
        pool.free(PhysAddr::new(0));
        assert_eq!(pool.free_frames(), 1);
    }
}
