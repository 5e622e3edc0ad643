//! Sv39 page tables: construction, mapping, translation and teardown.
//!
//! A [`PageTable`] owns its root frame; every other table in the tree is
//! owned through the valid non-leaf entry of its parent. There are no
//! parent pointers and no side lists of table frames: traversal always
//! starts at the root and descends by VPN index, and
//! [`PageTable::teardown`] releases the interior frames with one
//! post-order walk.
//!
//! Tables live in frames taken from the frame allocator, and the engine
//! runs with the physical arena mapped at identity, so a table's physical
//! address doubles as the pointer through which it is read and written.

use core::fmt::{self, Write};

use lazy_static::lazy_static;

use arch::mm::sfence_vma;
use config::{
    device::{
        CLINT_BASE, CLINT_SIZE, PLIC_BASE, PLIC_SIZE, UART0_BASE, UART0_SIZE, VIRTIO0_BASE,
        VIRTIO0_SIZE,
    },
    mm::{
        PAGE_OFFSET_WIDTH, PAGE_SIZE, PAGE_TABLE_LEVELS, PTE_PER_TABLE, RAM_END, RAM_START,
        VPN_INDEX_WIDTH,
    },
};

use super::pte::{PageTableEntry, PteFlags};
use crate::{
    address::{PhysAddr, PhysPageNum, VirtAddr, VirtPageNum},
    frame::{alloc_frame, free_frame},
    mm_error::{VmError, VmResult},
};

/// A three-level Sv39 page table rooted at one physical frame.
#[derive(Debug)]
pub struct PageTable {
    root: PhysPageNum,
}

lazy_static! {
    /// The kernel address space: identity mappings over the MMIO windows
    /// and the whole physical arena. Built once, on first use.
    pub static ref KERNEL_PAGE_TABLE: PageTable = PageTable::build_kernel_page_table();
}

impl PageTable {
    /// Builds a page table with an empty root.
    ///
    /// The root frame comes from the frame allocator pre-zeroed, so every
    /// entry starts out invalid.
    pub fn build() -> VmResult<Self> {
        let root = alloc_frame().ok_or(VmError::OutOfMemory)?;
        Ok(PageTable {
            root: root.page_number(),
        })
    }

    /// Gets the physical page number of the root table.
    pub fn root(&self) -> PhysPageNum {
        self.root
    }

    /// Returns a mutable reference to the leaf entry mapping `vpn`,
    /// creating any missing intermediate table on the way down. The
    /// returned entry may be invalid.
    ///
    /// Returns [`VmError::OutOfMemory`] if an intermediate table is
    /// needed but no frame is left.
    pub fn find_entry_force(&mut self, vpn: VirtPageNum) -> VmResult<&mut PageTableEntry> {
        let mut table = unsafe { table_mut(self.root) };
        for (level, index) in vpn.indices().into_iter().enumerate().rev() {
            let entry = &mut table[index];
            if level == 0 {
                return Ok(entry);
            }
            if !entry.is_valid() {
                let child = alloc_frame().ok_or(VmError::OutOfMemory)?;
                *entry = PageTableEntry::new(child.page_number(), PteFlags::V);
            }
            table = unsafe { table_mut(entry.ppn()) };
        }
        unreachable!();
    }

    /// Returns a mutable reference to the leaf entry mapping `vpn`, or
    /// `None` if an intermediate table is missing. The returned entry may
    /// be invalid.
    pub fn find_entry(&mut self, vpn: VirtPageNum) -> Option<&mut PageTableEntry> {
        let mut table = unsafe { table_mut(self.root) };
        for (level, index) in vpn.indices().into_iter().enumerate().rev() {
            let entry = &mut table[index];
            if level == 0 {
                return Some(entry);
            }
            if !entry.is_valid() {
                return None;
            }
            table = unsafe { table_mut(entry.ppn()) };
        }
        unreachable!();
    }

    /// Non-mutating walk; returns a copy of the leaf entry for `vpn`.
    fn lookup(&self, vpn: VirtPageNum) -> Option<PageTableEntry> {
        let mut table = unsafe { table_ref(self.root) };
        for (level, index) in vpn.indices().into_iter().enumerate().rev() {
            let entry = table[index];
            if level == 0 {
                return Some(entry);
            }
            if !entry.is_valid() {
                return None;
            }
            table = unsafe { table_ref(entry.ppn()) };
        }
        unreachable!();
    }

    /// Maps `[va, va + size)` to `[pa, pa + size)` with `flags` (the `V`
    /// bit is implied). Exactly the pages covering the byte range are
    /// mapped, starting at the page-aligned `va`; `va` and `pa` must
    /// share their in-page offset.
    ///
    /// Fails with [`VmError::AlreadyMapped`] on the first page that
    /// already has a valid leaf entry. Pages installed before the failure
    /// stay installed; callers that need atomicity validate first or
    /// unmap explicitly. A TLB fence covers the hart once every page is
    /// in place.
    pub fn map_range(
        &mut self,
        va: VirtAddr,
        size: usize,
        pa: PhysAddr,
        flags: PteFlags,
    ) -> VmResult<()> {
        if size == 0 {
            return Ok(());
        }
        let mut a = va.page_round_down().to_usize();
        // Inclusive last page: no overflow for a range ending at the top
        // of the address space.
        let last = (va.to_usize() + size - 1) & !(PAGE_SIZE - 1);
        let mut pa = pa.page_round_down().to_usize();
        loop {
            let entry = self.find_entry_force(VirtAddr::new(a).page_number())?;
            if entry.is_valid() {
                return Err(VmError::AlreadyMapped);
            }
            *entry = PageTableEntry::new(
                PhysAddr::new(pa).page_number(),
                flags | PteFlags::V,
            );
            if a == last {
                break;
            }
            a += PAGE_SIZE;
            pa += PAGE_SIZE;
        }
        sfence_vma();
        Ok(())
    }

    /// Unmaps every page covering `[va, va + size)` and returns the
    /// backing frames to the allocator.
    ///
    /// The engine owns mapped frames: callers must only unmap pages whose
    /// backing they are done with (share by [`duplicate`](Self::duplicate)
    /// first, if needed). Pages without a valid entry are skipped. A TLB
    /// fence covers the hart at the end.
    pub fn unmap_range(&mut self, va: VirtAddr, size: usize) {
        if size == 0 {
            return;
        }
        let mut a = va.page_round_down().to_usize();
        let last = (va.to_usize() + size - 1) & !(PAGE_SIZE - 1);
        loop {
            if let Some(entry) = self.find_entry(VirtAddr::new(a).page_number()) {
                if entry.is_valid() {
                    let frame = entry.ppn().address();
                    *entry = PageTableEntry::default();
                    free_frame(frame);
                }
            }
            if a == last {
                break;
            }
            a += PAGE_SIZE;
        }
        sfence_vma();
    }

    /// Translates `va` through the table. Returns `None` unless the walk
    /// ends at a valid leaf entry.
    pub fn resolve(&self, va: VirtAddr) -> Option<PhysAddr> {
        let entry = self.lookup(va.page_number())?;
        if !entry.is_valid() || !entry.is_leaf() {
            return None;
        }
        Some(PhysAddr::new(
            entry.ppn().address().to_usize() | va.page_offset(),
        ))
    }

    /// Grows a user-style space from `old_size` to `new_size` bytes by
    /// mapping freshly allocated R|W|U pages over
    /// `[round_up(old_size), new_size)`.
    ///
    /// On failure every page this call mapped is unmapped and freed
    /// before the error is reported.
    pub fn grow(&mut self, old_size: usize, new_size: usize) -> VmResult<()> {
        debug_assert!(new_size >= old_size, "grow: shrinking range");
        let start = page_round_up(old_size);
        let mut a = start;
        while a + PAGE_SIZE <= new_size {
            let Some(frame) = alloc_frame() else {
                self.unmap_range(VirtAddr::new(start), a - start);
                return Err(VmError::OutOfMemory);
            };
            if let Err(e) = self.map_range(
                VirtAddr::new(a),
                PAGE_SIZE,
                frame,
                PteFlags::R | PteFlags::W | PteFlags::U,
            ) {
                free_frame(frame);
                self.unmap_range(VirtAddr::new(start), a - start);
                return Err(e);
            }
            a += PAGE_SIZE;
        }
        Ok(())
    }

    /// Shrinks a user-style space from `old_size` to `new_size` bytes,
    /// unmapping and freeing every page in `[round_up(new_size), old_size)`.
    pub fn shrink(&mut self, old_size: usize, new_size: usize) {
        debug_assert!(new_size <= old_size, "shrink: growing range");
        let mut a = page_round_up(new_size);
        while a + PAGE_SIZE <= old_size {
            self.unmap_range(VirtAddr::new(a), PAGE_SIZE);
            a += PAGE_SIZE;
        }
    }

    /// Copies the first `size` bytes of this space into a new table:
    /// every present page is byte-copied into a fresh frame mapped R|W|U,
    /// absent pages stay absent.
    ///
    /// On failure the partially built copy is torn down completely.
    pub fn duplicate(&self, size: usize) -> VmResult<PageTable> {
        let mut new = PageTable::build()?;
        let mut copied = 0;
        while copied < size {
            let va = VirtAddr::new(copied);
            if let Some(src) = self.resolve(va) {
                let Some(dst) = alloc_frame() else {
                    Self::discard(new, copied);
                    return Err(VmError::OutOfMemory);
                };
                unsafe {
                    core::ptr::copy_nonoverlapping(
                        src.to_usize() as *const u8,
                        dst.to_usize() as *mut u8,
                        PAGE_SIZE,
                    );
                }
                if let Err(e) = new.map_range(
                    va,
                    PAGE_SIZE,
                    dst,
                    PteFlags::R | PteFlags::W | PteFlags::U,
                ) {
                    free_frame(dst);
                    Self::discard(new, copied);
                    return Err(e);
                }
            }
            copied += PAGE_SIZE;
        }
        Ok(new)
    }

    /// Releases a partially built copy: mapped frames first, then the
    /// tree itself.
    fn discard(mut table: PageTable, size: usize) {
        table.unmap_range(VirtAddr::new(0), size);
        table.teardown();
    }

    /// Frees every interior table frame and finally the root.
    ///
    /// Leaf frames are left alone: release them through
    /// [`unmap_range`](Self::unmap_range) or [`shrink`](Self::shrink)
    /// before tearing the tree down.
    pub fn teardown(self) {
        free_tree(self.root, PAGE_TABLE_LEVELS - 1);
    }

    /// Logs the tree, one line per valid entry. Any level-0 entry prints
    /// as a leaf, even a malformed one without R/W/X bits.
    pub fn dump(&self) {
        log::debug!("page table @ {:#x}", self.root.address().to_usize());
        dump_table(self.root, PAGE_TABLE_LEVELS - 1, 0, 0);
    }

    /// Builds the kernel address space: identity mappings over the device
    /// windows and the physical arena.
    ///
    /// Runs before paging is enabled, which is what lets the engine treat
    /// the frame allocator's physical addresses as pointers.
    fn build_kernel_page_table() -> Self {
        let mut table = PageTable::build().expect("out of memory building the kernel page table");
        let rw = PteFlags::R | PteFlags::W;

        table
            .map_range(VirtAddr::new(UART0_BASE), UART0_SIZE, PhysAddr::new(UART0_BASE), rw)
            .expect("kernel page table: UART0 window");
        table
            .map_range(VirtAddr::new(PLIC_BASE), PLIC_SIZE, PhysAddr::new(PLIC_BASE), rw)
            .expect("kernel page table: PLIC window");
        table
            .map_range(VirtAddr::new(CLINT_BASE), CLINT_SIZE, PhysAddr::new(CLINT_BASE), rw)
            .expect("kernel page table: CLINT window");
        table
            .map_range(
                VirtAddr::new(VIRTIO0_BASE),
                VIRTIO0_SIZE,
                PhysAddr::new(VIRTIO0_BASE),
                rw,
            )
            .expect("kernel page table: VIRTIO0 window");
        table
            .map_range(
                VirtAddr::new(RAM_START),
                RAM_END - RAM_START,
                PhysAddr::new(RAM_START),
                rw | PteFlags::X,
            )
            .expect("kernel page table: physical arena");
        table
    }
}

/// Forces construction of the kernel page table. Only the first call
/// does any work.
pub fn init_kernel_page_table() {
    lazy_static::initialize(&KERNEL_PAGE_TABLE);
    log::info!(
        "[kernel] kernel page table built, root at {:#x}",
        KERNEL_PAGE_TABLE.root().address().to_usize()
    );
}

/// Activates the kernel page table on the calling hart.
///
/// # Safety
/// [`init_kernel_page_table`] must have completed, and the kernel must
/// only touch addresses the kernel page table covers from here on.
pub unsafe fn activate_kernel_page_table() {
    unsafe {
        arch::mm::enable_paging(KERNEL_PAGE_TABLE.root().to_usize());
    }
}

/// Treats the frame at `ppn` as a live page table.
///
/// # Safety
/// `ppn` must refer to a frame holding a page table reachable through
/// identity mapping, with no other live mutable reference to it.
unsafe fn table_mut(ppn: PhysPageNum) -> &'static mut [PageTableEntry; PTE_PER_TABLE] {
    unsafe { &mut *(ppn.address().to_usize() as *mut _) }
}

/// Shared-view counterpart of [`table_mut`].
///
/// # Safety
/// Same requirements as [`table_mut`], minus exclusivity.
unsafe fn table_ref(ppn: PhysPageNum) -> &'static [PageTableEntry; PTE_PER_TABLE] {
    unsafe { &*(ppn.address().to_usize() as *const _) }
}

fn page_round_up(size: usize) -> usize {
    (size + PAGE_SIZE - 1) & !(PAGE_SIZE - 1)
}

/// Post-order walk freeing interior table frames, then the table itself.
fn free_tree(table_ppn: PhysPageNum, level: usize) {
    let table = unsafe { table_ref(table_ppn) };
    for entry in table.iter() {
        if entry.is_valid() && !entry.is_leaf() && level > 0 {
            free_tree(entry.ppn(), level - 1);
        }
    }
    free_frame(table_ppn.address());
}

fn dump_table(table_ppn: PhysPageNum, level: usize, va_base: usize, depth: usize) {
    let table = unsafe { table_ref(table_ppn) };
    for (i, entry) in table.iter().enumerate() {
        if !entry.is_valid() {
            continue;
        }
        let va = va_base + (i << (PAGE_OFFSET_WIDTH + VPN_INDEX_WIDTH * level));
        let pa = entry.ppn().address().to_usize();
        let size = PAGE_SIZE << (VPN_INDEX_WIDTH * level);
        if entry.is_leaf() || level == 0 {
            log::debug!(
                "{:indent$}LEAF: VA [{:#x}, {:#x}] => PA {:#x} size {:#x} flags {}",
                "",
                va,
                va + size - 1,
                pa,
                size,
                FlagLetters(entry.flags()),
                indent = depth,
            );
        } else {
            log::debug!(
                "{:indent$}NODE: VA range [{:#x}, {:#x}] -> child PA {:#x}",
                "",
                va,
                va + size - 1,
                pa,
                indent = depth,
            );
            dump_table(entry.ppn(), level - 1, va, depth + 2);
        }
    }
}

/// Prints flags as the fixed-position letters `VRWXUGAD`, with `-` for
/// clear bits.
struct FlagLetters(PteFlags);

impl fmt::Display for FlagLetters {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        const LETTERS: [(PteFlags, char); 8] = [
            (PteFlags::V, 'V'),
            (PteFlags::R, 'R'),
            (PteFlags::W, 'W'),
            (PteFlags::X, 'X'),
            (PteFlags::U, 'U'),
            (PteFlags::G, 'G'),
            (PteFlags::A, 'A'),
            (PteFlags::D, 'D'),
        ];
        for (bit, letter) in LETTERS {
            f.write_char(if self.0.contains(bit) { letter } else { '-' })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use alloc::alloc::{Layout, alloc_zeroed};
    use alloc::vec::Vec;

    use super::*;
    use crate::frame::{alloc_count, free_frames, init_frame_allocator, total_frames};

    const POOL_FRAMES: usize = 512;

    /// The global allocator may be initialised only once, so the whole
    /// engine is exercised as one sequence of scenarios over a shared
    /// pool, the way the kernel itself runs them.
    #[test]
    fn page_table_scenarios() {
        let layout = Layout::from_size_align(POOL_FRAMES * PAGE_SIZE, PAGE_SIZE).unwrap();
        let base = unsafe { alloc_zeroed(layout) } as usize;
        assert_ne!(base, 0);
        unsafe {
            init_frame_allocator(
                PhysAddr::new(base),
                PhysAddr::new(base + POOL_FRAMES * PAGE_SIZE),
            );
        }
        assert_eq!(total_frames(), POOL_FRAMES);
        assert_eq!(free_frames(), POOL_FRAMES);

        map_resolve_unmap_teardown();
        grow_and_shrink();
        exhaustion_and_rollback();
        sparse_duplicate();

        // Every scenario returned its frames.
        assert_eq!(free_frames(), POOL_FRAMES);
        assert!(alloc_count() > 0);

        kernel_space();
    }

    fn map_resolve_unmap_teardown() {
        let mut pt = PageTable::build().unwrap();
        let p1 = alloc_frame().unwrap();
        let p2 = alloc_frame().unwrap();
        // Frames are installed in ascending order and popped LIFO, so two
        // consecutive allocations from a fresh pool are adjacent and
        // descending.
        assert_eq!(p1.to_usize() - p2.to_usize(), PAGE_SIZE);

        let va = VirtAddr::new(0x100_0000);
        pt.map_range(va, 2 * PAGE_SIZE, p2, PteFlags::R | PteFlags::W)
            .unwrap();

        assert_eq!(pt.resolve(va), Some(p2));
        assert_eq!(
            pt.resolve(VirtAddr::new(0x100_0FFF)).map(PhysAddr::to_usize),
            Some(p2.to_usize() + 0xFFF)
        );
        assert_eq!(pt.resolve(VirtAddr::new(0x100_1000)), Some(p1));
        assert_eq!(pt.resolve(VirtAddr::new(0x100_2000)), None);
        // An address whose level-1 table does not even exist.
        assert_eq!(pt.resolve(VirtAddr::new(0x4000_0000)), None);

        // Mapping over a live leaf is refused.
        assert_eq!(
            pt.map_range(va, PAGE_SIZE, p2, PteFlags::R),
            Err(VmError::AlreadyMapped)
        );

        // Teardown accounting: unmap releases the two leaf frames, the
        // teardown the root plus one table per level below it.
        let before = free_frames();
        pt.unmap_range(va, 2 * PAGE_SIZE);
        assert_eq!(pt.resolve(va), None);
        assert_eq!(pt.resolve(VirtAddr::new(0x100_1000)), None);
        pt.teardown();
        assert_eq!(free_frames(), before + 2 + 3);
    }

    fn grow_and_shrink() {
        let before = free_frames();
        let mut pt = PageTable::build().unwrap();
        pt.grow(0, 3 * PAGE_SIZE).unwrap();

        for page in 0..3 {
            let pa = pt
                .resolve(VirtAddr::new(page * PAGE_SIZE))
                .expect("grown page must resolve");
            // The backing frame is real memory here; prove it holds data.
            unsafe {
                (pa.to_usize() as *mut u8).write(page as u8 + 1);
                assert_eq!((pa.to_usize() as *const u8).read(), page as u8 + 1);
            }
        }
        assert_eq!(pt.resolve(VirtAddr::new(3 * PAGE_SIZE)), None);

        // Growing to the same size maps nothing.
        pt.grow(3 * PAGE_SIZE, 3 * PAGE_SIZE).unwrap();

        pt.shrink(3 * PAGE_SIZE, PAGE_SIZE);
        assert!(pt.resolve(VirtAddr::new(0)).is_some());
        assert_eq!(pt.resolve(VirtAddr::new(PAGE_SIZE)), None);
        assert_eq!(pt.resolve(VirtAddr::new(2 * PAGE_SIZE)), None);

        pt.shrink(PAGE_SIZE, 0);
        pt.teardown();
        assert_eq!(free_frames(), before);
    }

    fn exhaustion_and_rollback() {
        let before = free_frames();
        let mut pt = PageTable::build().unwrap();

        let mut held = Vec::new();
        while let Some(frame) = alloc_frame() {
            held.push(frame);
        }
        assert_eq!(free_frames(), 0);

        assert!(matches!(PageTable::build(), Err(VmError::OutOfMemory)));
        assert_eq!(pt.grow(0, 2 * PAGE_SIZE), Err(VmError::OutOfMemory));
        assert_eq!(
            pt.map_range(
                VirtAddr::new(0x40_0000),
                PAGE_SIZE,
                PhysAddr::new(0x1000),
                PteFlags::R
            ),
            Err(VmError::OutOfMemory)
        );

        for frame in held.drain(..) {
            free_frame(frame);
        }

        // The failed grow rolled back cleanly; retrying now succeeds.
        pt.grow(0, 2 * PAGE_SIZE).unwrap();
        assert!(pt.resolve(VirtAddr::new(PAGE_SIZE)).is_some());
        pt.shrink(2 * PAGE_SIZE, 0);
        pt.teardown();
        assert_eq!(free_frames(), before);
    }

    fn sparse_duplicate() {
        let before = free_frames();
        let mut src = PageTable::build().unwrap();

        // Pages at 0x0 and 0x2000 only; 0x1000 stays a hole.
        let fa = alloc_frame().unwrap();
        let fb = alloc_frame().unwrap();
        unsafe {
            core::ptr::write_bytes(fa.to_usize() as *mut u8, 0x5A, PAGE_SIZE);
            core::ptr::write_bytes(fb.to_usize() as *mut u8, 0xA5, PAGE_SIZE);
        }
        src.map_range(
            VirtAddr::new(0),
            PAGE_SIZE,
            fa,
            PteFlags::R | PteFlags::W | PteFlags::U,
        )
        .unwrap();
        src.map_range(
            VirtAddr::new(2 * PAGE_SIZE),
            PAGE_SIZE,
            fb,
            PteFlags::R | PteFlags::W | PteFlags::U,
        )
        .unwrap();

        let dst = src.duplicate(3 * PAGE_SIZE).unwrap();

        let dst0 = dst.resolve(VirtAddr::new(0)).unwrap();
        let dst2 = dst.resolve(VirtAddr::new(2 * PAGE_SIZE)).unwrap();
        assert_eq!(dst.resolve(VirtAddr::new(PAGE_SIZE)), None);
        assert_ne!(dst0, fa);
        assert_ne!(dst2, fb);
        unsafe {
            assert_eq!((dst0.to_usize() as *const u8).read(), 0x5A);
            assert_eq!((dst2.to_usize() as *const u8).read(), 0xA5);
            // No aliasing: mutating one side leaves the other untouched.
            (fa.to_usize() as *mut u8).write(0x11);
            assert_eq!((dst0.to_usize() as *const u8).read(), 0x5A);
            (dst2.to_usize() as *mut u8).write(0x22);
            assert_eq!((fb.to_usize() as *const u8).read(), 0xA5);
        }

        // A copy attempted with only two free frames dies building the
        // leaf path and tears its partial tree down completely.
        let mut held = Vec::new();
        while let Some(frame) = alloc_frame() {
            held.push(frame);
        }
        free_frame(held.pop().unwrap());
        free_frame(held.pop().unwrap());
        assert!(matches!(
            src.duplicate(PAGE_SIZE),
            Err(VmError::OutOfMemory)
        ));
        assert_eq!(free_frames(), 2);
        for frame in held.drain(..) {
            free_frame(frame);
        }

        let mut dst = dst;
        dst.unmap_range(VirtAddr::new(0), 3 * PAGE_SIZE);
        dst.teardown();
        src.unmap_range(VirtAddr::new(0), 3 * PAGE_SIZE);
        src.teardown();
        assert_eq!(free_frames(), before);
    }

    fn kernel_space() {
        init_kernel_page_table();
        // Idempotent: a second call is a no-op.
        init_kernel_page_table();

        let identity = [
            UART0_BASE,
            PLIC_BASE + PLIC_SIZE - 1,
            CLINT_BASE + 0x100,
            VIRTIO0_BASE,
            RAM_START + 0x1234,
            RAM_END - 1,
        ];
        for addr in identity {
            assert_eq!(
                KERNEL_PAGE_TABLE.resolve(VirtAddr::new(addr)).map(PhysAddr::to_usize),
                Some(addr),
                "identity mapping broken at {addr:#x}"
            );
        }
        // Holes around the VIRTIO window and past the arena stay unmapped.
        assert_eq!(KERNEL_PAGE_TABLE.resolve(VirtAddr::new(VIRTIO0_BASE + VIRTIO0_SIZE)), None);
        assert_eq!(KERNEL_PAGE_TABLE.resolve(VirtAddr::new(RAM_END)), None);

        KERNEL_PAGE_TABLE.dump();
    }
}
