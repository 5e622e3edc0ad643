#![no_std]

pub mod spin_mutex;

pub use spin_mutex::SpinMutex;

pub type SpinLock<T> = SpinMutex<T, Spin>;
pub type SpinNoIrqLock<T> = SpinMutex<T, SpinNoIrq>;

/// Hooks a lock runs around its critical section.
///
/// `before_lock` runs ahead of the acquire loop and its result rides
/// along in the guard; `after_unlock` runs once the lock has been
/// released.
pub trait MutexSupport {
    type GuardData;
    fn before_lock() -> Self::GuardData;
    fn after_unlock(_: &mut Self::GuardData);
}

/// Plain spinning; interrupts are left alone.
pub struct Spin;

impl MutexSupport for Spin {
    type GuardData = ();
    fn before_lock() -> Self::GuardData {}
    fn after_unlock(_: &mut Self::GuardData) {}
}

/// Saves the interrupt-enable state on entry to a critical section and
/// restores it when the guard drops. A lock taken under this support can
/// be shared with interrupt handlers without deadlocking.
pub struct SieGuard(bool);

impl SieGuard {
    fn new() -> Self {
        let old_sie = {
            #[cfg(target_arch = "riscv64")]
            {
                let sie = riscv::register::sstatus::read().sie();
                unsafe {
                    riscv::register::sstatus::clear_sie();
                }
                sie
            }
            #[cfg(not(target_arch = "riscv64"))]
            false
        };
        Self(old_sie)
    }
}

impl Drop for SieGuard {
    fn drop(&mut self) {
        #[cfg(target_arch = "riscv64")]
        if self.0 {
            unsafe {
                riscv::register::sstatus::set_sie();
            }
        }
        #[cfg(not(target_arch = "riscv64"))]
        let _ = self.0;
    }
}

/// Spinning with interrupts masked for the duration of the hold.
pub struct SpinNoIrq;

impl MutexSupport for SpinNoIrq {
    type GuardData = SieGuard;
    fn before_lock() -> Self::GuardData {
        SieGuard::new()
    }
    fn after_unlock(_: &mut Self::GuardData) {}
}
