//! One 32-bit memory-mapped register.
//!
//! On hardware this is a transparent wrapper around
//! `volatile_register::RW`, so a `RegisterBlock` laid over a peripheral
//! base address behaves exactly like the vendor header's
//! `volatile uint32_t` map. Under test the volatile cell is replaced by
//! a plain word that appends every write to a per-thread log, letting
//! tests pin down the order configuration writes land in rather than
//! just the final register state.

#[cfg(not(test))]
mod imp {
    use volatile_register::RW;

    #[repr(transparent)]
    pub struct Reg {
        inner: RW<u32>,
    }

    impl Reg {
        #[inline]
        pub fn read(&self) -> u32 {
            self.inner.read()
        }

        /// # Safety
        ///
        /// Register writes have hardware side effects; the caller owns
        /// the value and the bring-up/ISR write discipline.
        #[inline]
        pub unsafe fn write(&self, value: u32) {
            self.inner.write(value)
        }

        /// # Safety
        ///
        /// Same contract as [`Reg::write`].
        #[inline]
        pub unsafe fn modify<F>(&self, f: F)
        where
            F: FnOnce(u32) -> u32,
        {
            self.inner.modify(f)
        }
    }
}

#[cfg(test)]
mod imp {
    use std::cell::{Cell, RefCell};

    /// One recorded register write.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct Write {
        pub addr: usize,
        pub value: u32,
    }

    thread_local! {
        static WRITES: RefCell<Vec<Write>> = RefCell::new(Vec::new());
    }

    /// Forget all writes recorded on this thread so far.
    pub fn reset_writes() {
        WRITES.with(|log| log.borrow_mut().clear());
    }

    /// This thread's recorded writes, oldest first.
    pub fn writes() -> Vec<Write> {
        WRITES.with(|log| log.borrow().clone())
    }

    #[repr(transparent)]
    pub struct Reg {
        cell: Cell<u32>,
    }

    impl Reg {
        pub fn read(&self) -> u32 {
            self.cell.get()
        }

        pub unsafe fn write(&self, value: u32) {
            self.cell.set(value);
            WRITES.with(|log| {
                log.borrow_mut().push(Write {
                    addr: self.addr(),
                    value,
                })
            });
        }

        pub unsafe fn modify<F>(&self, f: F)
        where
            F: FnOnce(u32) -> u32,
        {
            self.write(f(self.read()));
        }

        /// The register's location, for matching log entries.
        pub fn addr(&self) -> usize {
            self.cell.as_ptr() as usize
        }
    }
}

pub use imp::Reg;
#[cfg(test)]
pub use imp::{reset_writes, writes, Write};
