//! The single-slot arena that holds the fixture of the running test.

use core::{
    cell::{Cell, UnsafeCell},
    marker::PhantomData,
    mem::{self, MaybeUninit},
    ops::{Deref, DerefMut},
    ptr::{self, NonNull},
};

use critical_section::Mutex;

use crate::{
    config::{MEMORY_POOL_ALIGN, MEMORY_POOL_SIZE},
    Error, Fixture,
};

/// Byte pattern written over the pool before a fixture is constructed and after it was dropped.
pub const POISON: u8 = 0xA5;

#[repr(C, align(16))]
struct Storage(MaybeUninit<[u8; MEMORY_POOL_SIZE]>);

const _: () = assert!(mem::align_of::<Storage>() == MEMORY_POOL_ALIGN);

/// Panics, at compile time when used in a constant, if `F` does not fit into the pool.
pub const fn assert_fits<F>() {
    assert!(
        mem::size_of::<F>() <= MEMORY_POOL_SIZE && mem::align_of::<F>() <= MEMORY_POOL_ALIGN,
        "fixture does not fit into the memory pool; raise `UNIT_TEST_MEMORY_POOL_SIZE`"
    );
}

/// Fails the build when `F` does not fit into the pool.
struct Fits<F>(PhantomData<F>);

impl<F> Fits<F> {
    const CHECK: () = assert_fits::<F>();
}

pub(crate) struct MemoryPool {
    storage: UnsafeCell<Storage>,
    busy: Mutex<Cell<bool>>,
}

// SAFETY: the storage is only accessed through a `PoolSlot` and `busy` ensures that at most one
// slot exists at any time
unsafe impl Sync for MemoryPool {}

impl MemoryPool {
    pub(crate) const fn new() -> Self {
        Self {
            storage: UnsafeCell::new(Storage(MaybeUninit::uninit())),
            busy: Mutex::new(Cell::new(false)),
        }
    }

    /// Poisons the pool and constructs a new `F` in it.
    pub(crate) fn acquire<F: Fixture>(&self) -> Result<PoolSlot<'_, F>, Error> {
        #[allow(clippy::let_unit_value)]
        let () = Fits::<F>::CHECK;

        let claim = Claim::new(self)?;
        let base = self.storage.get().cast::<u8>();

        // SAFETY: the claim gives us exclusive access to the storage and the write stays within
        // its bounds
        unsafe { ptr::write_bytes(base, POISON, MEMORY_POOL_SIZE) };

        let fixture = base.cast::<F>();
        // SAFETY: `Fits` checked that `F` fits into the storage and that its alignment is
        // satisfied; the storage is exclusively ours
        unsafe { fixture.write(F::new()) };

        Ok(PoolSlot {
            // SAFETY: derived from the address of the storage, which is never null
            fixture: unsafe { NonNull::new_unchecked(fixture) },
            claim,
            _marker: PhantomData,
        })
    }

    #[cfg(test)]
    fn is_busy(&self) -> bool {
        critical_section::with(|cs| self.busy.borrow(cs).get())
    }

    fn poison(&self) {
        // SAFETY: only called while a claim is held
        unsafe { ptr::write_bytes(self.storage.get().cast::<u8>(), POISON, MEMORY_POOL_SIZE) }
    }

    #[cfg(test)]
    fn bytes(&self) -> &[u8] {
        assert!(!self.is_busy());
        // SAFETY: only used by tests, after a released slot poisoned (initialized) the storage
        unsafe { core::slice::from_raw_parts(self.storage.get().cast::<u8>(), MEMORY_POOL_SIZE) }
    }
}

/// Exclusive use of the pool; released on drop, including while unwinding.
struct Claim<'a>(&'a MemoryPool);

impl<'a> Claim<'a> {
    fn new(pool: &'a MemoryPool) -> Result<Self, Error> {
        let was_busy = critical_section::with(|cs| pool.busy.borrow(cs).replace(true));
        if was_busy {
            Err(Error::PoolBusy)
        } else {
            Ok(Self(pool))
        }
    }
}

impl Drop for Claim<'_> {
    fn drop(&mut self) {
        critical_section::with(|cs| self.0.busy.borrow(cs).set(false));
    }
}

/// The live fixture of the pool.
///
/// Dropping the slot drops the fixture in place and poisons the pool again.
pub(crate) struct PoolSlot<'a, F> {
    fixture: NonNull<F>,
    claim: Claim<'a>,
    _marker: PhantomData<F>,
}

impl<F> Deref for PoolSlot<'_, F> {
    type Target = F;

    fn deref(&self) -> &F {
        // SAFETY: the fixture was initialized in `acquire` and lives until `drop`
        unsafe { self.fixture.as_ref() }
    }
}

impl<F> DerefMut for PoolSlot<'_, F> {
    fn deref_mut(&mut self) -> &mut F {
        // SAFETY: see `deref`; `&mut self` makes the access unique
        unsafe { self.fixture.as_mut() }
    }
}

impl<F> Drop for PoolSlot<'_, F> {
    fn drop(&mut self) {
        // SAFETY: the fixture was initialized in `acquire` and is dropped exactly once
        unsafe { ptr::drop_in_place(self.fixture.as_ptr()) };
        self.claim.0.poison();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{
        panic::{self, AssertUnwindSafe},
        sync::atomic::{AtomicUsize, Ordering},
    };

    struct Counter {
        values: [u32; 64],
    }

    impl Fixture for Counter {
        fn new() -> Self {
            Counter { values: [7; 64] }
        }
    }

    #[test]
    fn constructs_fixture_in_place() {
        let pool = MemoryPool::new();
        let slot = pool.acquire::<Counter>().unwrap();

        assert!(slot.values.iter().all(|v| *v == 7));
        assert_eq!(
            &*slot as *const Counter as *const u8,
            pool.storage.get() as *const u8
        );
    }

    #[test]
    fn poisons_after_release() {
        let pool = MemoryPool::new();
        {
            let mut slot = pool.acquire::<Counter>().unwrap();
            slot.values = [0x1234_5678; 64];
        }

        assert!(!pool.is_busy());
        assert!(pool.bytes().iter().all(|b| *b == POISON));
    }

    #[test]
    fn next_fixture_starts_fresh() {
        let pool = MemoryPool::new();
        {
            let mut slot = pool.acquire::<Counter>().unwrap();
            slot.values = [1; 64];
        }

        let slot = pool.acquire::<Counter>().unwrap();
        assert!(slot.values.iter().all(|v| *v == 7));
    }

    #[test]
    fn fixtures_up_to_the_pool_size_fit() {
        const _: () = assert_fits::<[u8; MEMORY_POOL_SIZE]>();
        const _: () = assert_fits::<Counter>();

        let result = panic::catch_unwind(|| assert_fits::<[u8; MEMORY_POOL_SIZE + 1]>());
        assert!(result.is_err());
    }

    #[test]
    fn one_fixture_at_a_time() {
        let pool = MemoryPool::new();
        let _slot = pool.acquire::<Counter>().unwrap();

        assert_eq!(pool.acquire::<Counter>().err(), Some(Error::PoolBusy));
    }

    #[test]
    fn drops_fixture_on_release() {
        static DROPS: AtomicUsize = AtomicUsize::new(0);

        struct Tracked;

        impl Fixture for Tracked {
            fn new() -> Self {
                Tracked
            }
        }

        impl Drop for Tracked {
            fn drop(&mut self) {
                DROPS.fetch_add(1, Ordering::Relaxed);
            }
        }

        let pool = MemoryPool::new();
        drop(pool.acquire::<Tracked>().unwrap());
        drop(pool.acquire::<Tracked>().unwrap());

        assert_eq!(DROPS.load(Ordering::Relaxed), 2);
    }

    #[test]
    fn released_when_constructor_panics() {
        struct Explodes;

        impl Fixture for Explodes {
            fn new() -> Self {
                panic!("boom")
            }
        }

        let pool = MemoryPool::new();
        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            let _ = pool.acquire::<Explodes>();
        }));

        assert!(result.is_err());
        assert!(!pool.is_busy());
        assert!(pool.acquire::<Counter>().is_ok());
    }
}
