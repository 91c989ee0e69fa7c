//! Buffer wiping.
//!
//! An [`Mpi`] may hold key material, so the limb buffer is wiped whenever
//! it is retired: on drop here, and in `grow`/`shrink`/`assign` when a
//! buffer is replaced.

use zeroize::Zeroize;

use crate::Mpi;

impl Zeroize for Mpi {
    fn zeroize(&mut self) {
        self.limbs.zeroize();
        self.s = 1;
    }
}

impl Drop for Mpi {
    fn drop(&mut self) {
        self.limbs.zeroize();
    }
}

impl zeroize::ZeroizeOnDrop for Mpi {}
