//! Drives the kernels over output buffers: lanes first, a scalar tail after, chunks spread over rayon's pool when
//! the `parallel` feature is on.
use haversine_common::real::{Batch, Real};
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Number of outputs handed to a single task.
pub const CHUNK_LEN: usize = 1024;

/// Something that computes outputs `at..at + T::WIDTH`.
pub(crate) trait Kernel: Sync {
    fn eval<T: Real>(&self, at: usize) -> T;
}

/// Like [`Kernel`], but producing two outputs per element.
pub(crate) trait PairKernel: Sync {
    fn eval<T: Real>(&self, at: usize) -> (T, T);
}

/// Fill `dst`, whose first element is output `offset` of `kernel`.
#[inline]
pub(crate) fn fill<K: Kernel>(dst: &mut [f64], offset: usize, kernel: &K) {
    let mut lanes = dst.chunks_exact_mut(Batch::WIDTH);
    let mut at = offset;
    for chunk in &mut lanes {
        kernel.eval::<Batch>(at).store(chunk);
        at += Batch::WIDTH;
    }
    for out in lanes.into_remainder() {
        *out = kernel.eval::<f64>(at);
        at += 1;
    }
}

/// Same as [`fill`], for a [`PairKernel`] writing into two buffers of the same length.
#[inline]
pub(crate) fn fill_pair<K: PairKernel>(a: &mut [f64], b: &mut [f64], offset: usize, kernel: &K) {
    debug_assert_eq!(a.len(), b.len());
    let mut a_lanes = a.chunks_exact_mut(Batch::WIDTH);
    let mut b_lanes = b.chunks_exact_mut(Batch::WIDTH);
    let mut at = offset;
    for (ca, cb) in (&mut a_lanes).zip(&mut b_lanes) {
        let (va, vb) = kernel.eval::<Batch>(at);
        va.store(ca);
        vb.store(cb);
        at += Batch::WIDTH;
    }
    for (oa, ob) in a_lanes
        .into_remainder()
        .iter_mut()
        .zip(b_lanes.into_remainder())
    {
        (*oa, *ob) = kernel.eval::<f64>(at);
        at += 1;
    }
}

/// Call `f(start, chunk)` for consecutive `len`-sized chunks of `dst`. `len` must be nonzero.
pub(crate) fn for_each_chunk<F>(dst: &mut [f64], len: usize, f: F)
where
    F: Fn(usize, &mut [f64]) + Send + Sync,
{
    #[cfg(feature = "parallel")]
    dst.par_chunks_mut(len)
        .enumerate()
        .for_each(|(i, chunk)| f(i * len, chunk));
    #[cfg(not(feature = "parallel"))]
    dst.chunks_mut(len)
        .enumerate()
        .for_each(|(i, chunk)| f(i * len, chunk));
}

/// Same as [`for_each_chunk`], but over two buffers in lockstep.
pub(crate) fn for_each_chunk_pair<F>(a: &mut [f64], b: &mut [f64], len: usize, f: F)
where
    F: Fn(usize, &mut [f64], &mut [f64]) + Send + Sync,
{
    #[cfg(feature = "parallel")]
    a.par_chunks_mut(len)
        .zip(b.par_chunks_mut(len))
        .enumerate()
        .for_each(|(i, (ca, cb))| f(i * len, ca, cb));
    #[cfg(not(feature = "parallel"))]
    a.chunks_mut(len)
        .zip(b.chunks_mut(len))
        .enumerate()
        .for_each(|(i, (ca, cb))| f(i * len, ca, cb));
}
