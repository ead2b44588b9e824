//! Accelerated element-wise addition behind one process-wide lock.
//!
//! An [`Accelerator`] is an external addition primitive over `f32` or `f64`
//! buffers that must never run concurrently with itself. Every call goes
//! through an [`AcceleratorSession`], which holds the global device lock for
//! its whole lifetime; at most one session exists at a time, across all
//! backends, element types and threads. Opening a session blocks until the
//! lock is free. There is no timeout.
//!
//! The device entry points take a [`DeviceToken`], which only a session can
//! create, so they cannot be called with the lock released.
//!
//! The CPU [`ManagedAccelerator`] is always available. With the
//! `native-accel` feature, [`NativeAccelerator`] calls into the
//! `cuda_computation` native library.
//!
//! ```
//! use ketspace::accel::AcceleratedBackend;
//! use ketspace::{Complex, RowVector};
//!
//! let backend = AcceleratedBackend::default();
//! let a = RowVector::<Complex<f64>>::from_entries([(1, 2), (3, 4)]);
//! let b = RowVector::<Complex<f64>>::from_entries([(5, 6), (7, 8)]);
//! assert_eq!(backend.add_vectors(&a, &b).unwrap(), &a + &b);
//! ```

#[cfg(feature = "native-accel")]
mod native;

#[cfg(feature = "native-accel")]
pub use native::NativeAccelerator;

use core::fmt;
use core::marker::PhantomData;

use parking_lot::{Mutex, MutexGuard};
use tracing::{debug, trace, warn};

use crate::error::{LinalgError, Result};
use crate::matrix::SquareMatrix;
use crate::scalar::Complex;
use crate::traits::{RealScalar, Scalar};
use crate::vector::{Orientation, Vector};

/// The single lock serializing every accelerator call in the process.
static DEVICE_LOCK: Mutex<()> = parking_lot::const_mutex(());

/// Result code reported by an accelerator call.
///
/// Codes `0..=6` are the native library's result codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AcceleratorStatus {
    Succeeded,
    SetDeviceFailed,
    DeviceResetFailed,
    MallocFailed,
    MemcpyFailed,
    KernelFailed,
    DeviceSynchronizeFailed,
    /// Input and output buffers had different lengths; nothing was dispatched.
    BufferLengthMismatch,
    /// A code outside the known range.
    Unknown(u8),
}

impl AcceleratorStatus {
    /// Decode a native result code.
    pub fn from_code(code: u8) -> Self {
        match code {
            0 => Self::Succeeded,
            1 => Self::SetDeviceFailed,
            2 => Self::DeviceResetFailed,
            3 => Self::MallocFailed,
            4 => Self::MemcpyFailed,
            5 => Self::KernelFailed,
            6 => Self::DeviceSynchronizeFailed,
            other => Self::Unknown(other),
        }
    }

    /// The native result code, or `None` for statuses raised before any
    /// native call.
    pub fn code(self) -> Option<u8> {
        match self {
            Self::Succeeded => Some(0),
            Self::SetDeviceFailed => Some(1),
            Self::DeviceResetFailed => Some(2),
            Self::MallocFailed => Some(3),
            Self::MemcpyFailed => Some(4),
            Self::KernelFailed => Some(5),
            Self::DeviceSynchronizeFailed => Some(6),
            Self::BufferLengthMismatch => None,
            Self::Unknown(code) => Some(code),
        }
    }

    #[inline]
    pub fn is_success(self) -> bool {
        self == Self::Succeeded
    }

    fn description(self) -> &'static str {
        match self {
            Self::Succeeded => "succeeded",
            Self::SetDeviceFailed => "set device failed",
            Self::DeviceResetFailed => "device reset failed",
            Self::MallocFailed => "device allocation failed",
            Self::MemcpyFailed => "device copy failed",
            Self::KernelFailed => "kernel failed",
            Self::DeviceSynchronizeFailed => "device synchronize failed",
            Self::BufferLengthMismatch => "buffer length mismatch",
            Self::Unknown(_) => "unknown status",
        }
    }
}

impl fmt::Display for AcceleratorStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code() {
            Some(code) => write!(f, "{} (code {code})", self.description()),
            None => f.write_str(self.description()),
        }
    }
}

/// Proof that the global device lock is held.
///
/// Created only by an [`AcceleratorSession`] and lent to the [`Accelerator`]
/// entry points for the duration of one call. It cannot be built, cloned or
/// kept outside the crate.
///
/// ```compile_fail
/// use ketspace::accel::DeviceToken;
///
/// let device = DeviceToken { _guard: core::marker::PhantomData };
/// ```
///
/// Without a token the entry points cannot be called at all:
///
/// ```compile_fail
/// use ketspace::accel::{Accelerator, ManagedAccelerator};
///
/// let mut out = [0.0_f64; 2];
/// ManagedAccelerator.add_f64(&[1.0, 2.0], &[3.0, 4.0], &mut out);
/// ```
pub struct DeviceToken<'a> {
    _guard: PhantomData<&'a MutexGuard<'static, ()>>,
}

impl<'a> DeviceToken<'a> {
    fn held(_guard: &'a MutexGuard<'static, ()>) -> Self {
        Self { _guard: PhantomData }
    }
}

impl fmt::Debug for DeviceToken<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DeviceToken")
    }
}

/// An external element-wise addition primitive.
///
/// Implementations write `left[i] + right[i]` into `out[i]` and report a
/// status. Every entry point receives the [`DeviceToken`] of the session
/// that holds the global lock, so implementations are never called
/// concurrently. They must not assume equal buffer lengths and should
/// return [`AcceleratorStatus::BufferLengthMismatch`] instead.
pub trait Accelerator: Send + Sync {
    /// Short name used in log events.
    fn name(&self) -> &'static str;

    /// `out[i] = left[i] + right[i]` in single precision.
    fn add_f32(
        &self,
        device: &DeviceToken<'_>,
        left: &[f32],
        right: &[f32],
        out: &mut [f32],
    ) -> AcceleratorStatus;

    /// `out[i] = left[i] + right[i]` in double precision.
    fn add_f64(
        &self,
        device: &DeviceToken<'_>,
        left: &[f64],
        right: &[f64],
        out: &mut [f64],
    ) -> AcceleratorStatus;

    /// Prepare the device; returns the native warmup result.
    fn warmup(&self, _device: &DeviceToken<'_>) -> i32 {
        0
    }
}

/// Plain CPU addition, the default backend.
#[derive(Debug, Clone, Copy, Default)]
pub struct ManagedAccelerator;

fn add_slices<R: RealScalar>(left: &[R], right: &[R], out: &mut [R]) -> AcceleratorStatus {
    if left.len() != right.len() || left.len() != out.len() {
        return AcceleratorStatus::BufferLengthMismatch;
    }
    for ((o, &l), &r) in out.iter_mut().zip(left).zip(right) {
        *o = l + r;
    }
    AcceleratorStatus::Succeeded
}

impl Accelerator for ManagedAccelerator {
    fn name(&self) -> &'static str {
        "managed"
    }

    fn add_f32(
        &self,
        _: &DeviceToken<'_>,
        left: &[f32],
        right: &[f32],
        out: &mut [f32],
    ) -> AcceleratorStatus {
        add_slices(left, right, out)
    }

    fn add_f64(
        &self,
        _: &DeviceToken<'_>,
        left: &[f64],
        right: &[f64],
        out: &mut [f64],
    ) -> AcceleratorStatus {
        add_slices(left, right, out)
    }
}

/// Element types an accelerator can add: `f32`, `f64`, and complex numbers
/// of either, which are flattened into interleaved `[re, im, re, im, …]`
/// buffers of the same precision.
pub trait AcceleratedElement: Scalar {
    /// `"f32"` or `"f64"`.
    const PRECISION: &'static str;

    /// Dispatch to the entry point matching this element's precision.
    fn accelerated_add<A: Accelerator + ?Sized>(
        accelerator: &A,
        device: &DeviceToken<'_>,
        left: &[Self],
        right: &[Self],
        out: &mut [Self],
    ) -> AcceleratorStatus;
}

impl AcceleratedElement for f32 {
    const PRECISION: &'static str = "f32";

    fn accelerated_add<A: Accelerator + ?Sized>(
        accelerator: &A,
        device: &DeviceToken<'_>,
        left: &[f32],
        right: &[f32],
        out: &mut [f32],
    ) -> AcceleratorStatus {
        accelerator.add_f32(device, left, right, out)
    }
}

impl AcceleratedElement for f64 {
    const PRECISION: &'static str = "f64";

    fn accelerated_add<A: Accelerator + ?Sized>(
        accelerator: &A,
        device: &DeviceToken<'_>,
        left: &[f64],
        right: &[f64],
        out: &mut [f64],
    ) -> AcceleratorStatus {
        accelerator.add_f64(device, left, right, out)
    }
}

fn interleave<R: RealScalar>(entries: &[Complex<R>]) -> Vec<R> {
    entries
        .iter()
        .flat_map(|z| [z.real, z.imaginary])
        .collect()
}

impl<R: RealScalar + AcceleratedElement> AcceleratedElement for Complex<R> {
    const PRECISION: &'static str = R::PRECISION;

    fn accelerated_add<A: Accelerator + ?Sized>(
        accelerator: &A,
        device: &DeviceToken<'_>,
        left: &[Self],
        right: &[Self],
        out: &mut [Self],
    ) -> AcceleratorStatus {
        if out.len() != left.len() {
            return AcceleratorStatus::BufferLengthMismatch;
        }
        let left = interleave(left);
        let right = interleave(right);
        let mut flat = vec![R::zero(); left.len()];
        let status = R::accelerated_add(accelerator, device, &left, &right, &mut flat);
        if status.is_success() {
            for (z, pair) in out.iter_mut().zip(flat.chunks_exact(2)) {
                *z = Complex::new(pair[0], pair[1]);
            }
        }
        status
    }
}

/// Exclusive access to the accelerator for as long as the session lives.
///
/// Obtained from [`AcceleratedBackend::session`]. Dropping the session
/// releases the lock. Opening a second session on the same thread while one
/// is alive deadlocks.
pub struct AcceleratorSession<'a, A: Accelerator + ?Sized> {
    accelerator: &'a A,
    guard: MutexGuard<'static, ()>,
}

impl<'a, A: Accelerator + ?Sized> AcceleratorSession<'a, A> {
    fn open(accelerator: &'a A) -> Self {
        trace!(accelerator = accelerator.name(), "waiting for accelerator lock");
        let guard = DEVICE_LOCK.lock();
        trace!(accelerator = accelerator.name(), "acquired accelerator lock");
        Self { accelerator, guard }
    }

    /// Add two equal-length buffers into a newly allocated result.
    ///
    /// Lengths are validated before the call. A non-success status discards
    /// the partially written output and is returned as
    /// [`LinalgError::Accelerator`].
    pub fn add<S: AcceleratedElement>(&self, left: &[S], right: &[S]) -> Result<Vec<S>> {
        if left.len() != right.len() {
            return Err(LinalgError::length_mismatch(
                "accelerated add",
                left.len(),
                right.len(),
            ));
        }
        let mut out = vec![S::zero(); left.len()];
        debug!(
            accelerator = self.accelerator.name(),
            precision = S::PRECISION,
            len = left.len(),
            "accelerated addition"
        );
        let device = DeviceToken::held(&self.guard);
        let status = S::accelerated_add(self.accelerator, &device, left, right, &mut out);
        if !status.is_success() {
            warn!(
                accelerator = self.accelerator.name(),
                %status,
                "accelerated addition failed"
            );
            return Err(LinalgError::Accelerator(status));
        }
        Ok(out)
    }

    /// Run the accelerator's warmup under this session's lock.
    pub fn warmup(&self) -> i32 {
        let result = self.accelerator.warmup(&DeviceToken::held(&self.guard));
        debug!(accelerator = self.accelerator.name(), result, "accelerator warmup");
        result
    }
}

impl<A: Accelerator + ?Sized> Drop for AcceleratorSession<'_, A> {
    fn drop(&mut self) {
        trace!(accelerator = self.accelerator.name(), "releasing accelerator lock");
    }
}

/// Vector and matrix addition routed through an [`Accelerator`].
///
/// Shape checks happen before the lock is taken, so a mismatched call never
/// waits on other threads.
#[derive(Debug, Clone)]
pub struct AcceleratedBackend<A = ManagedAccelerator> {
    accelerator: A,
}

impl Default for AcceleratedBackend<ManagedAccelerator> {
    fn default() -> Self {
        Self::new(ManagedAccelerator)
    }
}

impl<A: Accelerator> AcceleratedBackend<A> {
    pub fn new(accelerator: A) -> Self {
        Self { accelerator }
    }

    /// Block until the global lock is free and open a session.
    pub fn session(&self) -> AcceleratorSession<'_, A> {
        AcceleratorSession::open(&self.accelerator)
    }

    /// Warm up the device under the global lock.
    pub fn warmup(&self) -> i32 {
        self.session().warmup()
    }

    /// Accelerated `left + right` for equal-length vectors.
    pub fn add_vectors<S, O>(&self, left: &Vector<S, O>, right: &Vector<S, O>) -> Result<Vector<S, O>>
    where
        S: AcceleratedElement,
        O: Orientation,
    {
        if left.len() != right.len() {
            return Err(LinalgError::length_mismatch("add", left.len(), right.len()));
        }
        let entries = self.session().add(left.entries(), right.entries())?;
        Ok(Vector::from_vec(entries))
    }

    /// Accelerated `left + right` for matrices of equal dimension.
    pub fn add_matrices<S>(
        &self,
        left: &SquareMatrix<S>,
        right: &SquareMatrix<S>,
    ) -> Result<SquareMatrix<S>>
    where
        S: AcceleratedElement,
    {
        if left.dimension() != right.dimension() {
            return Err(LinalgError::dimension_mismatch(
                "add",
                left.dimension(),
                right.dimension(),
            ));
        }
        let entries = self.session().add(left.entries(), right.entries())?;
        SquareMatrix::from_row_major(left.dimension(), entries)
    }
}

impl<S: AcceleratedElement, O: Orientation> Vector<S, O> {
    /// [`try_add`](Vector::try_add) computed by `backend`.
    pub fn try_add_accelerated<A: Accelerator>(
        &self,
        rhs: &Self,
        backend: &AcceleratedBackend<A>,
    ) -> Result<Self> {
        backend.add_vectors(self, rhs)
    }
}

impl<S: AcceleratedElement> SquareMatrix<S> {
    /// [`try_add`](SquareMatrix::try_add) computed by `backend`.
    pub fn try_add_accelerated<A: Accelerator>(
        &self,
        rhs: &Self,
        backend: &AcceleratedBackend<A>,
    ) -> Result<Self> {
        backend.add_matrices(self, rhs)
    }
}
