use super::{Accelerator, AcceleratorStatus, DeviceToken};

#[link(name = "cuda_computation")]
extern "C" {
    fn single_precision_vector_addition(
        left: *const f32,
        right: *const f32,
        result: *mut f32,
        vector_length: i64,
    ) -> u8;

    fn double_precision_vector_addition(
        left: *const f64,
        right: *const f64,
        result: *mut f64,
        vector_length: i64,
    ) -> u8;

    fn warmup() -> i32;
}

/// Element-wise addition on the device, through the `cuda_computation`
/// native library.
///
/// Buffer lengths are checked before every call; the native side reads
/// `vector_length` elements from each input and writes as many to the output.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeAccelerator;

impl NativeAccelerator {
    pub fn new() -> Self {
        Self
    }
}

fn checked_length(left: usize, right: usize, out: usize) -> Option<i64> {
    if left == right && left == out {
        i64::try_from(left).ok()
    } else {
        None
    }
}

impl Accelerator for NativeAccelerator {
    fn name(&self) -> &'static str {
        "native"
    }

    fn add_f32(
        &self,
        _: &DeviceToken<'_>,
        left: &[f32],
        right: &[f32],
        out: &mut [f32],
    ) -> AcceleratorStatus {
        let Some(len) = checked_length(left.len(), right.len(), out.len()) else {
            return AcceleratorStatus::BufferLengthMismatch;
        };
        // SAFETY: all three buffers hold exactly `len` elements and stay
        // borrowed (so neither moved nor resized) until the call returns.
        // The token proves the device lock is held.
        let code = unsafe {
            single_precision_vector_addition(left.as_ptr(), right.as_ptr(), out.as_mut_ptr(), len)
        };
        AcceleratorStatus::from_code(code)
    }

    fn add_f64(
        &self,
        _: &DeviceToken<'_>,
        left: &[f64],
        right: &[f64],
        out: &mut [f64],
    ) -> AcceleratorStatus {
        let Some(len) = checked_length(left.len(), right.len(), out.len()) else {
            return AcceleratorStatus::BufferLengthMismatch;
        };
        // SAFETY: as in `add_f32`.
        let code = unsafe {
            double_precision_vector_addition(left.as_ptr(), right.as_ptr(), out.as_mut_ptr(), len)
        };
        AcceleratorStatus::from_code(code)
    }

    fn warmup(&self, _: &DeviceToken<'_>) -> i32 {
        // SAFETY: takes no arguments; the token proves the device lock is held.
        unsafe { warmup() }
    }
}
