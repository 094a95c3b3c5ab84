
use crate::HashingParams;

/// Cheap parameters so hashing tests stay fast
pub(crate) fn fast_params() -> HashingParams {
    HashingParams {
        memory_kib: 1024,
        iterations: 1,
        parallelism: 1,
    }
}
