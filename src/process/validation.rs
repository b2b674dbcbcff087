/*!
 * Request Validation
 * Checks applied at the submission boundary, before the scheduler sees a request
 */

use super::request::ProcessRequest;
use crate::core::errors::ProcessError;
use crate::core::types::{MemoryMb, ProcessResult};

/// Validate a request against a pool of `pool_total` units
///
/// Fields left unset are accepted; they are generated inside the configured
/// ranges.
pub fn validate_request(request: &ProcessRequest, pool_total: MemoryMb) -> ProcessResult<()> {
    if let Some(name) = &request.name {
        if name.trim().is_empty() {
            return Err(ProcessError::EmptyName);
        }
    }

    if let Some(memory_mb) = request.memory_mb {
        if memory_mb == 0 {
            return Err(ProcessError::ZeroMemory);
        }
        if memory_mb > pool_total {
            return Err(ProcessError::ExceedsPool {
                requested: memory_mb,
                total: pool_total,
            });
        }
    }

    if request.duration == Some(0) {
        return Err(ProcessError::ZeroDuration);
    }

    Ok(())
}
