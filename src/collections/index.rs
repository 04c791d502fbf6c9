use num::PrimInt;

use super::error::CopyToError;

/// Converts a caller-supplied start index into a slice position.
///
/// Accepts any primitive integer so that signed indices can be rejected
/// explicitly instead of wrapping.
pub fn start_position<IndexT>(index: IndexT) -> Result<usize, CopyToError>
where
    IndexT: PrimInt,
{
    if index < IndexT::zero() {
        return Err(CopyToError::NegativeIndex {
            index: index.to_i128().unwrap_or(i128::MIN),
        });
    }
    index.to_usize().ok_or_else(|| CopyToError::IndexOutOfRange {
        index: index.to_u128().unwrap_or(u128::MAX),
    })
}
