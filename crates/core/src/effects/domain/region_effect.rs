use thiserror::Error;

use crate::shared::frame::Frame;
use crate::shared::region::Region;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EffectError {
    #[error("region {region:?} lies outside the {width}x{height} frame")]
    OutOfBounds {
        region: Region,
        width: u32,
        height: u32,
    },
    #[error("source is {source_size:?} but target is {target_size:?}")]
    GeometryMismatch {
        source_size: (u32, u32, u8),
        target_size: (u32, u32, u8),
    },
}

/// Domain interface for obscuring one rectangular region.
///
/// Reads from the untouched `source` and writes only inside `region` of
/// `target`. `region` is already clamped to the frame by the caller, but
/// implementations still reject anything that is not.
pub trait RegionEffect: Send {
    fn apply(&self, source: &Frame, target: &mut Frame, region: &Region)
        -> Result<(), EffectError>;
}

/// Shared precondition check for [`RegionEffect`] implementations.
pub fn check_inputs(source: &Frame, target: &Frame, region: &Region) -> Result<(), EffectError> {
    let source_size = (source.width(), source.height(), source.channels());
    let target_size = (target.width(), target.height(), target.channels());
    if source_size != target_size {
        return Err(EffectError::GeometryMismatch {
            source_size,
            target_size,
        });
    }
    if region.is_empty() || !source.contains_region(region) {
        return Err(EffectError::OutOfBounds {
            region: *region,
            width: source.width(),
            height: source.height(),
        });
    }
    Ok(())
}
