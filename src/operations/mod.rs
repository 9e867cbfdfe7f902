mod arc_clip;
mod masked_shape;

pub use arc_clip::{ClipArcToRect, ClipSide, SplitCircleAtRect};
pub use masked_shape::{
    is_cyclical, split_in_bounds, ContinuousMaskedShape, ContinuousPoints,
};
