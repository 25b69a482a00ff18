//! Depth-First Traversal
//!
//! Records a depth-first traversal as an ordered sequence of steps that a
//! playback driver can replay at its own pace. The whole sequence is
//! computed up front; playback never drives computation.

mod recorder;
mod step;

pub use recorder::TraversalRecorder;
pub use step::{DfsStep, StepKind, TraversalLog};
