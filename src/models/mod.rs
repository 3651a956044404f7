//! CPU scheduling domain models.
//!
//! | Type | Role |
//! |------|------|
//! | `ProcessSpec` | Caller input: name, burst time, arrival time |
//! | `Process` | Process record mutated by the scheduler |
//! | `Timeline` | Ordered log of CPU slices from one run |
//! | `Slice` | One contiguous CPU interval |

mod process;
mod timeline;

pub use process::{Process, ProcessSpec};
pub use timeline::{Slice, Timeline};
