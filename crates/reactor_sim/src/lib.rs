pub mod pipeline;
pub mod reactor;

pub use reactor::ReactorState;
