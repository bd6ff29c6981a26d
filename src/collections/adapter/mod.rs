pub mod container_common;
pub mod queue;
pub mod stack;

pub use container_common::ContainerCommon;
pub use queue::{ArrayQueue, QueueLike, StackQueue};
pub use stack::{Stack, StackLike};
