pub mod adapter;

pub use adapter::{ArrayQueue, ContainerCommon, QueueLike, Stack, StackLike, StackQueue};
