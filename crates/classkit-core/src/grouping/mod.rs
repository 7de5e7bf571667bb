//! Random partitioning of participants into groups.

mod group_set;
mod grouper;

pub use group_set::GroupSet;
pub use grouper::{effective_group_size, partition, GroupMethod, Grouper};
