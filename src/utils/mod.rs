//! Small helpers shared by the configuration and the network.

pub mod permutation;
