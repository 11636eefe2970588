mod ring_topology;
pub use ring_topology::*;
