mod shortest_walk;

pub use shortest_walk::{ShortestWalk, ShortestWalkParams};
