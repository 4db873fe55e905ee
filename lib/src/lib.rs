//! __Sparse Life__ runs Conway's [Game of Life](https://conwaylife.com/wiki/Conway%27s_Game_of_Life)
//! on an infinite grid.
//!
//! Only the living cells are stored. A [`World`] is set up by making cells
//! [`alive`](World::alive), and each call to
//! [`next_generation`](World::next_generation) returns a new world.
//!
//! # Example
//!
//! ```rust
//! use sparse_life::World;
//!
//! let mut world = World::new();
//! let o = world.start_position();
//! world.alive(o.left());
//! world.alive(o);
//! world.alive(o.right());
//!
//! let next = world.next_generation();
//! assert!(next.is_alive(&o.up()));
//! assert!(next.is_alive(&o));
//! assert!(next.is_dead(&o.left()));
//! assert!(world.is_alive(&o.left()));
//! ```

mod axis;
mod cell_set;
mod cells;
mod config;
mod error;
pub mod rules;
mod world;

pub use axis::Axis;
pub use cell_set::{Iter, PositionSet};
pub use cells::{Position, State, ALIVE, DEAD};
pub use config::{Config, Soup};
pub use error::Error;
pub use world::World;
