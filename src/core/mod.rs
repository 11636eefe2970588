mod channel;
mod election;
mod event;
mod participant;
mod topology;

pub use channel::*;
pub use election::*;
pub use event::*;
pub use participant::*;
pub use topology::*;
