//! Request and result shapes of the MediaLive control-plane operations.
//!
//! Members bound to the URI path or query string (`channelId`, `maxResults`,
//! `tagKeys`, ...) are ordinary fields here; the client moves them out of the
//! body when it marshals a request.

pub mod channels;
pub mod input_devices;
pub mod input_security_groups;
pub mod inputs;
pub mod multiplex_programs;
pub mod multiplexes;
pub mod offerings;
pub mod reservations;
pub mod schedule;
pub mod tags;

pub use channels::*;
pub use input_devices::*;
pub use input_security_groups::*;
pub use inputs::*;
pub use multiplex_programs::*;
pub use multiplexes::*;
pub use offerings::*;
pub use reservations::*;
pub use schedule::*;
pub use tags::*;
