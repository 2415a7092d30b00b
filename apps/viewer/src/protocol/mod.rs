//! Wire formats exchanged with the game server.

pub mod decode;
pub mod messages;
pub mod requests;
pub mod wire;

pub use decode::{decode_app_state, decode_snapshot};
pub use messages::{ClientMsg, ServerMsg};
pub use requests::{Idempotency, Method, MutationRequest};
pub use wire::AppStateWire;
