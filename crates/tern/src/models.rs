//! These models represent the objects passed around by the bridge
//!
//! There are two wire-adjacent formats in play: the role-tagged messages we
//! send to the completion endpoint, and the choice list it sends back. Both
//! are converted to and from these internal structs at the gateway boundary,
//! so nothing outside it needs to know the endpoint's JSON shape.
pub mod completion;
pub mod message;
pub mod tool;
