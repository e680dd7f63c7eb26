//! Types shared by the feedback form (frontend) and the feedback endpoint
//! (backend): the wire payload, the response contract, the stored record
//! and the platform independent form state machine.

pub mod form;
pub mod model;
pub mod requests;
pub mod responses;
