//! Search-and-browse session flow.
//!
//! A session resolves the typed location, searches nearby venues, and then
//! lets the user walk the result list one card at a time. Only the most
//! recently started session may publish results.

pub mod cursor;
pub mod flow;
pub mod notice;
pub mod state;

pub use cursor::BrowseCursor;
pub use flow::SelectionFlow;
pub use notice::{Notice, NoticeKind};
pub use state::{Browse, FlowState, SearchFailure, SessionId};
