mod flow;
mod key;

pub use flow::{FlowRecord, FlowSummary, SaveReceipt};
pub use key::FlowKey;
