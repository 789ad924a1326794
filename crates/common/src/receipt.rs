use crate::event::{contains_event, Event};
use crate::{CallResultValue, Fee, TransactionHash};

/// The outcome of an executed multicall, as reported by the runtime.
#[derive(Clone, Default, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Receipt {
    pub transaction_hash: TransactionHash,
    pub actual_fee: Option<Fee>,
    pub return_data: Vec<CallResultValue>,
    pub events: Vec<Event>,
}

impl Receipt {
    pub fn event_emitted(&self, name: &str) -> bool {
        contains_event(&self.events, name)
    }
}
