use crate::{ContractAddress, EntryPoint, EventData, EventKey};

/// An event emitted during execution.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Event {
    pub data: Vec<EventData>,
    pub from_address: ContractAddress,
    pub keys: Vec<EventKey>,
}

impl Event {
    pub fn has_key(&self, key: EventKey) -> bool {
        self.keys.contains(&key)
    }

    /// Whether this event is keyed by the selector of `name`.
    pub fn is_named(&self, name: &str) -> bool {
        self.has_key(event_key(name))
    }
}

/// The key an event named `name` is emitted under.
pub fn event_key(name: &str) -> EventKey {
    EventKey(EntryPoint::hashed(name.as_bytes()).0)
}

/// Returns true if any of the events was emitted under `name`.
pub fn contains_event(events: &[Event], name: &str) -> bool {
    let key = event_key(name);
    events.iter().any(|e| e.has_key(key))
}

/// Returns true if an event named `name` was emitted by `from_address` with exactly `data`.
pub fn contains_exact_event(
    events: &[Event],
    from_address: ContractAddress,
    name: &str,
    data: &[EventData],
) -> bool {
    let expected = Event {
        data: data.to_vec(),
        from_address,
        keys: vec![event_key(name)],
    };
    events.contains(&expected)
}
