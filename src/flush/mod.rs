pub mod jsonl;

pub use jsonl::{
    EVENTS_FILE, TREASURIES_FILE, TreasurySnapshot, flush_events_to_jsonl,
    flush_treasuries_to_jsonl, flush_world, read_events_jsonl,
};
