pub mod block;
pub mod event_record;
pub mod layout_result;
pub mod timed_event;

pub use block::Block;
pub use event_record::EventRecord;
pub use layout_result::LayoutResult;
pub use timed_event::TimedEvent;
