//! Collections with auxiliary indexes.
//!
//! - `indexed_heap`: binary min-heap with a value-to-position index for
//!   logarithmic removal of arbitrary values

pub mod indexed_heap;

pub use indexed_heap::{HeapRow, IndexedMinHeap, DEFAULT_HEAP_CAPACITY};
