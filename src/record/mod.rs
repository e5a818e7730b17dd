pub mod fields;
pub mod reassembler;

pub use fields::FieldExtractor;
pub use reassembler::{ReassemblyMode, RecordReassembler, DEFAULT_MIN_RECORD_LEN};
