mod file_processor;

pub use file_processor::{fragment_with_source, FileFragmentSource, FragmentSource};
