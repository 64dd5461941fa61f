mod control_file_parser;
mod depends_parser;
mod index_metadata_generator;
mod record_normalizer;

pub use control_file_parser::{ControlFileParser, ParsedControlFile};
pub use depends_parser::DependsParser;
pub use index_metadata_generator::IndexMetadataGenerator;
pub use record_normalizer::{NormalizedRecords, RecordNormalizer};
