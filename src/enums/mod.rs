pub mod output_format;
pub mod source_kind;
