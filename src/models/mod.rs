pub mod packed_revision;
pub mod revision_record;
