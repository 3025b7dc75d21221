//! Header relabeling policies and the output emitter.

use crate::bio::digest;
use crate::bio::sequence::append_size_annotation;
use crate::bio::store::SequenceStore;
use crate::core::rank::RankEntry;
use std::io::Write;

/// Header labeling scheme, chosen once per run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RelabelPolicy {
    /// Keep the original header.
    #[default]
    Verbatim,
    /// `<prefix><k>` with k the 1-based output position.
    Prefix(String),
    /// Hex SHA-1 digest of the sequence bytes.
    Sha1,
    /// Hex MD5 digest of the sequence bytes.
    Md5,
}

/// Write each selected entry to the sink, in order. Returns the number of
/// records written.
pub fn emit<W: Write + ?Sized>(
    store: &SequenceStore,
    entries: &[RankEntry],
    policy: &RelabelPolicy,
    sizeout: bool,
    writer: &mut W,
) -> std::io::Result<usize> {
    for (position, entry) in entries.iter().enumerate() {
        match policy {
            RelabelPolicy::Verbatim => {
                store.write_record(writer, entry.index, sizeout)?;
            }
            RelabelPolicy::Prefix(prefix) => {
                let label = format!("{}{}", prefix, position + 1);
                write_labeled(store, entry, &label, sizeout, writer)?;
            }
            RelabelPolicy::Sha1 => {
                let label = digest::sha1_hex(store.sequence(entry.index));
                write_labeled(store, entry, &label, sizeout, writer)?;
            }
            RelabelPolicy::Md5 => {
                let label = digest::md5_hex(store.sequence(entry.index));
                write_labeled(store, entry, &label, sizeout, writer)?;
            }
        }
    }
    Ok(entries.len())
}

fn write_labeled<W: Write + ?Sized>(
    store: &SequenceStore,
    entry: &RankEntry,
    label: &str,
    sizeout: bool,
    writer: &mut W,
) -> std::io::Result<()> {
    writer.write_all(b">")?;
    if sizeout {
        writer.write_all(append_size_annotation(label, entry.abundance).as_bytes())?;
    } else {
        writer.write_all(label.as_bytes())?;
    }
    writer.write_all(b"\n")?;
    store.write_sequence(writer, entry.index)
}
