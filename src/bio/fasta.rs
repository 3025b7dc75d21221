use crate::bio::sequence::Record;
use crate::{Result, SeqrankError};
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use memmap2::Mmap;
use nom::{
    bytes::complete::{tag, take_till},
    character::complete::{line_ending, not_line_ending},
    combinator::{map, opt},
    IResult,
};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

/// Default column width for sequence lines.
pub const DEFAULT_LINE_WIDTH: usize = 80;

/// Parse a FASTA header line; the full line after `>` is kept as one string.
fn parse_header(input: &[u8]) -> IResult<&[u8], &str> {
    let (input, _) = tag(b">")(input)?;
    let (input, header) = map(not_line_ending, |s: &[u8]| {
        std::str::from_utf8(s).unwrap_or("")
    })(input)?;
    let (input, _) = opt(line_ending)(input)?;
    Ok((input, header.trim_end()))
}

/// Parse sequence lines until the next header or EOF
fn parse_sequence(input: &[u8]) -> IResult<&[u8], Vec<u8>> {
    let mut sequence = Vec::new();
    let mut remaining = input;

    while !remaining.is_empty() && remaining[0] != b'>' {
        let (rest, line) =
            take_till::<_, _, nom::error::Error<_>>(|c: u8| c == b'\n' || c == b'\r')(remaining)?;
        let (rest, _) = opt(line_ending)(rest)?;

        for &c in line {
            if !c.is_ascii_whitespace() {
                sequence.push(c.to_ascii_uppercase());
            }
        }

        // A bare CR is not a line ending; skip it to keep moving
        remaining = if rest.len() == remaining.len() {
            &rest[1..]
        } else {
            rest
        };
    }

    Ok((remaining, sequence))
}

/// Parse a single FASTA record
fn parse_record(input: &[u8]) -> IResult<&[u8], Record> {
    let (input, header) = parse_header(input)?;
    let (input, sequence) = parse_sequence(input)?;
    Ok((input, Record::new(header.to_string(), sequence)))
}

/// Parse FASTA records from a byte buffer
pub fn parse_fasta_from_bytes(data: &[u8]) -> Result<Vec<Record>> {
    let mut input = data;
    let mut records = Vec::new();

    while !input.is_empty() {
        // Skip empty lines and whitespace
        while !input.is_empty() && input[0].is_ascii_whitespace() {
            input = &input[1..];
        }

        if input.is_empty() {
            break;
        }

        if input[0] != b'>' {
            return Err(SeqrankError::Parse(
                "Expected '>' at start of FASTA record".to_string(),
            ));
        }

        match parse_record(input) {
            Ok((remaining, record)) => {
                if !record.is_empty() {
                    records.push(record);
                }
                input = remaining;
            }
            Err(e) => {
                return Err(SeqrankError::Parse(format!("Failed to parse FASTA: {:?}", e)));
            }
        }
    }

    Ok(records)
}

/// Parse a FASTA file into records (supports .gz compression)
pub fn parse_fasta<P: AsRef<Path>>(path: P) -> Result<Vec<Record>> {
    let path = path.as_ref();

    if path.extension().and_then(|s| s.to_str()) == Some("gz") {
        let file = File::open(path)?;
        let mut decoder = GzDecoder::new(BufReader::new(file));
        let mut buffer = Vec::new();
        decoder.read_to_end(&mut buffer)?;
        parse_fasta_from_bytes(&buffer)
    } else {
        let file = File::open(path)?;
        if file.metadata()?.len() == 0 {
            return Ok(Vec::new());
        }
        let mmap = unsafe { Mmap::map(&file)? };
        parse_fasta_from_bytes(&mmap[..])
    }
}

/// Open an output sink, gzip-compressing when the path ends in `.gz`.
pub fn open_output<P: AsRef<Path>>(path: P) -> Result<Box<dyn Write>> {
    let path = path.as_ref();
    let file = File::create(path)?;

    if path.extension().and_then(|s| s.to_str()) == Some("gz") {
        let encoder = GzEncoder::new(file, Compression::default());
        Ok(Box::new(BufWriter::new(encoder)))
    } else {
        Ok(Box::new(BufWriter::new(file)))
    }
}

/// Write residues wrapped at `width` columns (0 = single line).
pub fn write_wrapped<W: Write + ?Sized>(
    writer: &mut W,
    sequence: &[u8],
    width: usize,
) -> std::io::Result<()> {
    if width == 0 {
        if !sequence.is_empty() {
            writer.write_all(sequence)?;
            writer.write_all(b"\n")?;
        }
        return Ok(());
    }

    for chunk in sequence.chunks(width) {
        writer.write_all(chunk)?;
        writer.write_all(b"\n")?;
    }
    Ok(())
}
