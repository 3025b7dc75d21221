use once_cell::sync::Lazy;
use regex::Regex;

/// Abundance annotation as written by dereplication tools: `size=N`,
/// delimited by `;` or the ends of the header.
static SIZE_ANNOTATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(^|;)size=(\d+)(;|$)").unwrap());

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Full header line without the leading `>`.
    pub header: String,
    /// Sequence residues, uppercased at parse time.
    pub sequence: Vec<u8>,
    /// Abundance from the header annotation; 1 when absent.
    pub abundance: u64,
}

impl Record {
    pub fn new(header: String, sequence: Vec<u8>) -> Self {
        let abundance = parse_abundance(&header).unwrap_or(1);
        Self {
            header,
            sequence,
            abundance,
        }
    }

    pub fn with_abundance(mut self, abundance: u64) -> Self {
        self.abundance = abundance;
        self
    }

    /// Identifier: header text up to the first whitespace.
    pub fn id(&self) -> &str {
        self.header.split_whitespace().next().unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }
}

/// Parse the `size=N` annotation out of a header, if present.
pub fn parse_abundance(header: &str) -> Option<u64> {
    SIZE_ANNOTATION
        .captures(header)
        .and_then(|caps| caps[2].parse().ok())
}

/// Header with the size annotation removed. Text on either side of the
/// annotation is preserved, joined by a single `;` where both sides exist.
pub fn strip_size_annotation(header: &str) -> String {
    match SIZE_ANNOTATION.captures(header) {
        Some(caps) => {
            let whole = caps.get(0).unwrap();
            let lead = caps.get(1).map_or("", |g| g.as_str());
            let trail = caps.get(3).map_or("", |g| g.as_str());

            let mut out = String::with_capacity(header.len());
            out.push_str(&header[..whole.start()]);
            if lead == ";" && trail == ";" {
                out.push(';');
            }
            out.push_str(&header[whole.end()..]);
            out
        }
        None => header.to_string(),
    }
}

/// Append a `;size=N;` annotation to a header that carries none.
pub fn append_size_annotation(header: &str, abundance: u64) -> String {
    if header.is_empty() {
        format!("size={};", abundance)
    } else if header.ends_with(';') {
        format!("{}size={};", header, abundance)
    } else {
        format!("{};size={};", header, abundance)
    }
}
