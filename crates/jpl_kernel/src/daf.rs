//! DAF (Double precision Array File) binary layout.
//!
//! Reference: NAIF DAF Required Reading (public domain, US Government
//! work product). Parsing follows that specification directly.

use crate::error::KernelError;

/// Every DAF record — file record, summary records, name records, data
/// records — is this many bytes.
const RECORD_BYTES: usize = 1024;

const LTL_IEEE: &[u8; 8] = b"LTL-IEEE";
const BIG_IEEE: &[u8; 8] = b"BIG-IEEE";

/// Byte order a DAF file was written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endianness {
    Little,
    Big,
}

impl Endianness {
    pub(crate) fn f64_at(self, data: &[u8], offset: usize) -> f64 {
        let raw: [u8; 8] = data[offset..offset + 8].try_into().unwrap();
        match self {
            Self::Little => f64::from_le_bytes(raw),
            Self::Big => f64::from_be_bytes(raw),
        }
    }

    pub(crate) fn i32_at(self, data: &[u8], offset: usize) -> i32 {
        let raw: [u8; 4] = data[offset..offset + 4].try_into().unwrap();
        match self {
            Self::Little => i32::from_le_bytes(raw),
            Self::Big => i32::from_be_bytes(raw),
        }
    }
}

/// The fixed-layout first record of a DAF file.
#[derive(Debug, Clone)]
pub struct FileRecord {
    pub file_id: String,
    pub nd: i32,
    pub ni: i32,
    pub internal_name: String,
    pub fward: i32,
    pub bward: i32,
    pub free: i32,
    pub endianness: Endianness,
}

/// One summary's double- and integer-component arrays, still untyped.
#[derive(Debug, Clone)]
pub struct DafSummary {
    pub doubles: Vec<f64>,
    pub integers: Vec<i32>,
}

/// Parse the file record occupying bytes `0..1024`.
pub fn parse_file_record(data: &[u8]) -> Result<FileRecord, KernelError> {
    if data.len() < RECORD_BYTES {
        return Err(KernelError::Truncated { needed: RECORD_BYTES, got: data.len() });
    }

    let locfmt = &data[88..96];
    let endianness = if locfmt == LTL_IEEE {
        Endianness::Little
    } else if locfmt == BIG_IEEE {
        Endianness::Big
    } else {
        return Err(KernelError::UnknownByteOrder(String::from_utf8_lossy(locfmt).to_string()));
    };

    let file_id = String::from_utf8_lossy(&data[0..8]).trim().to_string();
    if !file_id.starts_with("DAF/") {
        return Err(KernelError::NotADaf(file_id));
    }

    Ok(FileRecord {
        file_id,
        nd: endianness.i32_at(data, 8),
        ni: endianness.i32_at(data, 12),
        internal_name: String::from_utf8_lossy(&data[16..76]).trim().to_string(),
        fward: endianness.i32_at(data, 76),
        bward: endianness.i32_at(data, 80),
        free: endianness.i32_at(data, 84),
        endianness,
    })
}

/// Summary size in doubles: `ND + ceil(NI / 2)`.
fn summary_size_doubles(nd: i32, ni: i32) -> usize {
    nd as usize + (ni as usize).div_ceil(2)
}

/// Walk the singly-linked chain of summary records starting at `fward`
/// and collect every summary they contain, in file order.
pub fn read_summaries(data: &[u8], file_record: &FileRecord) -> Result<Vec<DafSummary>, KernelError> {
    let nd = file_record.nd as usize;
    let ni = file_record.ni as usize;
    let ss = summary_size_doubles(file_record.nd, file_record.ni);
    let endian = file_record.endianness;

    let mut summaries = Vec::new();
    let mut record_num = file_record.fward as usize;

    while record_num != 0 {
        let rec_offset = (record_num - 1) * RECORD_BYTES;
        if rec_offset + RECORD_BYTES > data.len() {
            return Err(KernelError::MalformedSummary(format!(
                "summary record {record_num} extends past end of file"
            )));
        }

        let next_record = endian.f64_at(data, rec_offset);
        let count = endian.f64_at(data, rec_offset + 16) as usize;

        // The summaries themselves start at double index 3 (byte 24).
        for slot in 0..count {
            let sum_offset = rec_offset + 24 + slot * ss * 8;
            if sum_offset + ss * 8 > rec_offset + RECORD_BYTES {
                return Err(KernelError::MalformedSummary(format!(
                    "summary {slot} in record {record_num} overruns its record"
                )));
            }

            let doubles = (0..nd).map(|d| endian.f64_at(data, sum_offset + d * 8)).collect();
            let int_base = sum_offset + nd * 8;
            let integers = (0..ni).map(|j| endian.i32_at(data, int_base + j * 4)).collect();

            summaries.push(DafSummary { doubles, integers });
        }

        // A NEXT of 0.0 terminates the chain.
        record_num = next_record as usize;
    }

    Ok(summaries)
}
