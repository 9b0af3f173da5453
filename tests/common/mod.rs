//! Minimal EXIF fixtures: a little-endian TIFF block with an IFD0 that points
//! at a GPS IFD, wrapped in a bare JPEG (SOI, APP1, EOI) when needed.

#![allow(dead_code)]

use std::fs;
use std::path::Path;

const TYPE_ASCII: u16 = 2;
const TYPE_SHORT: u16 = 3;
const TYPE_LONG: u16 = 4;
const TYPE_RATIONAL: u16 = 5;

const TAG_ORIENTATION: u16 = 0x0112;
const TAG_GPS_IFD: u16 = 0x8825;

#[derive(Debug, Clone, Default)]
pub struct GpsFixture {
    pub lat: Option<[(u32, u32); 3]>,
    pub lat_ref: Option<&'static str>,
    pub lon: Option<[(u32, u32); 3]>,
    pub lon_ref: Option<&'static str>,
    pub alt: Option<(u32, u32)>,
}

impl GpsFixture {
    pub fn whole(
        lat: (u32, u32, u32),
        lat_ref: &'static str,
        lon: (u32, u32, u32),
        lon_ref: &'static str,
        alt: (u32, u32),
    ) -> Self {
        Self {
            lat: Some([(lat.0, 1), (lat.1, 1), (lat.2, 1)]),
            lat_ref: Some(lat_ref),
            lon: Some([(lon.0, 1), (lon.1, 1), (lon.2, 1)]),
            lon_ref: Some(lon_ref),
            alt: Some(alt),
        }
    }
}

struct Entry {
    tag: u16,
    kind: u16,
    count: u32,
    payload: Vec<u8>,
}

fn rational_bytes(values: &[(u32, u32)]) -> Vec<u8> {
    values
        .iter()
        .flat_map(|&(n, d)| n.to_le_bytes().into_iter().chain(d.to_le_bytes()))
        .collect()
}

fn ascii_entry(tag: u16, text: &str) -> Entry {
    let mut payload = text.as_bytes().to_vec();
    payload.push(0);
    Entry { tag, kind: TYPE_ASCII, count: payload.len() as u32, payload }
}

fn gps_entries(gps: &GpsFixture) -> Vec<Entry> {
    let mut entries = Vec::new();
    if let Some(r) = gps.lat_ref {
        entries.push(ascii_entry(1, r));
    }
    if let Some(v) = gps.lat {
        entries.push(Entry { tag: 2, kind: TYPE_RATIONAL, count: 3, payload: rational_bytes(&v) });
    }
    if let Some(r) = gps.lon_ref {
        entries.push(ascii_entry(3, r));
    }
    if let Some(v) = gps.lon {
        entries.push(Entry { tag: 4, kind: TYPE_RATIONAL, count: 3, payload: rational_bytes(&v) });
    }
    if let Some(v) = gps.alt {
        entries.push(Entry {
            tag: 6,
            kind: TYPE_RATIONAL,
            count: 1,
            payload: rational_bytes(&[v]),
        });
    }
    entries
}

/// Serializes an IFD at `offset`; values longer than 4 bytes follow the IFD.
fn write_ifd(out: &mut Vec<u8>, offset: usize, entries: &[Entry]) {
    assert_eq!(out.len(), offset);
    let mut data_offset = offset + 2 + entries.len() * 12 + 4;
    let mut data = Vec::new();

    out.extend_from_slice(&(entries.len() as u16).to_le_bytes());
    for entry in entries {
        out.extend_from_slice(&entry.tag.to_le_bytes());
        out.extend_from_slice(&entry.kind.to_le_bytes());
        out.extend_from_slice(&entry.count.to_le_bytes());
        if entry.payload.len() <= 4 {
            let mut inline = entry.payload.clone();
            inline.resize(4, 0);
            out.extend_from_slice(&inline);
        } else {
            out.extend_from_slice(&(data_offset as u32).to_le_bytes());
            data.extend_from_slice(&entry.payload);
            data_offset += entry.payload.len();
        }
    }
    out.extend_from_slice(&0u32.to_le_bytes());
    out.extend_from_slice(&data);
}

/// TIFF block with a GPS IFD, or with only an Orientation tag when `gps` is `None`.
pub fn tiff_block(gps: Option<&GpsFixture>) -> Vec<u8> {
    let mut out = b"II".to_vec();
    out.extend_from_slice(&42u16.to_le_bytes());
    out.extend_from_slice(&8u32.to_le_bytes());

    match gps {
        Some(gps) => {
            let gps_offset = 8 + 2 + 12 + 4;
            let pointer = Entry {
                tag: TAG_GPS_IFD,
                kind: TYPE_LONG,
                count: 1,
                payload: (gps_offset as u32).to_le_bytes().to_vec(),
            };
            write_ifd(&mut out, 8, &[pointer]);
            write_ifd(&mut out, gps_offset, &gps_entries(gps));
        }
        None => {
            let orientation = Entry {
                tag: TAG_ORIENTATION,
                kind: TYPE_SHORT,
                count: 1,
                payload: 1u16.to_le_bytes().to_vec(),
            };
            write_ifd(&mut out, 8, &[orientation]);
        }
    }
    out
}

pub fn jpeg_with_exif(gps: Option<&GpsFixture>) -> Vec<u8> {
    jpeg_with_app1(&tiff_block(gps))
}

/// JPEG whose APP1 segment carries `tiff` verbatim after the Exif marker.
pub fn jpeg_with_app1(tiff: &[u8]) -> Vec<u8> {
    let mut out = vec![0xFF, 0xD8, 0xFF, 0xE1];
    out.extend_from_slice(&((2 + 6 + tiff.len()) as u16).to_be_bytes());
    out.extend_from_slice(b"Exif\0\0");
    out.extend_from_slice(tiff);
    out.extend_from_slice(&[0xFF, 0xD9]);
    out
}

/// JPEG without any APP1 segment.
pub fn jpeg_without_exif() -> Vec<u8> {
    vec![0xFF, 0xD8, 0xFF, 0xD9]
}

pub fn write_jpeg(dir: &Path, name: &str, gps: Option<&GpsFixture>) {
    fs::write(dir.join(name), jpeg_with_exif(gps)).unwrap();
}
