use std::{collections::BTreeMap, fmt};

use xxhash_rust::xxh3::Xxh3;

use crate::document::{
    encoder::EncoderConfig,
    glyph::{Character, Component, Glyph},
    model::{Analysis, Data, Document, ElementConfig, Info},
};

const XXH3_SEED: u64 = 0x5c4e_9a1f_03d7_b26e;

/// Stable 128-bit content hash of a [`Document`].
///
/// Documents that compare equal produce equal fingerprints, independent of how much structure the
/// two share in memory. NaN coordinates never compare equal and are hashed by their bits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Fingerprint {
    /// High 64 bits.
    pub hi: u64,
    /// Low 64 bits.
    pub lo: u64,
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}{:016x}", self.hi, self.lo)
    }
}

impl Document {
    /// Content fingerprint used for change detection.
    pub fn fingerprint(&self) -> Fingerprint {
        let mut h = StableHasher::new();
        write_document(&mut h, self);
        h.finish()
    }
}

struct StableHasher {
    inner: Xxh3,
}

impl StableHasher {
    fn new() -> Self {
        Self {
            inner: Xxh3::with_seed(XXH3_SEED),
        }
    }

    fn write_bytes(&mut self, b: &[u8]) {
        self.inner.update(b);
    }

    fn write_u8(&mut self, v: u8) {
        self.write_bytes(&[v]);
    }

    fn write_bool(&mut self, v: bool) {
        self.write_u8(u8::from(v));
    }

    fn write_u32(&mut self, v: u32) {
        self.write_bytes(&v.to_le_bytes());
    }

    fn write_u64(&mut self, v: u64) {
        self.write_bytes(&v.to_le_bytes());
    }

    // -0.0 == 0.0, so both hash as +0.0.
    fn write_f64(&mut self, v: f64) {
        let v = if v == 0.0 { 0.0 } else { v };
        self.write_u64(v.to_bits());
    }

    fn write_len(&mut self, len: usize) {
        self.write_u64(len as u64);
    }

    // Length prefix keeps ("ab", "c") and ("a", "bc") apart.
    fn write_str(&mut self, s: &str) {
        self.write_len(s.len());
        self.write_bytes(s.as_bytes());
    }

    fn write_opt_str(&mut self, s: Option<&str>) {
        match s {
            Some(s) => {
                self.write_u8(1);
                self.write_str(s);
            }
            None => self.write_u8(0),
        }
    }

    fn write_strs<'a>(&mut self, items: impl ExactSizeIterator<Item = &'a str>) {
        self.write_len(items.len());
        for s in items {
            self.write_str(s);
        }
    }

    fn finish(self) -> Fingerprint {
        let v = self.inner.digest128();
        Fingerprint {
            hi: (v >> 64) as u64,
            lo: v as u64,
        }
    }
}

fn write_document(h: &mut StableHasher, doc: &Document) {
    h.write_str(&doc.version);
    h.write_opt_str(doc.source.as_deref());
    write_info(h, &doc.info);
    write_data(h, &doc.data);
    write_element(h, &doc.form);
    write_element(h, &doc.pronunciation);
    write_encoder(h, &doc.encoder);
}

fn write_info(h: &mut StableHasher, info: &Info) {
    h.write_str(&info.name);
    h.write_opt_str(info.author.as_deref());
    h.write_opt_str(info.version.as_deref());
    h.write_opt_str(info.description.as_deref());
}

fn write_data(h: &mut StableHasher, data: &Data) {
    h.write_len(data.form.len());
    for (key, glyph) in data.form.iter() {
        h.write_str(key);
        write_glyph(h, glyph);
    }

    h.write_len(data.repertoire.len());
    for (key, character) in data.repertoire.iter() {
        h.write_str(key);
        write_character(h, character);
    }

    h.write_len(data.classifier.len());
    for (feature, rank) in data.classifier.iter() {
        h.write_str(feature.as_str());
        h.write_u32(*rank);
    }
}

fn write_glyph(h: &mut StableHasher, glyph: &Glyph) {
    h.write_u32(glyph.unicode);
    h.write_opt_str(glyph.name.as_deref());
    match &glyph.component {
        Some(c) => {
            h.write_u8(1);
            write_component(h, c);
        }
        None => h.write_u8(0),
    }
    match &glyph.compound {
        Some(list) => {
            h.write_u8(1);
            h.write_len(list.len());
            for compound in list {
                h.write_u32(u32::from(compound.operator.symbol()));
                h.write_strs(compound.operand_list.iter().map(String::as_str));
            }
        }
        None => h.write_u8(0),
    }
}

fn write_character(h: &mut StableHasher, character: &Character) {
    h.write_len(character.shape.len());
    for c in &character.shape {
        write_component(h, c);
    }
}

fn write_component(h: &mut StableHasher, component: &Component) {
    h.write_len(component.shape.len());
    for shape in &component.shape {
        h.write_str(&shape.reference);
        h.write_len(shape.glyph.len());
        for stroke in &shape.glyph {
            h.write_str(stroke.feature.as_str());
            h.write_f64(stroke.start[0]);
            h.write_f64(stroke.start[1]);
            h.write_len(stroke.curve_list.len());
            for curve in &stroke.curve_list {
                h.write_str(&curve.command);
                h.write_len(curve.parameter_list.len());
                for &p in &curve.parameter_list {
                    h.write_f64(p);
                }
            }
        }
    }
}

fn write_element(h: &mut StableHasher, element: &ElementConfig) {
    h.write_str(&element.alphabet);
    h.write_u32(element.max_code_length);
    write_string_map(h, &element.mapping);
    write_string_map(h, &element.grouping);
    match element.analysis.as_deref() {
        Some(a) => {
            h.write_u8(1);
            write_analysis(h, a);
        }
        None => h.write_u8(0),
    }
}

fn write_string_map(h: &mut StableHasher, map: &BTreeMap<String, String>) {
    h.write_len(map.len());
    for (k, v) in map {
        h.write_str(k);
        h.write_str(v);
    }
}

fn write_analysis(h: &mut StableHasher, analysis: &Analysis) {
    match &analysis.degenerator {
        Some(d) => {
            h.write_u8(1);
            match &d.feature {
                Some(feature) => {
                    h.write_u8(1);
                    h.write_len(feature.len());
                    for (from, to) in feature {
                        h.write_str(from.as_str());
                        h.write_str(to.as_str());
                    }
                }
                None => h.write_u8(0),
            }
            h.write_bool(d.no_cross);
        }
        None => h.write_u8(0),
    }

    match &analysis.selector {
        Some(chain) => {
            h.write_u8(1);
            h.write_strs(chain.iter().map(|s| s.label()));
        }
        None => h.write_u8(0),
    }

    for list in [&analysis.strong, &analysis.weak] {
        match list {
            Some(roots) => {
                h.write_u8(1);
                h.write_strs(roots.iter().map(String::as_str));
            }
            None => h.write_u8(0),
        }
    }

    match &analysis.customize {
        Some(map) => {
            h.write_u8(1);
            h.write_len(map.len());
            for (key, roots) in map {
                h.write_str(key);
                h.write_strs(roots.iter().map(String::as_str));
            }
        }
        None => h.write_u8(0),
    }
}

fn write_encoder(h: &mut StableHasher, encoder: &EncoderConfig) {
    h.write_len(encoder.nodes.len());
    for node in &encoder.nodes {
        h.write_str(&node.id);
        h.write_str(&node.label);
    }
    h.write_len(encoder.edges.len());
    for edge in &encoder.edges {
        h.write_str(&edge.source);
        h.write_str(&edge.target);
        h.write_len(edge.conditions.len());
        for c in &edge.conditions {
            h.write_str(&c.to_string());
        }
    }
    h.write_len(encoder.extra.len());
    for (k, v) in &encoder.extra {
        h.write_str(k);
        h.write_str(&v.to_string());
    }
}

#[cfg(test)]
#[path = "../../tests/unit/engine/fingerprint.rs"]
mod tests;
