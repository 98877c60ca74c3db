//! Portal fixtures shared by the integration tests
//!
//! One analysis set with two input measurement sets, two samples, a donor,
//! an assay term and a processed file derived from a raw file.

#![allow(dead_code)]

use igvf_metadata::api::MemorySource;
use serde_json::json;

pub const ACCESSION: &str = "IGVFDS0000AAAA";
pub const ANALYSIS_SET: &str = "/analysis-sets/IGVFDS0000AAAA/";
pub const MEASUREMENT_SET_1: &str = "/measurement-sets/IGVFDS1111AAAA/";
pub const MEASUREMENT_SET_2: &str = "/measurement-sets/IGVFDS2222AAAA/";
pub const SAMPLE_1: &str = "/in-vitro-systems/IGVFSM1111AAAA/";
pub const SAMPLE_2: &str = "/in-vitro-systems/IGVFSM2222AAAA/";
pub const DONOR: &str = "/human-donors/IGVFDO1111AAAA/";
pub const ASSAY_TERM: &str = "/assay-terms/OBI_0002083/";
pub const PROCESSED_FILE: &str = "/alignment-files/IGVFFI1111AAAA/";
pub const RAW_FILE: &str = "/sequence-files/IGVFFI0000AAAA/";

pub fn portal() -> MemorySource {
    MemorySource::new()
        .with(json!({
            "@id": ANALYSIS_SET,
            "accession": ACCESSION,
            "status": "released",
            "input_file_sets": [
                {"@id": MEASUREMENT_SET_1, "accession": "IGVFDS1111AAAA"},
                {"@id": MEASUREMENT_SET_2, "accession": "IGVFDS2222AAAA"}
            ],
            "samples": [{"@id": SAMPLE_1}, {"@id": SAMPLE_2}],
            "files": [{"@id": PROCESSED_FILE}]
        }))
        .with(json!({
            "@id": MEASUREMENT_SET_1,
            "accession": "IGVFDS1111AAAA",
            "aliases": ["lab:ms-1"],
            "status": "released",
            "audit": {},
            "summary": "whole genome sequencing of two samples",
            "samples": [{"@id": SAMPLE_1}, {"@id": SAMPLE_2}],
            "donors": [DONOR],
            "assay_term": {"@id": ASSAY_TERM, "term_name": "whole genome sequencing"},
            "documents": []
        }))
        .with(json!({
            "@id": MEASUREMENT_SET_2,
            "accession": "IGVFDS2222AAAA",
            "status": "in progress",
            "audit": {"WARNING": [{"category": "missing documents"}]},
            "samples": [{"@id": SAMPLE_2}],
            "assay_term": ASSAY_TERM
        }))
        .with(json!({
            "@id": SAMPLE_1,
            "accession": "IGVFSM1111AAAA",
            "status": "released",
            "audit": {},
            "donors": [{"@id": DONOR}]
        }))
        .with(json!({
            "@id": SAMPLE_2,
            "accession": "IGVFSM2222AAAA",
            "status": "in progress",
            "audit": {}
        }))
        .with(json!({
            "@id": DONOR,
            "accession": "IGVFDO1111AAAA",
            "status": "released",
            "audit": {},
            "summary": "Homo sapiens adult male"
        }))
        .with(json!({
            "@id": ASSAY_TERM,
            "status": "released",
            "term_name": "whole genome sequencing"
        }))
        .with(json!({
            "@id": PROCESSED_FILE,
            "accession": "IGVFFI1111AAAA",
            "status": "released",
            "audit": {},
            "file_format": "bam",
            "file_size": 1024,
            "content_type": "alignments",
            "derived_from": [RAW_FILE]
        }))
        .with(json!({
            "@id": RAW_FILE,
            "accession": "IGVFFI0000AAAA",
            "status": "released",
            "audit": {},
            "file_format": "fastq",
            "content_type": "reads"
        }))
}
