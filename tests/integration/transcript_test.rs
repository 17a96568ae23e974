//! Integration tests for descriptor loading

use autocue::player::MediaType;
use autocue::transcript::{MediaDescriptor, TranscriptError};

use crate::helpers::{fixture_path, load_fixture};

#[test]
fn scenario_fixture_loads() {
    let descriptor = load_fixture("scenario.json");

    assert_eq!(descriptor.title.as_deref(), Some("Kristiansand: kaffe"));
    assert_eq!(descriptor.corpus_id.as_deref(), Some("NDC"));
    assert_eq!(descriptor.transcript.len(), 3);
    assert_eq!((descriptor.start_at, descriptor.end_at), (0, 2));
    assert_eq!(descriptor.transcript[1].text("word"), "det stemmer");
}

#[test]
fn numeric_strings_load_like_numbers() {
    let descriptor = load_fixture("legacy_strings.json");

    assert_eq!(descriptor.title, None);
    assert_eq!(descriptor.display_attribute, "word");
    assert_eq!(descriptor.corpus_id.as_deref(), Some("42"));
    assert_eq!((descriptor.start_at, descriptor.end_at), (1, 1));
    assert_eq!(descriptor.transcript[2].to, 9.0);
}

#[test]
fn match_flag_and_attributes_survive_loading() {
    let descriptor = load_fixture("scenario.json");
    let word = &descriptor.transcript[1].words[1];

    assert!(word.is_match);
    assert_eq!(word.display("word"), "stemmer");
    assert_eq!(
        word.describe(),
        vec!["lemma : stemme", "pos : verb/pres", "word : stemmer"]
    );
}

#[test]
fn audio_sources_use_mp3_files() {
    let descriptor = load_fixture("long.json");
    let sources = descriptor.sources(std::path::Path::new("/srv/media"), MediaType::Audio);

    assert_eq!(sources.len(), 2);
    assert_eq!(sources[0].format, "m4v");
    assert_eq!(sources[1].format, "mp3");
    assert_eq!(
        sources[0].location,
        std::path::PathBuf::from("/srv/media/test/audio/long_01.mp3")
    );
}

#[test]
fn inverted_bounds_are_rejected() {
    let err = MediaDescriptor::load(fixture_path("inverted_bounds.json")).unwrap_err();
    assert!(matches!(err, TranscriptError::InvalidBounds { .. }));
    assert!(err.to_string().contains("minStart"));
}

#[test]
fn truncated_json_is_a_parse_error() {
    let err = MediaDescriptor::load(fixture_path("truncated.json")).unwrap_err();
    assert!(matches!(err, TranscriptError::Parse(_)));
}

#[test]
fn missing_file_is_an_io_error() {
    let err = MediaDescriptor::load(fixture_path("does_not_exist.json")).unwrap_err();
    assert!(matches!(err, TranscriptError::Io { .. }));
    assert!(err.to_string().contains("does_not_exist.json"));
}

#[test]
fn last_line_below_max_end_is_rejected() {
    let err = MediaDescriptor::load(fixture_path("short_last_line.json")).unwrap_err();
    assert!(matches!(
        err,
        TranscriptError::InvalidLastLine {
            last_line: 0,
            max_end: 2,
            ..
        }
    ));
    assert!(err.to_string().contains("lastLine"));
}

#[test]
fn last_line_past_transcript_is_rejected() {
    let err = MediaDescriptor::load(fixture_path("huge_last_line.json")).unwrap_err();
    assert!(matches!(
        err,
        TranscriptError::InvalidLastLine {
            last_line: usize::MAX,
            len: 3,
            ..
        }
    ));
}
