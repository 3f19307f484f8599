/*!
 * Tests for subtitle parsing, serialization and validation
 */

use subtrans::subtitle_processor::{validate_srt_content, SubtitleCollection, SubtitleEntry};

#[test]
fn test_parse_simpleContent_shouldExtractAllEntries() {
    let content = "1\n\
                   00:00:01,000 --> 00:00:03,000\n\
                   Hello world\n\
                   \n\
                   2\n\
                   00:00:04,000 --> 00:00:06,000\n\
                   How are you?\n\
                   \n\
                   3\n\
                   00:00:07,500 --> 00:00:09,200\n\
                   I'm fine, thank you";

    let collection = SubtitleCollection::parse(content);

    assert_eq!(collection.len(), 3);
    assert_eq!(
        collection.entries[0],
        SubtitleEntry::new("00:00:01,000", "00:00:03,000", "Hello world")
    );
    assert_eq!(
        collection.entries[1],
        SubtitleEntry::new("00:00:04,000", "00:00:06,000", "How are you?")
    );
    assert_eq!(
        collection.entries[2],
        SubtitleEntry::new("00:00:07,500", "00:00:09,200", "I'm fine, thank you")
    );
}

#[test]
fn test_parse_multilineText_shouldJoinWithSingleSpaces() {
    let content = "1\n\
                   00:00:01,000 --> 00:00:04,000\n\
                   This is a longer subtitle\n\
                   that spans multiple lines\n\
                   and should be joined together";

    let collection = SubtitleCollection::parse(content);

    assert_eq!(collection.len(), 1);
    assert_eq!(
        collection.entries[0].text,
        "This is a longer subtitle that spans multiple lines and should be joined together"
    );
}

#[test]
fn test_parse_malformedBlock_shouldSkipSilently() {
    let content = "1\n\
                   Invalid timestamp format\n\
                   Some text\n\
                   \n\
                   2\n\
                   00:00:04,000 --> 00:00:06,000\n\
                   Valid entry";

    let collection = SubtitleCollection::parse(content);

    assert_eq!(collection.len(), 1);
    assert_eq!(collection.entries[0].text, "Valid entry");
}

#[test]
fn test_parse_nonNumericSequenceLine_shouldSkipBlock() {
    let content = "one\n\
                   00:00:01,000 --> 00:00:03,000\n\
                   Text under a bad sequence line\n\
                   \n\
                   2\n\
                   00:00:04,000 --> 00:00:06,000\n\
                   Valid entry";

    let collection = SubtitleCollection::parse(content);

    assert_eq!(collection.len(), 1);
    assert_eq!(collection.entries[0].text, "Valid entry");
}

#[test]
fn test_parse_unicodeContent_shouldPreserveText() {
    let content = "1\n\
                   00:00:01,000 --> 00:00:03,000\n\
                   Hello world\n\
                   \n\
                   2\n\
                   00:00:04,000 --> 00:00:06,000\n\
                   こんにちはWorld\n\
                   \n\
                   3\n\
                   00:00:07,000 --> 00:00:09,000\n\
                   Héllo wörld! 🎬";

    let collection = SubtitleCollection::parse(content);

    assert_eq!(collection.len(), 3);
    assert_eq!(collection.entries[1].text, "こんにちはWorld");
    assert_eq!(collection.entries[2].text, "Héllo wörld! 🎬");
}

#[test]
fn test_parse_emptyTextBlock_shouldBeExcluded() {
    let content = "1\n\
                   00:00:01,000 --> 00:00:03,000\n\
                   Valid text\n\
                   \n\
                   2\n\
                   00:00:04,000 --> 00:00:06,000\n\
                   \n\
                   \n\
                   3\n\
                   00:00:07,000 --> 00:00:09,000\n\
                   Another valid text";

    let collection = SubtitleCollection::parse(content);

    assert_eq!(collection.len(), 2);
    assert_eq!(collection.entries[0].text, "Valid text");
    assert_eq!(collection.entries[1].text, "Another valid text");
}

#[test]
fn test_parse_specialCharacters_shouldBePreserved() {
    let content = "1\n\
                   00:00:01,000 --> 00:00:03,000\n\
                   \"Hello,\" he said... 'Really?'\n\
                   \n\
                   2\n\
                   00:00:04,000 --> 00:00:06,000\n\
                   [Music playing] ♪ La la la ♪\n\
                   \n\
                   3\n\
                   00:00:07,000 --> 00:00:09,000\n\
                   <i>Italic text</i> & <b>bold text</b>";

    let collection = SubtitleCollection::parse(content);

    assert_eq!(collection.len(), 3);
    assert_eq!(collection.entries[0].text, "\"Hello,\" he said... 'Really?'");
    assert_eq!(collection.entries[1].text, "[Music playing] ♪ La la la ♪");
    assert_eq!(collection.entries[2].text, "<i>Italic text</i> & <b>bold text</b>");
}

#[test]
fn test_parse_emptyContent_shouldReturnEmptyCollection() {
    assert!(SubtitleCollection::parse("").is_empty());
    assert!(SubtitleCollection::parse("   \n\n  ").is_empty());
}

#[test]
fn test_toSrtString_shouldRenderExpectedFormat() {
    let collection = SubtitleCollection::from_entries(vec![
        SubtitleEntry::new("00:00:01,000", "00:00:03,000", "Hello world"),
        SubtitleEntry::new("00:00:04,000", "00:00:06,000", "How are you?"),
        SubtitleEntry::new("00:00:07,500", "00:00:09,200", "I am fine, thank you"),
    ]);

    let expected = "1\n00:00:01,000 --> 00:00:03,000\nHello world\n\n\
                    2\n00:00:04,000 --> 00:00:06,000\nHow are you?\n\n\
                    3\n00:00:07,500 --> 00:00:09,200\nI am fine, thank you\n";

    assert_eq!(collection.to_srt_string(), expected);
}

#[test]
fn test_toSrtString_shouldRenumberFromOne() {
    let content = "10\n\
                   00:00:01,000 --> 00:00:03,000\n\
                   First\n\
                   \n\
                   20\n\
                   00:00:04,000 --> 00:00:06,000\n\
                   Second";

    let output = SubtitleCollection::parse(content).to_srt_string();

    assert!(output.starts_with("1\n00:00:01,000"));
    assert!(output.contains("\n2\n00:00:04,000"));
    assert!(!output.contains("10"));
}

#[test]
fn test_roundTrip_shouldPreserveEntries() {
    let original = "1\n\
                    00:00:01,000 --> 00:00:03,000\n\
                    Original text\n\
                    \n\
                    2\n\
                    00:00:04,000 --> 00:00:06,000\n\
                    Another line";

    let parsed = SubtitleCollection::parse(original);
    let reparsed = SubtitleCollection::parse(&parsed.to_srt_string());

    assert_eq!(parsed, reparsed);
}

#[test]
fn test_withTexts_shouldReplaceTextAndKeepTimestamps() {
    let collection = SubtitleCollection::from_entries(vec![
        SubtitleEntry::new("00:00:01,000", "00:00:03,000", "Hello"),
        SubtitleEntry::new("00:00:04,000", "00:00:06,000", "World"),
    ]);

    let translated =
        collection.with_texts(&["你好".to_string(), "世界".to_string()]);

    assert_eq!(translated.entries[0].text, "你好");
    assert_eq!(translated.entries[0].start, "00:00:01,000");
    assert_eq!(translated.entries[1].text, "世界");
    assert_eq!(translated.entries[1].end, "00:00:06,000");
}

#[test]
fn test_validateSrtContent_shouldAcceptValidAndRejectInvalid() {
    let valid = "1\n00:00:01,000 --> 00:00:03,000\nHello world";
    assert!(validate_srt_content(valid));

    // No timestamps at all
    assert!(!validate_srt_content("1\nSome text without timestamps"));

    // Wrong timestamp format
    assert!(!validate_srt_content("1\n00:01 --> 00:03\nText"));

    // Empty content never panics
    assert!(!validate_srt_content(""));

    let valid_multiple = "1\n00:00:01,000 --> 00:00:03,000\nFirst line\n\n\
                          2\n00:00:04,000 --> 00:00:06,000\nSecond line";
    assert!(validate_srt_content(valid_multiple));
}

#[test]
fn test_fileRoundTrip_shouldPreserveEntries() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let path = dir.path().join("subtitles").join("output.srt");

    let collection = SubtitleCollection::from_entries(vec![
        SubtitleEntry::new("00:00:01,000", "00:00:03,000", "Hello world"),
        SubtitleEntry::new("00:00:04,000", "00:00:06,000", "さようなら 🎬"),
    ]);

    collection.write_to_srt(&path).expect("write should succeed");
    let loaded = SubtitleCollection::from_file(&path).expect("read should succeed");

    assert_eq!(collection, loaded);
}
