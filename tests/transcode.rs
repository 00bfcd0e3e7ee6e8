mod common;

use krutidev::{
    cleanup, inspect, transcode, transcode_bytes, Residual, Rule, RuleTable, Transcoder,
};
use regex::Regex;

#[test]
fn test_empty() {
    assert_eq!("", transcode(""));
}

#[test]
fn test_vowel_sign_and_consonant() {
    assert_eq!("आज", transcode("vkt"));
}

#[test]
fn test_longer_pattern_first() {
    assert_eq!("भारत", transcode("Hkkjr"));
}

#[test]
fn test_pre_posed_vowel_sign() {
    assert_eq!("कि", transcode("fd"));
}

#[test]
fn test_reph() {
    assert_eq!("र्क", transcode("dZ"));
    assert_eq!("कार्यक्रम", transcode("dk;ZØe"));
}

#[test]
fn test_many_rephs() {
    let n = 30_000;
    let output = transcode(&"dZ".repeat(n));

    assert_eq!(3 * n, output.chars().count());
    assert_eq!("र्क".repeat(n), output);
}

#[test]
fn test_words() {
    for (input, expected) in common::read_pairs("tests/fixtures/words.txt") {
        assert_eq!(expected, transcode(&input), "input: {:?}", input);
    }
}

#[test]
fn test_words_are_devanagari() {
    let devanagari = Regex::new(r"^[\u{0900}-\u{097F} ]+$").unwrap();
    for (input, _) in common::read_pairs("tests/fixtures/words.txt") {
        let output = transcode(&input);
        assert!(devanagari.is_match(&output), "{:?} -> {:?}", input, output);
    }
}

#[test]
fn test_deterministic() {
    let text = "Hkkjrh; x.kra= dk;ZdrkZvksa fo|kFkhZ";
    assert_eq!(transcode(text), transcode(text));
}

#[test]
fn test_concurrent_callers() {
    let pairs = common::read_pairs("tests/fixtures/words.txt");
    std::thread::scope(|scope| {
        for (input, expected) in &pairs {
            scope.spawn(move || assert_eq!(*expected, transcode(input)));
        }
    });
}

#[test]
fn test_numerals_and_punctuation() {
    assert_eq!("१२३", transcode("\u{0192}\u{201E}\u{2026}"));
    assert_eq!("(1) ।", transcode("\u{00BC}1\u{00BD} A"));
}

#[test]
fn test_unknown_passthrough() {
    assert_eq!("123 \u{00A2} \u{00A9}\n", transcode("123 \u{00A2} \u{00A9}\n"));
    assert_eq!("क\u{00A2}क", transcode("d\u{00A2}d"));
}

#[test]
fn test_dash() {
    // A dash between spaces is punctuation
    assert_eq!("दो - तीन", transcode("nks \u{2014} rhu"));
    // Before a consonant it is the glyph for कृ
    assert_eq!("दो कृतीन", transcode("nks \u{2014}rhu"));
    assert_eq!("गांव का विकास - योजना", transcode("xkao dk fodkl & ;kstuk"));
}

#[test]
fn test_degenerate_markers() {
    assert_eq!("f", transcode("f"));
    assert_eq!("किf", transcode("fdf"));
    assert_eq!("", transcode("Z"));
    assert_eq!("क\n\nकि", transcode("d\n\nfd"));
    assert_eq!("देर्fa", transcode("ns\u{00C9}"));
}

#[test]
fn test_cleanup_is_idempotent_on_output() {
    for (input, _) in common::read_pairs("tests/fixtures/words.txt") {
        let mut cs: Vec<char> = transcode(&input).chars().collect();
        let expected = cs.clone();
        cleanup(&mut cs);
        assert_eq!(expected, cs, "input: {:?}", input);
    }
}

#[test]
fn test_bytes() {
    assert_eq!("भारत", transcode_bytes(b"Hkkjr"));
    // Á is 0xC1 in Windows-1252
    assert_eq!("प्राथमिक", transcode_bytes(b"\xC1kFkfed"));
    assert_eq!("प्राथमिक", transcode_bytes("\u{00C1}kFkfed".as_bytes()));
    assert_eq!("१", transcode_bytes(&[0x83]));
}

#[test]
fn test_inspect_output() {
    assert_eq!(Vec::<Residual>::new(), inspect(&transcode("fo|kFkhZ")));
    assert_eq!(
        vec![Residual::PrePosedSign { index: 2 }],
        inspect(&transcode("fdf"))
    );
    assert_eq!(
        vec![Residual::LegacyGlyph {
            index: 0,
            ch: '\u{00EE}'
        }],
        inspect(&transcode("\u{00EE}"))
    );
}

#[test]
fn test_custom_table() {
    const RULES: &[Rule] = &[
        Rule::new("dk", "\u{0915}\u{093E}"),
        Rule::new("d", "\u{0915}"),
    ];
    let transcoder = Transcoder::new(RuleTable::new(RULES).unwrap());

    assert_eq!(2, transcoder.table().rules().len());
    assert_eq!("dk", transcoder.table().rules()[0].pattern);

    assert_eq!("काकि", transcoder.transcode("dkfd"));
    assert_eq!("x", transcoder.transcode("x"));
}
