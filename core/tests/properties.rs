//! Invariants of the recursive splitter checked over a spread of inputs.

use recsplit_core::{
    ChunkingConfig, KeepSeparator, Language, RecursiveSplitter, SeparatorSet, SplitError,
    TextSplitter, split,
};

const SAMPLES: &[&str] = &[
    "a",
    "aaaa bbbb cccc",
    "The quick brown fox jumps over the lazy dog. It barks.\n\nA second paragraph follows here.\nWith two lines.",
    "# Title\n\nIntro paragraph with some words.\n\n## Part\n\n- item one\n- item two\n\n```\ncode block\n```\n",
    "class A:\n    def __init__(self):\n        self.a = 1\n\n    def get_a(self):\n        return self.a\n\nobj = A()\nprint(obj.get_a())\n",
    "Ünïcödé façade — naïve café. 日本語のテキストも分割されます。\n\nemoji 🎉🎉🎉 end",
    "nospacesatallinthisverylongwordthatmustbecutbycharacters",
    "\n\n\n   \n\n",
];

fn configs() -> Vec<ChunkingConfig> {
    let mut out = Vec::new();
    for (size, overlap) in [(1, 0), (3, 1), (7, 0), (9, 4), (16, 5), (40, 10), (200, 0)] {
        for separators in [
            Language::Text.separators(),
            Language::Markdown.separators(),
            Language::Python.separators(),
            SeparatorSet::new([""]),
        ] {
            for keep in [KeepSeparator::End, KeepSeparator::Start] {
                out.push(
                    ChunkingConfig::builder()
                        .chunk_size(size)
                        .chunk_overlap(overlap)
                        .separators(separators.clone())
                        .keep_separator(keep)
                        .build()
                        .unwrap(),
                );
            }
        }
    }
    out
}

#[test]
fn chunks_never_exceed_chunk_size() {
    for config in configs() {
        for text in SAMPLES {
            for chunk in split(text, &config).unwrap() {
                assert!(
                    chunk.chars().count() <= config.chunk_size,
                    "{chunk:?} longer than {} for {config:?}",
                    config.chunk_size
                );
            }
        }
    }
}

#[test]
fn removing_overlap_reconstructs_the_input() {
    for config in configs() {
        let splitter = RecursiveSplitter::new(config.clone()).unwrap();
        for text in SAMPLES {
            let chunks = splitter.split_chunks(text).unwrap();
            let rebuilt: String = chunks.iter().map(|c| c.fresh_text()).collect();
            assert_eq!(&rebuilt, text, "round trip failed for {config:?}");
        }
    }
}

#[test]
fn zero_overlap_is_plain_concatenation() {
    let config = ChunkingConfig::builder()
        .chunk_size(12)
        .chunk_overlap(0)
        .build()
        .unwrap();
    for text in SAMPLES {
        assert_eq!(split(text, &config).unwrap().concat(), *text);
    }
}

#[test]
fn chunks_are_in_source_order() {
    for config in configs() {
        let splitter = RecursiveSplitter::new(config).unwrap();
        for text in SAMPLES {
            let chunks = splitter.split_chunks(text).unwrap();
            for pair in chunks.windows(2) {
                assert!(pair[0].start <= pair[1].start);
                assert_eq!(pair[0].index + 1, pair[1].index);
            }
        }
    }
}

#[test]
fn empty_input_is_empty_for_every_config() {
    for config in configs() {
        assert!(split("", &config).unwrap().is_empty());
    }
}

#[test]
fn short_input_is_returned_unchanged() {
    for config in configs() {
        for text in SAMPLES {
            if text.chars().count() <= config.chunk_size {
                assert_eq!(split(text, &config).unwrap(), [*text]);
            }
        }
    }
}

#[test]
fn resplitting_a_minimal_chunk_is_idempotent() {
    let config = ChunkingConfig::builder()
        .chunk_size(9)
        .chunk_overlap(0)
        .separators(SeparatorSet::new([" ", ""]))
        .build()
        .unwrap();
    let first = split("aaaa bbbb cccc", &config).unwrap();
    let last = first.last().unwrap();
    assert_eq!(split(last, &config).unwrap(), [last.clone()]);
    assert_eq!(split("cccc", &config).unwrap(), ["cccc"]);
}

#[test]
fn character_fallback_example() {
    let config = ChunkingConfig::builder()
        .chunk_size(4)
        .chunk_overlap(2)
        .separators(SeparatorSet::new([""]))
        .build()
        .unwrap();
    assert_eq!(
        split("abcdefghij", &config).unwrap(),
        ["abcd", "cdef", "efgh", "ghij"]
    );
}

#[test]
fn overlap_equal_to_size_is_invalid() {
    let config = ChunkingConfig {
        chunk_size: 5,
        chunk_overlap: 5,
        ..ChunkingConfig::default()
    };
    assert!(matches!(
        split("some text", &config),
        Err(SplitError::InvalidConfiguration(_))
    ));
    assert!(RecursiveSplitter::new(config).is_err());
}

#[test]
fn stripped_language_chunks_stay_within_size() {
    let config = ChunkingConfig::for_language(Language::Python, 60, 0).unwrap();
    for text in SAMPLES {
        for chunk in split(text, &config).unwrap() {
            assert!(!chunk.trim().is_empty());
            assert!(chunk.chars().count() <= 60);
        }
    }
}
