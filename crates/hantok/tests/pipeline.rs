#![allow(missing_docs)]

//! End-to-end pipeline validation: tokens file on disk, jieba + pinyin
//! collaborators, through to id sequences.

use std::sync::Arc;

use hantok::{
    TokenVocab,
    TokenizeOptions,
    Tokenizer,
    load_token_vocab_path,
};

/// `(text, expected tokens before id mapping)` pairs; expectations are
/// expressed as token strings and mapped through the vocab so the cases
/// stay readable.
const SAMPLES: &[(&str, &[&str])] = &[
    ("你好", &[" ", "ni2", " ", "hao3"]),
    ("世界", &[" ", "shi4", " ", "jie4"]),
    ("你好, hello", &[" ", "ni2", " ", "hao3", ",", " ", "h", "e", "l", "l", "o"]),
    ("abc你好", &["a", "b", "c", " ", "ni2", " ", "hao3"]),
    ("（你好）", &["(", " ", "ni2", " ", "hao3", ")"]),
    ("hello", &["h", "e", "l", "l", "o"]),
];

fn tokens_file_source() -> String {
    let mut tokens: Vec<String> = ["_", "^", "$"].iter().map(|t| t.to_string()).collect();
    tokens.push(" ".to_string()); // written as a bare-id line below

    for c in 'a'..='z' {
        tokens.push(c.to_string());
    }
    for c in '1'..='5' {
        tokens.push(c.to_string());
    }
    for t in [",", ".", "!", "?", "'", "\"", ":", "(", ")"] {
        tokens.push(t.to_string());
    }
    for t in ["ni2", "ni3", "hao3", "shi4", "jie4"] {
        tokens.push(t.to_string());
    }

    tokens
        .iter()
        .enumerate()
        .map(|(id, token)| {
            if token == " " {
                format!("{id}\n")
            } else {
                format!("{token} {id}\n")
            }
        })
        .collect()
}

fn load_test_tokenizer() -> Tokenizer<u32> {
    let dir = tempdir::TempDir::new("hantok_test").unwrap();
    let path = dir.path().join("tokens.txt");
    std::fs::write(&path, tokens_file_source()).unwrap();

    let vocab: TokenVocab<u32> = load_token_vocab_path(&path).unwrap();
    Tokenizer::new(Arc::new(vocab))
}

fn expected_ids(
    vocab: &TokenVocab<u32>,
    tokens: &[&str],
) -> Vec<u32> {
    tokens.iter().map(|t| vocab.lookup(t).unwrap()).collect()
}

#[test]
fn samples_map_without_drops() {
    let tokenizer = load_test_tokenizer();
    let options = TokenizeOptions::default().with_intersperse_blank(false);

    for (text, tokens) in SAMPLES {
        let ids = tokenizer.texts_to_token_ids(&[*text], &options).unwrap();
        assert_eq!(
            ids[0],
            expected_ids(tokenizer.vocab(), tokens),
            "id mismatch for {text:?}"
        );
    }
}

#[test]
fn batch_preserves_input_order() {
    let tokenizer = load_test_tokenizer();
    let options = TokenizeOptions::default().with_intersperse_blank(false);

    let texts: Vec<&str> = SAMPLES.iter().map(|(text, _)| *text).collect();
    let batch = tokenizer.texts_to_token_ids(&texts, &options).unwrap();

    assert_eq!(batch.len(), SAMPLES.len());
    for ((text, tokens), ids) in SAMPLES.iter().zip(&batch) {
        assert_eq!(
            ids,
            &expected_ids(tokenizer.vocab(), tokens),
            "batch order mismatch for {text:?}"
        );
    }
}

#[test]
fn oov_tokens_drop_silently() {
    let tokenizer = load_test_tokenizer();
    let options = TokenizeOptions::default().with_intersperse_blank(false);

    // The ideographic full stop has no reading and is not in the vocab.
    let ids = tokenizer.texts_to_token_ids(&["你好。"], &options).unwrap();
    assert_eq!(
        ids[0],
        expected_ids(tokenizer.vocab(), &[" ", "ni2", " ", "hao3"]),
    );
}

#[test]
fn flags_compose_in_order() {
    let tokenizer = load_test_tokenizer();
    let vocab = tokenizer.vocab().clone();

    let options = TokenizeOptions::default()
        .with_add_sos(true)
        .with_add_eos(true);

    let ids = tokenizer.texts_to_token_ids(&["你好"], &options).unwrap();
    let ids = &ids[0];

    // 4 real tokens -> 7 interspersed -> 9 with markers.
    assert_eq!(ids.len(), 9);
    assert_eq!(ids[0], vocab.sos_id());
    assert_eq!(*ids.last().unwrap(), vocab.eos_id());

    // Pads sit strictly between real tokens, not beside the markers.
    assert_ne!(ids[1], vocab.pad_id());
    assert_eq!(ids[2], vocab.pad_id());
    assert_ne!(ids[ids.len() - 2], vocab.pad_id());
}

#[test]
fn unsupported_language_is_an_error() {
    let tokenizer = load_test_tokenizer();
    let options = TokenizeOptions::default().with_lang("en-us");

    assert!(tokenizer.texts_to_token_ids(&["hello"], &options).is_err());
}
