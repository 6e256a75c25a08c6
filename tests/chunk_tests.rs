use condense::text::{chunk_by_words, word_count};

fn sentence(tag: &str, words: usize) -> String {
    (0..words)
        .map(|i| format!("{tag}{i}"))
        .collect::<Vec<_>>()
        .join(" ")
}

#[test]
fn test_single_chunk_when_under_target() {
    let sentences = vec![sentence("a", 10), sentence("b", 10)];
    let chunks = chunk_by_words(&sentences, 100, 20);

    assert_eq!(chunks.len(), 1);
    assert_eq!(chunks[0], sentences.join(" "));
}

#[test]
fn test_overflow_closes_chunk_and_seeds_overlap() {
    let sentences = vec![
        sentence("a", 10),
        sentence("b", 10),
        sentence("c", 10),
        sentence("d", 10),
    ];
    let chunks = chunk_by_words(&sentences, 25, 5);

    assert_eq!(chunks.len(), 2);
    assert_eq!(chunks[0], format!("{} {}", sentences[0], sentences[1]));

    // The second chunk opens with the tail of the first.
    let first_words: Vec<&str> = chunks[0].split_whitespace().collect();
    let tail = first_words[first_words.len() - 5..].join(" ");
    assert_eq!(
        chunks[1],
        format!("{} {} {}", tail, sentences[2], sentences[3])
    );
}

#[test]
fn test_no_sentence_splits_across_chunks() {
    let sentences: Vec<String> = (0..40).map(|i| sentence(&format!("s{i}x"), 9)).collect();
    let chunks = chunk_by_words(&sentences, 50, 10);

    for s in &sentences {
        assert!(
            chunks.iter().any(|c| c.contains(s.as_str())),
            "sentence lost or split: {s}"
        );
    }
}

#[test]
fn test_stripping_overlap_reproduces_sentence_sequence() {
    let sentences: Vec<String> = (0..12).map(|i| sentence(&format!("t{i}y"), 10)).collect();
    let overlap = 5;
    let chunks = chunk_by_words(&sentences, 25, overlap);
    assert!(chunks.len() > 1);

    let mut reassembled: Vec<String> = chunks[0].split_whitespace().map(String::from).collect();
    for chunk in &chunks[1..] {
        let words: Vec<&str> = chunk.split_whitespace().collect();
        reassembled.extend(words[overlap..].iter().map(|w| (*w).to_string()));
    }
    assert_eq!(reassembled.join(" "), sentences.join(" "));
}

#[test]
fn test_zero_overlap_partitions_words_exactly() {
    let sentences: Vec<String> = (0..10).map(|i| sentence(&format!("z{i}q"), 10)).collect();
    let chunks = chunk_by_words(&sentences, 30, 0);

    let total: usize = chunks.iter().map(|c| word_count(c)).sum();
    assert_eq!(total, 100);
    assert_eq!(
        chunks.join(" "),
        sentences.join(" "),
        "zero-overlap chunks must concatenate back to the input"
    );
}

#[test]
fn test_oversized_sentence_gets_its_own_chunk() {
    let sentences = vec![sentence("big", 50), sentence("small", 10)];
    let chunks = chunk_by_words(&sentences, 30, 5);

    // A sentence is never split, so the first chunk exceeds the target by
    // the whole oversized sentence.
    assert_eq!(chunks.len(), 2);
    assert_eq!(word_count(&chunks[0]), 50);
}

#[test]
fn test_final_partial_chunk_is_emitted() {
    let sentences = vec![sentence("a", 20), sentence("b", 20), sentence("c", 3)];
    let chunks = chunk_by_words(&sentences, 20, 0);

    assert_eq!(chunks.len(), 3);
    assert_eq!(chunks[2], sentences[2]);
}

#[test]
fn test_empty_input_yields_no_chunks() {
    assert!(chunk_by_words(&[], 100, 10).is_empty());
}

#[test]
fn test_chunking_is_deterministic() {
    let sentences: Vec<String> = (0..50).map(|i| sentence(&format!("d{i}w"), 12)).collect();
    let first = chunk_by_words(&sentences, 100, 20);
    let second = chunk_by_words(&sentences, 100, 20);
    assert_eq!(first, second);
}
