use condense::text::{normalize_whitespace, split_sentences, word_count};

#[test]
fn test_basic_sentence_split() {
    let text = "This is the first sentence. Here comes the second sentence! \
                Is this the third sentence? The fourth sentence ends here.";
    let sentences = split_sentences(text);

    assert_eq!(sentences.len(), 4);
    assert_eq!(sentences[0], "This is the first sentence.");
    assert_eq!(sentences[1], "Here comes the second sentence!");
    assert_eq!(sentences[2], "Is this the third sentence?");
    assert_eq!(sentences[3], "The fourth sentence ends here.");
}

#[test]
fn test_sentences_cover_input_in_order() {
    let text = "  One small step.   A giant\nleap for everyone here. Nothing is lost in the split! ";
    let sentences = split_sentences(text);
    assert_eq!(sentences.join(" "), normalize_whitespace(text));
}

#[test]
fn test_tiny_fragments_merge_forward() {
    let sentences = split_sentences("Hi. Ho. Hum ho. Done now.");

    // Fragments accumulate until the buffer reaches four words; the trailing
    // buffer is emitted even though it stays short.
    assert_eq!(sentences, vec!["Hi. Ho. Hum ho.", "Done now."]);
}

#[test]
fn test_fragment_before_long_sentence_flushes() {
    let sentences = split_sentences("One two. This fragment is long enough to stand alone.");

    assert_eq!(sentences.len(), 2);
    assert_eq!(sentences[0], "One two.");
    assert_eq!(sentences[1], "This fragment is long enough to stand alone.");
}

#[test]
fn test_unpunctuated_text_becomes_pseudo_sentences() {
    let words: Vec<String> = (0..65).map(|i| format!("word{i}")).collect();
    let text = words.join(" ");
    let sentences = split_sentences(&text);

    assert_eq!(sentences.len(), 3);
    assert_eq!(word_count(&sentences[0]), 30);
    assert_eq!(word_count(&sentences[1]), 30);
    assert_eq!(word_count(&sentences[2]), 5);
    assert_eq!(sentences.join(" "), text);
}

#[test]
fn test_low_density_long_text_uses_pseudo_sentences() {
    // One period in ~2000 characters is below the one-per-1000 floor.
    let filler: Vec<String> = (0..300).map(|i| format!("word{i}")).collect();
    let text = format!("{}. {}", filler[..10].join(" "), filler.join(" "));
    assert!(text.chars().count() > 2000);

    let sentences = split_sentences(&text);
    for sentence in &sentences[..sentences.len() - 1] {
        assert_eq!(word_count(sentence), 30);
    }
}

#[test]
fn test_empty_input_yields_no_sentences() {
    assert!(split_sentences("").is_empty());
    assert!(split_sentences("   \n\t  ").is_empty());
}

#[test]
fn test_consecutive_punctuation_stays_with_sentence() {
    let sentences = split_sentences("Was it really that bad?! It certainly looked that way to me.");

    assert_eq!(sentences.len(), 2);
    assert_eq!(sentences[0], "Was it really that bad?!");
}
