use super::{score, CandidateStatus, ReferenceStatus};

#[test]
fn identical_sentences_score_full_marks() {
    let result = score("hello everyone welcome to the show", "hello everyone welcome to the show");

    assert_eq!(result.score, 100);
    assert_eq!(result.matched_count, 6);
    assert_eq!(result.total_count, 6);
    assert!(result
        .reference
        .iter()
        .all(|token| token.status == ReferenceStatus::Correct));
    assert!(result
        .candidate
        .iter()
        .all(|token| token.status == CandidateStatus::Correct));
}

#[test]
fn empty_attempt_scores_zero_with_all_tokens_missed() {
    let result = score("hello everyone", "");

    assert_eq!(result.score, 0);
    assert_eq!(result.matched_count, 0);
    assert_eq!(result.total_count, 2);
    assert!(result.candidate.is_empty());
    assert!(result
        .reference
        .iter()
        .all(|token| token.status == ReferenceStatus::Missed));
}

#[test]
fn whitespace_attempt_counts_as_no_speech() {
    let result = score("hello", "   \t ");
    assert_eq!(result.score, 0);
}

#[test]
fn contractions_expand_to_a_full_match() {
    let result = score("I am going to go", "I'm gonna go");
    assert_eq!(result.score, 100);
}

#[test]
fn dropped_word_scores_five_of_six() {
    let result = score(
        "hello everyone welcome to the show",
        "hello everyone welcome the show",
    );

    assert_eq!(result.score, 83);
    assert_eq!(result.matched_count, 5);
    assert_eq!(result.total_count, 6);
    let missed: Vec<&str> = result
        .reference
        .iter()
        .filter(|token| token.status == ReferenceStatus::Missed)
        .map(|token| token.word.as_str())
        .collect();
    assert_eq!(missed, vec!["to"]);
}

#[test]
fn fuzzy_match_is_reported_close_and_still_counts() {
    let result = score("please recognize this", "please recognise this");

    assert_eq!(result.score, 100);
    assert_eq!(result.reference[1].status, ReferenceStatus::Close);
    assert_eq!(result.reference[0].status, ReferenceStatus::Correct);
}

#[test]
fn extra_spoken_tokens_never_reduce_the_score() {
    let result = score("welcome back", "um welcome uh back okay");

    assert_eq!(result.score, 100);
    let extras: Vec<&str> = result
        .candidate
        .iter()
        .filter(|token| token.status == CandidateStatus::Extra)
        .map(|token| token.word.as_str())
        .collect();
    assert_eq!(extras, vec!["um", "uh", "okay"]);
}

#[test]
fn empty_reference_scores_zero() {
    let result = score("", "anything at all");
    assert_eq!(result.score, 0);
    assert_eq!(result.total_count, 0);
    assert!(result
        .candidate
        .iter()
        .all(|token| token.status == CandidateStatus::Extra));
}

#[test]
fn tied_backtrack_classification_is_pinned() {
    // "alpha bravo" vs "bravo alpha": one match either way; the pinned
    // tie-break matches reference "alpha" and reports "bravo" missed.
    let result = score("alpha bravo", "bravo alpha");

    assert_eq!(result.matched_count, 1);
    assert_eq!(result.reference[0].status, ReferenceStatus::Correct);
    assert_eq!(result.reference[1].status, ReferenceStatus::Missed);
    assert_eq!(result.candidate[0].status, CandidateStatus::Extra);
    assert_eq!(result.candidate[1].status, CandidateStatus::Correct);
}

#[test]
fn rounding_follows_the_reference_fraction() {
    // 1 of 3 matched: round(33.33) = 33
    let result = score("alpha bravo charlie", "alpha");
    assert_eq!(result.score, 33);

    // 2 of 3 matched: round(66.67) = 67
    let result = score("alpha bravo charlie", "alpha bravo");
    assert_eq!(result.score, 67);
}

#[test]
fn result_serializes_with_stable_field_names() {
    let result = score("please recognize this", "please recognise");
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["total_count"], 3);
    assert_eq!(json["reference"][0]["status"], "correct");
    assert_eq!(json["reference"][1]["status"], "close");
    assert_eq!(json["reference"][2]["status"], "missed");
    assert_eq!(json["candidate"][1]["word"], "recognise");
}
