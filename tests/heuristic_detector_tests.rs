use gradegenius::classify::{SubmissionType, heuristic, needs_refinement};

#[test]
fn short_inputs_are_essays() {
    assert_eq!(heuristic::detect(""), SubmissionType::Essay);
    assert_eq!(heuristic::detect("hi"), SubmissionType::Essay);
    // Code-like but under the ten-character floor.
    assert_eq!(heuristic::detect("int x=1;"), SubmissionType::Essay);
}

#[test]
fn function_declarations_are_code() {
    assert_eq!(
        heuristic::detect("function add(a, b) { return a + b; }"),
        SubmissionType::Code
    );
    assert_eq!(
        heuristic::detect("def area(radius):\n    return 3.14 * radius * radius"),
        SubmissionType::Code
    );
}

#[test]
fn imports_and_classes_are_code() {
    assert_eq!(
        heuristic::detect("import { useState } from 'react';"),
        SubmissionType::Code
    );
    assert_eq!(
        heuristic::detect("class Rectangle extends Shape"),
        SubmissionType::Code
    );
}

#[test]
fn control_flow_blocks_are_code() {
    assert_eq!(
        heuristic::detect("if (count > limit) { reset(); }"),
        SubmissionType::Code
    );
    assert_eq!(
        heuristic::detect("while (queue.length) { queue.pop(); }"),
        SubmissionType::Code
    );
}

#[test]
fn plain_prose_is_an_essay() {
    assert_eq!(
        heuristic::detect(
            "The Industrial Revolution changed how goods were produced across Europe."
        ),
        SubmissionType::Essay
    );
    assert_eq!(
        heuristic::detect(
            "My summer vacation was wonderful. We traveled along the coast and visited \
             three small fishing towns, each with its own character."
        ),
        SubmissionType::Essay
    );
}

#[test]
fn dense_punctuation_is_code_without_any_pattern_match() {
    // No declaration or control-flow pattern matches; the character ratio
    // alone must tip the verdict.
    assert_eq!(heuristic::detect("x = (a + b) * (c - d);"), SubmissionType::Code);
}

#[test]
fn consistent_indentation_over_many_lines_is_code() {
    let text = "move north\n  gather wood\n  gather stone\n  gather food\nmove south\nrest now\nrepeat all";
    assert_eq!(heuristic::detect(text), SubmissionType::Code);
}

#[test]
fn few_lines_do_not_trigger_the_indentation_rule() {
    let text = "first thought\n  second thought\n  third thought";
    assert_eq!(heuristic::detect(text), SubmissionType::Essay);
}

#[test]
fn punctuation_ratio_is_total() {
    assert_eq!(heuristic::punctuation_ratio(""), 0.0);
    assert!(heuristic::punctuation_ratio("plain words only") < 0.01);
    assert!(heuristic::punctuation_ratio("{};()") > 0.99);
}

#[test]
fn refinement_predicate_targets_wordy_code_guesses_and_code_markers() {
    let wordy = "for (const item of items) { process(item); } and then the essay goes on to \
                 discuss, at considerable length, why iterating over a collection in this \
                 manner is preferable to manual index arithmetic in most everyday programs.";
    assert!(wordy.len() > 100);
    assert!(needs_refinement(SubmissionType::Code, wordy));

    // Backtick fences get a second opinion regardless of the guess.
    assert!(needs_refinement(
        SubmissionType::Essay,
        "An essay quoting ```print(1)``` inline."
    ));

    // A short code guess with few words stays with the heuristic.
    assert!(!needs_refinement(SubmissionType::Code, "x = (a + b) * (c - d);"));

    // Plain prose never triggers refinement.
    assert!(!needs_refinement(
        SubmissionType::Essay,
        "The Industrial Revolution changed how goods were produced across Europe."
    ));
}
