use gradegenius::{
    classify::SubmissionType,
    prompts::{self, DEFAULT_RUBRIC, PromptCatalog},
};

#[test]
fn selector_is_a_total_mapping() {
    let catalog = PromptCatalog::load();

    assert!(
        catalog
            .grading_template(Some(SubmissionType::Code))
            .contains("grading code submissions")
    );
    assert!(
        catalog
            .grading_template(Some(SubmissionType::Essay))
            .contains("grading essay submissions")
    );
    assert!(
        catalog
            .grading_template(None)
            .contains("grading academic submissions")
    );
}

#[test]
fn missing_rubric_substitutes_the_default_sentence() {
    let catalog = PromptCatalog::load();
    let template = catalog.grading_template(Some(SubmissionType::Essay));

    let rendered =
        prompts::render_grading(template, None, "An essay about rivers.").expect("render");
    assert!(rendered.contains(DEFAULT_RUBRIC));
    assert!(rendered.contains("An essay about rivers."));
    assert!(!rendered.contains("{rubric}"));
    assert!(!rendered.contains("{studentWork}"));
}

#[test]
fn blank_rubric_also_substitutes_the_default_sentence() {
    let catalog = PromptCatalog::load();
    let template = catalog.grading_template(Some(SubmissionType::Code));

    let rendered =
        prompts::render_grading(template, Some("   "), "let total = 0;").expect("render");
    assert!(rendered.contains(DEFAULT_RUBRIC));
}

#[test]
fn supplied_rubric_wins_over_the_default() {
    let catalog = PromptCatalog::load();
    let template = catalog.grading_template(Some(SubmissionType::Essay));

    let rendered = prompts::render_grading(
        template,
        Some("Grade only on historical accuracy."),
        "An essay about rivers.",
    )
    .expect("render");
    assert!(rendered.contains("Grade only on historical accuracy."));
    assert!(!rendered.contains(DEFAULT_RUBRIC));
}

#[test]
fn rendering_is_idempotent() {
    let catalog = PromptCatalog::load();
    let template = catalog.grading_template(Some(SubmissionType::Code));

    let first = prompts::render_grading(template, Some("Style counts."), "fn main() {}")
        .expect("first render");
    let second = prompts::render_grading(template, Some("Style counts."), "fn main() {}")
        .expect("second render");
    assert_eq!(first, second);
}

#[test]
fn blank_student_work_is_a_render_error() {
    let catalog = PromptCatalog::load();
    let template = catalog.grading_template(None);

    assert!(prompts::render_grading(template, None, "").is_err());
    assert!(prompts::render_grading(template, None, "  \n\t ").is_err());
}

#[test]
fn classification_template_wraps_the_excerpt() {
    let catalog = PromptCatalog::load();

    let rendered =
        prompts::render_classification(catalog.classification_template(), "print('hi')");
    assert!(rendered.contains("print('hi')"));
    assert!(rendered.contains("exactly \"CODE\" or \"ESSAY\""));
    assert!(!rendered.contains("{content}"));
}
