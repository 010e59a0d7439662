use prdoc_core::model::{AudienceField, Bump, ChangeRecord, CrateEntry, DocEntry};
use prdoc_validate::{
    DiagnosticCode,
    Severity,
    ValidateOptions,
    validate_record,
    validate_record_with_diagnostics,
    validate_record_with_options,
};

fn core_state_record() -> ChangeRecord {
    ChangeRecord {
        title: "Deprecate para_id() from CoreState in polkadot primitives".to_string(),
        doc: vec![DocEntry {
            audience: "Node Dev".into(),
            description: "`CoreState`'s `para_id()` function is getting deprecated in favour of \
                          direct usage of the `ClaimQueue`.\n"
                .to_string(),
        }],
        crates: vec![
            CrateEntry::new("polkadot-primitives", Bump::Minor),
            CrateEntry::new("polkadot-statement-distribution", Bump::Minor),
            CrateEntry::new("cumulus-client-consensus-aura", Bump::Minor),
        ],
    }
}

#[test]
fn valid_record_passes_without_warnings() {
    let warnings = validate_record_with_diagnostics(&core_state_record(), &ValidateOptions::default())
        .expect("record should validate");
    assert!(warnings.is_empty());
}

#[test]
fn empty_crates_fails_with_stable_message() {
    let mut record = core_state_record();
    record.crates.clear();

    let err = validate_record(&record).unwrap_err();
    assert_eq!(err, "crates is empty; a change must affect at least one crate");
}

#[test]
fn empty_title_fails_with_stable_message() {
    let mut record = core_state_record();
    record.title = "   ".to_string();

    assert_eq!(validate_record(&record).unwrap_err(), "title is empty");
}

#[test]
fn long_title_limit_is_configurable() {
    let mut record = core_state_record();
    record.title = "x".repeat(130);

    let err = validate_record(&record).unwrap_err();
    assert_eq!(err, "title is too long (130 > 120 chars)");

    let opts = ValidateOptions { max_title_len: 200, ..ValidateOptions::default() };
    validate_record_with_options(&record, &opts).expect("limit raised");
}

#[test]
fn multiline_title_is_rejected() {
    let mut record = core_state_record();
    record.title = "first line\nsecond line".to_string();

    let err = validate_record_with_diagnostics(&record, &ValidateOptions::default()).unwrap_err();
    assert_eq!(err.diagnostics[0].code, DiagnosticCode::TitleMultiline);
}

#[test]
fn bare_carriage_return_in_title_is_multiline() {
    for title in ["first line\rsecond line", "first line\r\nsecond line"] {
        let mut record = core_state_record();
        record.title = title.to_string();

        let err = validate_record_with_diagnostics(&record, &ValidateOptions::default()).unwrap_err();
        assert_eq!(err.diagnostics[0].code, DiagnosticCode::TitleMultiline, "title {title:?}");
        assert_eq!(err.legacy_message(), "title spans multiple lines");
    }
}

#[test]
fn unknown_audience_is_a_warning_by_default() {
    let mut record = core_state_record();
    record.doc[0].audience = "Node Developers".into();

    let warnings = validate_record_with_diagnostics(&record, &ValidateOptions::default())
        .expect("unknown audience must not fail by default");

    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].code, DiagnosticCode::UnknownAudience);
    assert_eq!(warnings[0].severity, Severity::Warning);
    assert_eq!(warnings[0].path.as_deref(), Some("doc[0].audience"));
    assert!(warnings[0].message.contains("unknown audience 'Node Developers'"));
}

#[test]
fn unknown_audience_fails_in_strict_mode() {
    let mut record = core_state_record();
    record.doc[0].audience = AudienceField::Many(vec!["Node Dev".into(), "Auditors".into()]);

    let opts = ValidateOptions { strict_audience: true, ..ValidateOptions::default() };
    let err = validate_record_with_diagnostics(&record, &opts).unwrap_err();
    let diag = err.errors().next().expect("one error");

    assert_eq!(diag.code, DiagnosticCode::UnknownAudience);
    assert_eq!(diag.severity, Severity::Error);
}

#[test]
fn extra_audiences_are_accepted_as_known() {
    let mut record = core_state_record();
    record.doc[0].audience = "Auditors".into();

    let opts = ValidateOptions {
        strict_audience: true,
        extra_audiences: vec!["Auditors".to_string()],
        ..ValidateOptions::default()
    };
    let warnings = validate_record_with_diagnostics(&record, &opts).expect("extra audience is known");
    assert!(warnings.is_empty());
}

#[test]
fn duplicate_and_invalid_crates_are_all_reported() {
    let mut record = core_state_record();
    record.crates.push(CrateEntry::new("polkadot-primitives", Bump::Patch));
    record.crates.push(CrateEntry::new("1bad name", Bump::Patch));

    let err = validate_record_with_diagnostics(&record, &ValidateOptions::default()).unwrap_err();
    let codes: Vec<DiagnosticCode> = err.errors().map(|d| d.code).collect();

    assert_eq!(codes, vec![DiagnosticCode::DuplicateCrate, DiagnosticCode::CrateNameInvalid]);
    assert_eq!(
        err.diagnostics[0].message,
        "crates[3] duplicates crate 'polkadot-primitives' from crates[0]"
    );
    assert_eq!(err.diagnostics[1].path.as_deref(), Some("crates[4].name"));
}

#[test]
fn errors_come_before_warnings() {
    let mut record = core_state_record();
    record.doc[0].description = String::new();
    record.crates[0].name = String::new();

    let err = validate_record_with_diagnostics(&record, &ValidateOptions::default()).unwrap_err();
    assert_eq!(err.diagnostics.len(), 2);
    assert_eq!(err.diagnostics[0].code, DiagnosticCode::CrateNameEmpty);
    assert_eq!(err.diagnostics[1].code, DiagnosticCode::DescriptionEmpty);
    assert_eq!(err.to_string(), "crates[0] name is empty");
}

#[test]
fn empty_doc_and_empty_audience_list() {
    let mut record = core_state_record();
    record.doc[0].audience = AudienceField::Many(Vec::new());

    let err = validate_record_with_diagnostics(&record, &ValidateOptions::default()).unwrap_err();
    assert_eq!(err.diagnostics[0].code, DiagnosticCode::AudienceEmpty);

    record.doc.clear();
    let warnings = validate_record_with_diagnostics(&record, &ValidateOptions::default()).unwrap();
    assert_eq!(warnings[0].code, DiagnosticCode::DocEmpty);
}

#[test]
fn diagnostics_serialize_with_snake_case_codes() {
    let mut record = core_state_record();
    record.crates.clear();

    let err = validate_record_with_diagnostics(&record, &ValidateOptions::default()).unwrap_err();
    let json = serde_json::to_value(&err).unwrap();

    assert_eq!(json["diagnostics"][0]["code"], "crates_empty");
    assert_eq!(json["diagnostics"][0]["severity"], "error");
    assert_eq!(json["diagnostics"][0]["path"], "crates");
}
