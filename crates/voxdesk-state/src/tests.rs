//! Unit tests for state merging, world state, lead capture, wellness history,
//! and SDR content.

use chrono::{TimeZone, Utc};
use serde_json::{json, Value};

use crate::error::{LeadError, MergeError};
use crate::lead::{Lead, LEAD_FIELDS};
use crate::merge::{merge, merged};
use crate::sdr::{SdrContent, FAQ_FALLBACK};
use crate::wellness::{history_context, parse_objectives, CheckIn, WellnessJournal};
use crate::world::WorldState;
use crate::StateDocument;

fn doc(value: Value) -> StateDocument {
    match value {
        Value::Object(map) => map,
        other => panic!("test document must be an object, got {other}"),
    }
}

// ── merge tests ──────────────────────────────────────────────────────

#[test]
fn nested_mappings_are_merged() {
    let mut base = doc(json!({"a": {"x": 1}}));
    merge(&mut base, json!({"a": {"y": 2}})).expect("merge should succeed");
    assert_eq!(Value::Object(base), json!({"a": {"x": 1, "y": 2}}));
}

#[test]
fn scalar_replaces_mapping() {
    let mut base = doc(json!({"a": {"x": 1}}));
    merge(&mut base, json!({"a": "gone"})).expect("merge should succeed");
    assert_eq!(Value::Object(base), json!({"a": "gone"}));
}

#[test]
fn mapping_replaces_scalar() {
    let mut base = doc(json!({"a": 3, "b": true}));
    merge(&mut base, json!({"a": {"x": 1}})).expect("merge should succeed");
    assert_eq!(Value::Object(base), json!({"a": {"x": 1}, "b": true}));
}

#[test]
fn sequences_are_replaced_not_appended() {
    let mut base = doc(json!({"events": ["entered the cave"], "inventory": [1, 2, 3]}));
    merge(&mut base, json!({"events": ["lit a torch"]})).expect("merge should succeed");
    assert_eq!(base["events"], json!(["lit a torch"]));
    assert_eq!(base["inventory"], json!([1, 2, 3]));
}

#[test]
fn new_keys_are_inserted_and_untouched_keys_kept() {
    let mut base = doc(json!({
        "player": {"name": "Aria", "hp": 10, "stats": {"str": 4, "dex": 7}},
        "location": "village"
    }));
    merge(
        &mut base,
        json!({"player": {"hp": 7, "stats": {"dex": 8}, "gold": 12}, "weather": "rain"}),
    )
    .expect("merge should succeed");

    assert_eq!(
        Value::Object(base),
        json!({
            "player": {"name": "Aria", "hp": 7, "stats": {"str": 4, "dex": 8}, "gold": 12},
            "location": "village",
            "weather": "rain"
        })
    );
}

#[test]
fn null_in_patch_overwrites() {
    let mut base = doc(json!({"companion": {"name": "Rook"}}));
    merge(&mut base, json!({"companion": null})).expect("merge should succeed");
    assert_eq!(base["companion"], Value::Null);
    assert!(base.contains_key("companion"));
}

#[test]
fn scalar_leaf_patch_overwrites_exactly_its_paths() {
    let original = doc(json!({
        "a": 1,
        "b": {"c": 2, "d": {"e": 3, "f": 4}},
        "g": [5]
    }));
    let patch = json!({"a": 10, "b": {"d": {"f": 40}}, "h": "new"});

    let result = merged(&original, patch).expect("merge should succeed");

    assert_eq!(result["a"], json!(10));
    assert_eq!(result["b"]["c"], json!(2));
    assert_eq!(result["b"]["d"]["e"], json!(3));
    assert_eq!(result["b"]["d"]["f"], json!(40));
    assert_eq!(result["g"], json!([5]));
    assert_eq!(result["h"], json!("new"));
    assert_eq!(result.len(), original.len() + 1);
}

#[test]
fn merge_is_idempotent() {
    let cases = [
        (json!({}), json!({"a": 1})),
        (json!({"a": {"x": 1}}), json!({"a": {"y": 2}})),
        (json!({"a": {"x": 1}}), json!({"a": "gone"})),
        (json!({"a": [1, 2]}), json!({"a": [3], "b": {"c": {"d": null}}})),
    ];

    for (base, patch) in cases {
        let once = merged(&doc(base), patch.clone()).expect("first merge should succeed");
        let twice = merged(&once, patch.clone()).expect("second merge should succeed");
        assert_eq!(once, twice, "patch {patch} is not idempotent");
    }
}

#[test]
fn merge_returns_the_base_for_chaining() {
    let mut base = StateDocument::new();
    merge(&mut base, json!({"a": 1}))
        .and_then(|doc| merge(doc, json!({"b": 2})))
        .expect("chained merges should succeed");
    assert_eq!(Value::Object(base), json!({"a": 1, "b": 2}));
}

#[test]
fn non_object_patch_is_rejected() {
    let mut base = doc(json!({"a": 1}));
    for (patch, kind) in [
        (json!("gone"), "string"),
        (json!([1, 2]), "array"),
        (json!(null), "null"),
        (json!(4), "number"),
    ] {
        let err = merge(&mut base, patch).expect_err("non-object patch should fail");
        assert_eq!(err, MergeError::InvalidPatch { found: kind });
    }
    assert_eq!(Value::Object(base), json!({"a": 1}), "base must be untouched");
}

// ── WorldState tests ─────────────────────────────────────────────────

#[test]
fn world_applies_patches_and_logs_events() {
    let mut world = WorldState::with_defaults(doc(json!({
        "location": "tavern",
        "player": {"hp": 20}
    })));

    world
        .apply(json!({"location": "forest", "player": {"torch": true}}))
        .expect("apply should succeed");
    world.record_event("left the tavern");
    world.record_event("found a torch");

    assert_eq!(world.pointer("/location"), Some(&json!("forest")));
    assert_eq!(world.pointer("/player/hp"), Some(&json!(20)));
    assert_eq!(world.pointer("/player/torch"), Some(&json!(true)));
    assert_eq!(world.pointer("/player/gold"), None);
    assert_eq!(world.events(), vec!["left the tavern", "found a torch"]);
}

#[test]
fn world_rejects_non_object_patch() {
    let mut world = WorldState::new();
    let err = world.apply(json!(["north"])).expect_err("array patch should fail");
    assert_eq!(err, MergeError::InvalidPatch { found: "array" });
    assert!(world.document().is_empty());
}

#[test]
fn record_event_resets_a_non_list_log() {
    let mut world = WorldState::with_defaults(doc(json!({"events": "corrupt"})));
    world.record_event("dawn");
    assert_eq!(world.events(), vec!["dawn"]);
}

#[test]
fn world_serializes_as_its_document() {
    let mut world = WorldState::new();
    world.apply(json!({"turn": 3})).expect("apply should succeed");
    let json = serde_json::to_value(&world).expect("should serialize");
    assert_eq!(json, json!({"turn": 3}));
}

#[test]
fn adventure_starts_in_the_village() {
    let world = WorldState::adventure_start();

    assert_eq!(
        world.pointer("/locations/current"),
        Some(&json!("Village of Eldoria"))
    );
    assert_eq!(world.pointer("/characters/player/hp"), Some(&json!(100)));
    assert_eq!(world.pointer("/characters/npcs"), Some(&json!({})));
    assert_eq!(
        world.pointer("/quests/active/0/id"),
        Some(&json!("defeat_sorcerer"))
    );
    assert!(world.events().is_empty());
}

#[test]
fn moving_keeps_visited_and_known_paths() {
    let mut world = WorldState::adventure_start();

    world
        .apply(json!({"locations": {"current": "Dark Forest"}}))
        .expect("object patch should merge");
    world
        .apply(json!({"characters": {"player": {"hp": 85}}}))
        .expect("object patch should merge");

    assert_eq!(world.pointer("/locations/current"), Some(&json!("Dark Forest")));
    assert_eq!(
        world.pointer("/locations/visited"),
        Some(&json!(["Village of Eldoria"]))
    );
    assert_eq!(
        world.pointer("/locations/known_paths/Village of Eldoria"),
        Some(&json!(["Dark Forest", "Mountain Pass"]))
    );
    assert_eq!(world.pointer("/characters/player/hp"), Some(&json!(85)));
    assert_eq!(world.pointer("/characters/player/max_hp"), Some(&json!(100)));
    assert_eq!(
        world.pointer("/characters/player/inventory"),
        Some(&json!(["sword", "shield", "backpack"]))
    );
}

// ── Lead tests ───────────────────────────────────────────────────────

fn fresh_lead() -> Lead {
    let now = Utc.with_ymd_and_hms(2024, 11, 20, 9, 30, 0).unwrap();
    Lead::new(now)
}

#[test]
fn new_lead_has_every_field_empty() {
    let lead = fresh_lead();
    for field in LEAD_FIELDS {
        assert_eq!(lead.document()[field], Value::Null, "{field} should start empty");
    }
    assert_eq!(lead.document()["notes"], json!([]));
    assert_eq!(lead.next_missing_field(), Some("name"));
}

#[test]
fn collect_fills_fields_in_order() {
    let mut lead = fresh_lead();
    lead.collect("name", "Sarah").expect("name is a lead field");
    lead.collect("company", " Shopify ").expect("company is a lead field");

    assert_eq!(lead.get("name"), Some("Sarah"));
    assert_eq!(lead.get("company"), Some("Shopify"));
    assert_eq!(lead.next_missing_field(), Some("email"));
    assert!(!lead.is_complete());

    for field in LEAD_FIELDS {
        lead.collect(field, "x").expect("known field");
    }
    assert!(lead.is_complete());
}

#[test]
fn collect_rejects_unknown_fields() {
    let mut lead = fresh_lead();
    let err = lead.collect("budget", "1M").expect_err("budget is not a lead field");
    assert_eq!(err, LeadError::UnknownField("budget".to_string()));
    assert!(!lead.document().contains_key("budget"));
}

#[test]
fn summary_falls_back_for_missing_fields() {
    let mut lead = fresh_lead();
    lead.collect("name", "Sarah").expect("known field");
    lead.add_note("asked about pricing");

    let summary = lead.summary();
    assert!(summary.starts_with("Lead Summary:"));
    assert!(summary.contains("- Name: Sarah"));
    assert!(summary.contains("- Company: Not specified"));
    assert_eq!(lead.document()["notes"], json!(["asked about pricing"]));
}

// ── Wellness tests ───────────────────────────────────────────────────

fn check_in(mood: &str, day: u32) -> CheckIn {
    CheckIn::new(
        mood,
        "medium",
        parse_objectives("stretch, , read 20 pages ,"),
        Some("steady day".to_string()),
        Utc.with_ymd_and_hms(2024, 11, day, 8, 30, 5).unwrap(),
    )
}

#[test]
fn objectives_are_split_and_trimmed() {
    assert_eq!(
        parse_objectives(" walk,drink water ,, call mom "),
        ["walk", "drink water", "call mom"]
    );
    assert!(parse_objectives(" , ").is_empty());
}

#[test]
fn check_in_is_stamped_with_date_and_time() {
    let entry = check_in("calm", 20);
    assert_eq!(entry.date, "2024-11-20");
    assert_eq!(entry.time, "08:30:05");
    assert_eq!(entry.objectives, ["stretch", "read 20 pages"]);
}

#[test]
fn empty_history_has_a_fallback_context() {
    assert_eq!(history_context(None), "No previous wellness check-ins.");

    let dir = tempfile::tempdir().expect("should create temp dir");
    let journal = WellnessJournal::new(dir.path().join("wellness_log.json"));
    assert!(journal.history().expect("missing file is empty").is_empty());
    assert_eq!(
        journal.context().expect("context should build"),
        "No previous wellness check-ins."
    );
}

#[test]
fn journal_appends_and_reports_the_latest() {
    let dir = tempfile::tempdir().expect("should create temp dir");
    let journal = WellnessJournal::new(dir.path().join("wellness_log.json"));

    journal.append(check_in("tired", 19)).expect("append should succeed");
    journal.append(check_in("hopeful", 20)).expect("append should succeed");

    let history = journal.history().expect("history should load");
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].mood, "tired");
    assert_eq!(
        journal.last().expect("last should load").map(|c| c.mood),
        Some("hopeful".to_string())
    );
    assert_eq!(
        journal.context().expect("context should build"),
        "Previous check-in (2024-11-20): Mood was hopeful, Energy was medium, \
         Goals were: stretch, read 20 pages"
    );
}

#[test]
fn context_fills_gaps_in_old_entries() {
    let sparse: CheckIn = serde_json::from_str(r#"{"mood": "ok"}"#).expect("should parse");
    assert_eq!(
        history_context(Some(&sparse)),
        "Previous check-in (Unknown): Mood was ok, Energy was Unknown, Goals were: None"
    );
}

#[test]
fn corrupt_journal_is_not_overwritten() {
    let dir = tempfile::tempdir().expect("should create temp dir");
    let path = dir.path().join("wellness_log.json");
    std::fs::write(&path, "{\"not\": \"a list\"}").expect("write");
    let journal = WellnessJournal::new(&path);

    assert!(journal.append(check_in("fine", 20)).is_err());
    assert_eq!(
        std::fs::read_to_string(&path).expect("read"),
        "{\"not\": \"a list\"}"
    );
}

// ── SDR content tests ────────────────────────────────────────────────

fn sdr_content() -> SdrContent {
    SdrContent::from_json(
        r#"{
            "company": {"name": "Razorpay"},
            "faq": [
                {"question": "What does Razorpay do?", "answer": "We process online payments."},
                {"question": "Do you charge setup fees?", "answer": "No, pricing is 2% per transaction."},
                {"question": "Is there an empty one?", "answer": ""}
            ],
            "lead_fields": ["name", "company"]
        }"#,
    )
    .expect("content fixture should parse")
}

#[test]
fn faq_prefers_question_matches() {
    let content = sdr_content();
    let entry = content.find_faq("  SETUP ").expect("should match a question");
    assert_eq!(entry.question, "Do you charge setup fees?");
}

#[test]
fn faq_falls_back_to_answer_matches() {
    let content = sdr_content();
    let entry = content.find_faq("pricing").expect("should match an answer");
    assert_eq!(entry.question, "Do you charge setup fees?");
}

#[test]
fn faq_answers_with_fallbacks() {
    let content = sdr_content();
    assert_eq!(content.answer("payments"), "We process online payments.");
    assert_eq!(content.answer("refund policy"), FAQ_FALLBACK);
    assert_eq!(content.answer("empty one"), "I don't have more info on that.");
    assert!(content.find_faq("   ").is_none());
    assert_eq!(content.lead_fields, ["name", "company"]);
    assert_eq!(content.company["name"], json!("Razorpay"));
}

#[test]
fn missing_sdr_content_is_empty() {
    let dir = tempfile::tempdir().expect("should create temp dir");
    let content = SdrContent::load(dir.path().join("sdr.json")).expect("missing file is fine");
    assert_eq!(content, SdrContent::default());
}
