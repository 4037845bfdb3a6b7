//! Unit tests for configuration loading and action parsing.

use std::time::Duration;

use ortho_config::MergeComposer;
use rstest::rstest;
use serde_json::{Value, json};

use super::{KudosConfig, PageOperation};
use crate::error::PageError;
use crate::reviews::{FlagReason, ReviewId};

/// Applies a configuration layer to the composer based on the layer type.
fn apply_layer(composer: &mut MergeComposer, layer_type: &str, value: Value) {
    match layer_type {
        "defaults" => composer.push_defaults(value),
        "file" => composer.push_file(value, None),
        "environment" => composer.push_environment(value),
        "cli" => composer.push_cli(value),
        _ => panic!("unknown layer type: {layer_type}"),
    }
}

#[rstest]
#[case::file_overrides_defaults(
    vec![("defaults", json!({"listing": "default.json"})), ("file", json!({"listing": "file.json"}))],
    "file.json",
    "file should override default"
)]
#[case::environment_overrides_file(
    vec![("file", json!({"listing": "file.json"})), ("environment", json!({"listing": "env.json"}))],
    "env.json",
    "environment should override file"
)]
#[case::cli_overrides_environment(
    vec![("environment", json!({"listing": "env.json"})), ("cli", json!({"listing": "cli.json"}))],
    "cli.json",
    "CLI should override environment"
)]
fn listing_layer_precedence(
    #[case] layers: Vec<(&str, Value)>,
    #[case] expected: &str,
    #[case] message: &str,
) {
    let mut composer = MergeComposer::new();
    for (layer_type, value) in layers {
        apply_layer(&mut composer, layer_type, value);
    }

    let config = KudosConfig::merge_from_layers(composer.layers()).expect("merge should succeed");

    assert_eq!(config.require_listing().ok(), Some(expected), "{message}");
}

#[rstest]
fn partial_overrides_preserve_lower_values() {
    let mut composer = MergeComposer::new();
    composer.push_defaults(json!({"base_url": "https://apps.example.org", "csrf_token": "t0k"}));
    composer.push_cli(json!({"base_url": "https://staging.example.org"}));

    let config = KudosConfig::merge_from_layers(composer.layers()).expect("merge should succeed");

    assert_eq!(config.base_url.as_deref(), Some("https://staging.example.org"));
    assert_eq!(config.csrf_token.as_deref(), Some("t0k"));
}

#[rstest]
fn default_timeout_is_twenty_seconds() {
    assert_eq!(KudosConfig::default().request_timeout_secs, 20);
}

#[rstest]
#[case(None)]
#[case(Some("   "))]
fn missing_listing_is_an_error(#[case] listing: Option<&str>) {
    let config = KudosConfig {
        listing: listing.map(str::to_owned),
        ..Default::default()
    };

    assert_eq!(config.require_listing(), Err(PageError::MissingListing));
}

#[rstest]
fn gateway_config_requires_base_url() {
    let result = KudosConfig::default().gateway_config();

    assert!(
        matches!(result, Err(PageError::Configuration { .. })),
        "expected configuration error, got {result:?}"
    );
}

#[rstest]
fn gateway_config_carries_token_and_timeout() {
    let config = KudosConfig {
        base_url: Some("https://apps.example.org".to_owned()),
        csrf_token: Some("t0k".to_owned()),
        request_timeout_secs: 5,
        ..Default::default()
    };

    let gateway = config.gateway_config().expect("base URL should parse");

    assert_eq!(gateway.base_url.as_str(), "https://apps.example.org/");
    assert_eq!(gateway.csrf_token.as_deref(), Some("t0k"));
    assert_eq!(gateway.timeout, Duration::from_secs(5));
}

#[rstest]
fn gateway_config_rejects_bad_url() {
    let config = KudosConfig {
        base_url: Some("not a url".to_owned()),
        ..Default::default()
    };

    assert!(matches!(config.gateway_config(), Err(PageError::InvalidUrl(_))));
}

fn with_action(action: &str, review: Option<u64>, reason: Option<&str>) -> KudosConfig {
    KudosConfig {
        action: Some(action.to_owned()),
        review,
        reason: reason.map(str::to_owned),
        ..Default::default()
    }
}

#[rstest]
#[case::delete(with_action("delete", Some(3), None), PageOperation::Delete(ReviewId::new(3)))]
#[case::edit(with_action(" Edit ", Some(4), None), PageOperation::Edit(ReviewId::new(4)))]
#[case::report_by_name(
    with_action("report", Some(5), Some("spam")),
    PageOperation::Report { review: ReviewId::new(5), reason: FlagReason::Spam }
)]
#[case::report_by_code(
    with_action("report", Some(5), Some("review_flag_reason_bug_support")),
    PageOperation::Report { review: ReviewId::new(5), reason: FlagReason::BugSupport }
)]
#[case::load_more(with_action("load-more", None, None), PageOperation::LoadMore)]
#[case::breakdown(with_action("breakdown", None, None), PageOperation::ToggleBreakdown)]
fn operation_parses_action(#[case] config: KudosConfig, #[case] expected: PageOperation) {
    assert_eq!(config.operation(), Ok(expected));
}

#[rstest]
fn operation_requires_action() {
    assert_eq!(
        KudosConfig::default().operation(),
        Err(PageError::MissingAction)
    );
}

#[rstest]
#[case("delete")]
#[case("report")]
#[case("edit")]
fn review_actions_require_review(#[case] action: &str) {
    let result = with_action(action, None, Some("spam")).operation();

    assert_eq!(
        result,
        Err(PageError::MissingReview {
            action: action.to_owned()
        })
    );
}

#[rstest]
fn unknown_action_is_rejected() {
    let result = with_action("share", Some(1), None).operation();

    assert_eq!(
        result,
        Err(PageError::InvalidArgument {
            argument: "share".to_owned()
        })
    );
}

#[rstest]
fn report_rejects_unknown_reason() {
    let result = with_action("report", Some(1), Some("rude")).operation();

    assert!(
        matches!(result, Err(PageError::UnknownFlagReason { .. })),
        "expected unknown reason, got {result:?}"
    );
}
