mod common;

#[macro_use]
extern crate lazy_static;

use common::*;
use warren::decoder::error::{DocumentError, ResourceError};
use warren::decoder::IncludedDecoders;
use warren::model::resource::ResourceIdentifier;
use warren::parse_document;
use warren::settings::{DecodeSettings, IncludedPolicy};

lazy_static! {
    static ref STRICT: IncludedDecoders<Included> = included_decoders(Default::default());
}

fn strict() -> &'static IncludedDecoders<Included> { &STRICT }

fn lenient() -> DecodeSettings {
    DecodeSettings { included: IncludedPolicy::Lenient, ..Default::default() }
}

#[test]
fn last_duplicate_wins() {
    let _ = env_logger::try_init();

    let doc = parse_document(TRIP_DOCUMENT).unwrap();
    let decoded = doc.decode_one_with_included(trip, strict()).unwrap();

    assert_eq!(decoded.data.route.as_str(), "CR-Worcester");
    assert_eq!(decoded.data.shape, None);

    let routes = &decoded.included.routes;
    assert_eq!(routes.len(), 1);
    assert_eq!(routes["CR-Worcester"].long_name, "Worcester Line");
    assert_eq!(routes["CR-Worcester"].route_type, 2);
}

#[test]
fn unknown_types_are_skipped() {
    let _ = env_logger::try_init();

    let doc = parse_document(TRIP_DOCUMENT).unwrap();
    assert!(!strict().is_registered("service"));

    let included = doc.decode_included(&STRICT, Included::default()).unwrap();
    assert_eq!(included.stops.len(), 1);
    assert_eq!(included.stops["Worcester"].location_type, 1);
    // primary data is not folded in by default
    assert!(included.trips.is_empty());
}

#[test]
fn resolve_relationships_through_included() {
    let _ = env_logger::try_init();

    let doc = parse_document(TRIP_DOCUMENT).unwrap();
    let decoded = doc.decode_one_with_included(trip, strict()).unwrap();

    let route = decoded.included.routes.get(&decoded.data.route).unwrap();
    assert_eq!(route.id, decoded.data.route);
    let known_stops: Vec<&str> = decoded
        .data
        .stops
        .iter()
        .filter_map(|id| decoded.included.stops.get(id))
        .map(|stop| stop.name.as_str())
        .collect();
    assert_eq!(known_stops, vec!["Worcester"]);
}

const BROKEN_INCLUDED: &str = r#"{
    "data": [
        { "type": "trip", "id": "t1", "attributes": { "headsign": "Ashmont" },
          "relationships": { "route": { "data": { "type": "route", "id": "Red" } } } }
    ],
    "included": [
        { "type": "route", "id": "Red", "attributes": { "long_name": "Red Line", "type": 1 } },
        { "type": "stop", "id": "70061", "attributes": { "location_type": 0 } },
        { "type": "stop", "id": "70063", "attributes": { "name": "Davis", "location_type": 0 } }
    ]
}"#;

#[test]
fn strict_policy_aborts_on_failing_registered_type() {
    let _ = env_logger::try_init();

    let doc = parse_document(BROKEN_INCLUDED).unwrap();
    match doc.decode_many_with_included(trip, strict()) {
        Err(DocumentError::Included { resource, source: ResourceError::AttributeMissing(name) }) => {
            assert_eq!(resource, ResourceIdentifier::new("stop", "70061"));
            assert_eq!(name, "name");
        },
        other => unreachable!("{:?}", other),
    }

    let err = doc.decode_included(&STRICT, Included::default()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Error decoding included resource {type: stop, id: 70061}: Missing attribute `name`"
    );
}

#[test]
fn lenient_policy_skips_failing_resource() {
    let _ = env_logger::try_init();

    let decoders = included_decoders(lenient());
    let doc = parse_document(BROKEN_INCLUDED).unwrap();
    let decoded = doc.decode_many_with_included(trip, &decoders).unwrap();

    assert_eq!(decoded.data.len(), 1);
    assert_eq!(decoded.included.routes.len(), 1);
    assert_eq!(decoded.included.stops.len(), 1);
    assert!(decoded.included.stops.contains_key("70063"));
    assert!(!decoded.included.stops.contains_key("70061"));
}

#[test]
fn fold_primary_resources() {
    let _ = env_logger::try_init();

    let decoders = included_decoders(DecodeSettings { fold_primary: true, ..Default::default() });
    let doc = parse_document(TRIP_DOCUMENT).unwrap();
    let included = doc.decode_included(&decoders, Included::default()).unwrap();

    assert_eq!(included.trips.len(), 1);
    assert_eq!(included.trips["CR-Weekday-Fall-19-515"].stops.len(), 3);
    assert_eq!(included.routes.len(), 1);
}

#[test]
fn primary_decode_error_comes_before_included() {
    let _ = env_logger::try_init();

    let doc = parse_document(TRIP_DOCUMENT).unwrap();
    match doc.decode_many_with_included(trip, strict()) {
        Err(DocumentError::ExpectedMany) => {},
        other => unreachable!("{:?}", other),
    }
}

#[test]
fn api_errors_have_no_included() {
    let _ = env_logger::try_init();

    let doc = parse_document(ERRORS_DOCUMENT).unwrap();
    match doc.decode_included(&STRICT, Included::default()) {
        Err(DocumentError::ApiErrors(errors)) => assert_eq!(errors.len(), 2),
        other => unreachable!("{:?}", other),
    }
}

#[test]
fn accumulate_extends_an_existing_table() {
    let _ = env_logger::try_init();

    let first = parse_document(TRIP_DOCUMENT).unwrap();
    let second = parse_document(BROKEN_INCLUDED).unwrap();

    let included = strict().accumulate(first.included(), Included::default()).unwrap();
    let included = included_decoders(lenient()).accumulate(second.included(), included).unwrap();

    let mut routes: Vec<&str> = included.routes.keys().map(|id| id.as_str()).collect();
    routes.sort();
    assert_eq!(routes, vec!["CR-Worcester", "Red"]);
    assert_eq!(included.stops.len(), 2);
}

#[test]
fn settings_from_config() {
    let _ = env_logger::try_init();

    let settings: DecodeSettings =
        serde_json::from_str(r#"{ "included": "lenient", "fold_primary": true }"#).unwrap();
    assert_eq!(settings.included, IncludedPolicy::Lenient);
    assert!(settings.fold_primary);

    let settings: DecodeSettings = serde_json::from_str("{}").unwrap();
    assert_eq!(settings, DecodeSettings::default());
    assert_eq!(settings.included, IncludedPolicy::Strict);

    assert!(serde_json::from_str::<DecodeSettings>(r#"{ "included": "loose" }"#).is_err());

    let decoders = included_decoders(lenient());
    assert_eq!(decoders.settings().included, IncludedPolicy::Lenient);
    assert!(decoders.is_registered("route"));
    assert!(decoders.is_registered("trip"));
}
