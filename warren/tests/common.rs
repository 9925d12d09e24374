#![allow(dead_code)]

use std::collections::HashMap;
use warren::decoder::error::ResourceError;
use warren::decoder::{self, IncludedDecoders, ResourceDecoder};
use warren::model::resource::Resource;
use warren::settings::DecodeSettings;
use warren::typed_id;

typed_id! {
    pub StopId => "stop";
    pub RouteId => "route";
    pub TripId => "trip";
    pub ShapeId => "shape";
}

#[derive(Debug, Clone, PartialEq)]
pub struct Stop {
    pub id: StopId,
    pub name: String,
    pub location_type: u8,
    pub platform_code: Option<String>,
    pub parent_station: Option<StopId>,
    pub child_stops: Vec<StopId>,
}

pub fn stop(resource: &Resource) -> Result<Stop, ResourceError> {
    let fields = resource.fields();
    Ok(Stop {
        id: fields.id(StopId::DECODER)?,
        name: fields.attribute("name")?,
        location_type: fields.attribute("location_type")?,
        platform_code: fields.attribute_maybe("platform_code")?,
        parent_station: fields.relationship_maybe("parent_station", StopId::DECODER)?,
        child_stops: fields.relationship_many("child_stops", StopId::DECODER)?,
    })
}

#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    pub id: RouteId,
    pub long_name: String,
    pub route_type: u8,
}

pub fn route() -> impl ResourceDecoder<Output = Route> + Send + Sync + 'static {
    decoder::id(RouteId::DECODER)
        .and(decoder::attribute::<String>("long_name"))
        .and(decoder::attribute::<u8>("type"))
        .map(|((id, long_name), route_type)| Route { id, long_name, route_type })
}

#[derive(Debug, Clone, PartialEq)]
pub struct Trip {
    pub id: TripId,
    pub headsign: String,
    pub route: RouteId,
    pub shape: Option<ShapeId>,
    pub stops: Vec<StopId>,
}

pub fn trip(resource: &Resource) -> Result<Trip, ResourceError> {
    let fields = resource.fields();
    Ok(Trip {
        id: fields.id(TripId::DECODER)?,
        headsign: fields.attribute("headsign")?,
        route: fields.relationship_one("route", RouteId::DECODER)?,
        shape: fields.relationship_maybe("shape", ShapeId::DECODER)?,
        stops: fields.relationship_many("stops", StopId::DECODER)?,
    })
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Included {
    pub routes: HashMap<RouteId, Route>,
    pub stops: HashMap<StopId, Stop>,
    pub trips: HashMap<TripId, Trip>,
}

pub fn included_decoders(settings: DecodeSettings) -> IncludedDecoders<Included> {
    IncludedDecoders::with_settings(settings)
        .register_typed::<RouteId, _, _>(route(), |included: &mut Included, route: Route| {
            included.routes.insert(route.id.clone(), route);
        })
        .register_typed::<StopId, _, _>(stop, |included: &mut Included, stop: Stop| {
            included.stops.insert(stop.id.clone(), stop);
        })
        .register("trip", trip, |included: &mut Included, trip: Trip| {
            included.trips.insert(trip.id.clone(), trip);
        })
}

pub const STOP_DOCUMENT: &str = r#"{
    "data": {
        "type": "stop",
        "id": "70070",
        "attributes": {
            "name": "Central",
            "location_type": 0,
            "platform_code": null,
            "wheelchair_boarding": 1,
            "latitude": 42.365486,
            "longitude": -71.103802
        },
        "relationships": {
            "parent_station": { "data": { "type": "stop", "id": "place-cntsq" } },
            "zone": { "data": { "type": "zone", "id": "RapidTransit" } },
            "facilities": { "links": { "related": "/facilities/?filter[stop]=70070" } }
        },
        "links": { "self": "/stops/70070" }
    },
    "jsonapi": { "version": "1.0" }
}"#;

pub const ROUTES_DOCUMENT: &str = r#"{
    "data": [
        { "type": "route", "id": "Red", "attributes": { "long_name": "Red Line", "type": 1 } },
        { "type": "route", "id": "Mattapan", "attributes": { "long_name": "Mattapan Trolley", "type": 0 } },
        { "type": "route", "id": "Orange", "attributes": { "long_name": "Orange Line", "type": 1 } }
    ],
    "links": { "self": "https://api-v3.mbta.com/routes?sort=sort_order" }
}"#;

pub const TRIP_DOCUMENT: &str = r#"{
    "data": {
        "type": "trip",
        "id": "CR-Weekday-Fall-19-515",
        "attributes": { "headsign": "Worcester" },
        "relationships": {
            "route": { "data": { "type": "route", "id": "CR-Worcester" } },
            "shape": { "data": null },
            "stops": { "data": [
                { "type": "stop", "id": "place-sstat" },
                { "type": "stop", "id": "place-bbsta" },
                { "type": "stop", "id": "Worcester" }
            ] }
        }
    },
    "included": [
        { "type": "route", "id": "CR-Worcester", "attributes": { "long_name": "Framingham/Worcester Line", "type": 2 } },
        { "type": "stop", "id": "Worcester", "attributes": { "name": "Worcester", "location_type": 1 } },
        { "type": "service", "id": "FallWeekday", "attributes": { "description": "Weekday schedule" } },
        { "type": "route", "id": "CR-Worcester", "attributes": { "long_name": "Worcester Line", "type": 2 } }
    ]
}"#;

pub const ERRORS_DOCUMENT: &str = r#"{
    "errors": [
        { "status": "404", "code": "not_found", "title": "Resource Not Found", "source": { "parameter": "id" } },
        "rate limited"
    ],
    "jsonapi": { "version": "1.0" }
}"#;
