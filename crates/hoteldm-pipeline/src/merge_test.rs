use super::*;

fn hotel(id: &str, destination_id: u64, name: &str) -> Hotel {
    Hotel {
        id: id.to_string(),
        destination_id,
        name: name.to_string(),
        ..Hotel::default()
    }
}

fn amenities(general: &[&str], room: &[&str]) -> Option<Amenities> {
    Some(Amenities {
        general: general.iter().map(ToString::to_string).collect(),
        room: room.iter().map(ToString::to_string).collect(),
    })
}

fn image(link: &str) -> ImageLink {
    ImageLink {
        link: link.to_string(),
        description: String::new(),
    }
}

// -----------------------------------------------------------------------
// merge_hotels
// -----------------------------------------------------------------------

#[test]
fn longer_name_wins_across_suppliers() {
    let merged = merge_hotels(vec![
        hotel("H1", 100, "Beach Hotel"),
        hotel("H1", 100, "Beautiful Beach Resort"),
    ]);
    assert_eq!(merged.len(), 1);
    let h1 = &merged["H1"];
    assert_eq!(h1.name, "Beautiful Beach Resort");
    assert_eq!(h1.destination_id, 100);
}

#[test]
fn distinct_ids_stay_separate() {
    let merged = merge_hotels(vec![hotel("a", 1, "A"), hotel("b", 2, "B"), hotel("a", 0, "")]);
    assert_eq!(merged.len(), 2);
    assert_eq!(merged["a"].destination_id, 1);
    assert_eq!(merged["a"].name, "A");
}

#[test]
fn single_record_keeps_every_field_but_amenities() {
    let mut only = hotel("iJhz", 5432, "Beach Villas Singapore");
    only.description = "Located on the coastline.".to_string();
    only.amenities = amenities(&["wifi"], &[]);
    only.booking_conditions = vec!["No pets.".to_string()];
    let merged = merge_hotels(vec![only.clone()]);
    assert_eq!(merged["iJhz"], only);
}

#[test]
fn single_record_amenities_are_normalized() {
    let mut only = hotel("iJhz", 5432, "Beach Villas Singapore");
    only.amenities = amenities(&["TV", "WiFi", "wifi ", " "], &["tv", "Kettle"]);

    let merged = merge_hotels(vec![only]);
    let amenities = merged["iJhz"].amenities.clone().expect("amenities");
    assert_eq!(amenities.general, vec!["wifi"]);
    assert_eq!(amenities.room, vec!["tv", "kettle"]);
}

#[test]
fn single_and_merged_hotels_share_casing() {
    let mut solo = hotel("solo", 1, "Solo");
    solo.amenities = amenities(&["WiFi"], &[]);
    let mut first = hotel("pair", 1, "Pair");
    first.amenities = amenities(&["WiFi"], &[]);
    let mut second = hotel("pair", 1, "Pair");
    second.amenities = amenities(&["Pool"], &[]);

    let merged = merge_hotels(vec![solo, first, second]);
    assert_eq!(
        merged["solo"].amenities.as_ref().unwrap().general,
        vec!["wifi"]
    );
    assert_eq!(
        merged["pair"].amenities.as_ref().unwrap().general,
        vec!["wifi", "pool"]
    );
}

#[test]
fn fold_is_left_to_right() {
    // Destination comes from the last positive value; the name from the
    // longest seen so far. Reversing the input changes the outcome.
    let records = vec![
        hotel("x", 1, "Medium name"),
        hotel("x", 2, "Short"),
        hotel("x", 0, "Much longer hotel name"),
    ];
    let forward = merge_hotels(records.clone());
    assert_eq!(forward["x"].destination_id, 2);
    assert_eq!(forward["x"].name, "Much longer hotel name");

    let reversed = merge_hotels(records.into_iter().rev().collect());
    assert_eq!(reversed["x"].destination_id, 1);
}

// -----------------------------------------------------------------------
// merge_pair: scalar fields
// -----------------------------------------------------------------------

#[test]
fn name_and_description_ties_keep_existing() {
    let mut existing = hotel("H1", 1, "Alpha");
    existing.description = "same length".to_string();
    let mut new = hotel("H1", 1, "Bravo");
    new.description = "equal chars".to_string();
    let merged = merge_pair(existing, new);
    assert_eq!(merged.name, "Alpha");
    assert_eq!(merged.description, "same length");
}

#[test]
fn longer_description_wins() {
    let mut existing = hotel("H1", 1, "");
    existing.description = "Short.".to_string();
    let mut new = hotel("H1", 1, "");
    new.description = "A much longer description.".to_string();
    assert_eq!(
        merge_pair(existing, new).description,
        "A much longer description."
    );
}

#[test]
fn zero_destination_keeps_existing() {
    let merged = merge_pair(hotel("H1", 42, "A"), hotel("H1", 0, "A"));
    assert_eq!(merged.destination_id, 42);
}

#[test]
fn empty_new_id_keeps_existing() {
    let merged = merge_pair(hotel("H1", 1, "A"), hotel("", 1, "A"));
    assert_eq!(merged.id, "H1");
}

#[test]
fn booking_conditions_prefer_non_empty_new() {
    let mut existing = hotel("H1", 1, "A");
    existing.booking_conditions = vec!["No pets.".to_string()];
    let new = hotel("H1", 1, "A");
    let merged = merge_pair(existing.clone(), new);
    assert_eq!(merged.booking_conditions, vec!["No pets."]);

    let mut newer = hotel("H1", 1, "A");
    newer.booking_conditions = vec!["Children welcome.".to_string()];
    assert_eq!(
        merge_pair(existing, newer).booking_conditions,
        vec!["Children welcome."]
    );
}

// -----------------------------------------------------------------------
// merge_pair: location
// -----------------------------------------------------------------------

fn location(lat: Option<Coordinate>, address: &str, city: &str, country: &str) -> Location {
    Location {
        latitude: lat.clone(),
        longitude: lat,
        address: address.to_string(),
        city: city.to_string(),
        country: country.to_string(),
    }
}

#[test]
fn absent_location_takes_present_side() {
    let mut existing = hotel("H1", 1, "A");
    existing.location = Some(location(None, "1 Road", "", ""));
    let merged = merge_pair(existing.clone(), hotel("H1", 1, "A"));
    assert_eq!(merged.location, existing.location);

    let mut new = hotel("H1", 1, "A");
    new.location = Some(location(None, "2 Road", "", ""));
    let merged = merge_pair(hotel("H1", 1, "A"), new.clone());
    assert_eq!(merged.location, new.location);
}

#[test]
fn numeric_coordinates_from_new_win() {
    let mut existing = hotel("H1", 1, "A");
    existing.location = Some(location(Some(Coordinate::Numeric(1.0)), "", "", ""));
    let mut new = hotel("H1", 1, "A");
    new.location = Some(location(Some(Coordinate::Numeric(2.0)), "", "", ""));
    let merged = merge_pair(existing, new).location.unwrap();
    assert_eq!(merged.latitude, Some(Coordinate::Numeric(2.0)));
    assert_eq!(merged.longitude, Some(Coordinate::Numeric(2.0)));
}

#[test]
fn text_or_missing_coordinates_fall_back_to_existing() {
    let mut existing = hotel("H1", 1, "A");
    existing.location = Some(location(Some(Coordinate::Numeric(1.25)), "", "", ""));

    let mut text = hotel("H1", 1, "A");
    text.location = Some(location(Some(Coordinate::Text(String::new())), "", "", ""));
    let merged = merge_pair(existing.clone(), text).location.unwrap();
    assert_eq!(merged.latitude, Some(Coordinate::Numeric(1.25)));

    let mut missing = hotel("H1", 1, "A");
    missing.location = Some(location(None, "", "", ""));
    let merged = merge_pair(existing, missing).location.unwrap();
    assert_eq!(merged.longitude, Some(Coordinate::Numeric(1.25)));
}

#[test]
fn address_keeps_longer_and_ties_take_new() {
    let mut existing = hotel("H1", 1, "A");
    existing.location = Some(location(None, "8 Sentosa Gateway, Beach Villas, 098269", "", ""));
    let mut new = hotel("H1", 1, "A");
    new.location = Some(location(None, "8 Sentosa Gateway", "", ""));
    let merged = merge_pair(existing, new).location.unwrap();
    assert_eq!(merged.address, "8 Sentosa Gateway, Beach Villas, 098269");

    let mut tie_existing = hotel("H1", 1, "A");
    tie_existing.location = Some(location(None, "1 Abc Rd", "", ""));
    let mut tie_new = hotel("H1", 1, "A");
    tie_new.location = Some(location(None, "2 Xyz Rd", "", ""));
    let merged = merge_pair(tie_existing, tie_new).location.unwrap();
    assert_eq!(merged.address, "2 Xyz Rd");
}

#[test]
fn city_prefers_non_empty_new() {
    let mut existing = hotel("H1", 1, "A");
    existing.location = Some(location(None, "", "Singapore", ""));
    let mut new = hotel("H1", 1, "A");
    new.location = Some(location(None, "", "", ""));
    assert_eq!(
        merge_pair(existing.clone(), new).location.unwrap().city,
        "Singapore"
    );

    let mut renamed = hotel("H1", 1, "A");
    renamed.location = Some(location(None, "", "Sentosa", ""));
    assert_eq!(merge_pair(existing, renamed).location.unwrap().city, "Sentosa");
}

#[test]
fn country_keeps_two_letter_code_or_non_empty() {
    let mut code = hotel("H1", 1, "A");
    code.location = Some(location(None, "", "", "SG"));
    let mut full = hotel("H1", 1, "A");
    full.location = Some(location(None, "", "", "Singapore"));

    // Existing is a 2-char code: keep it.
    let merged = merge_pair(code.clone(), full.clone()).location.unwrap();
    assert_eq!(merged.country, "SG");

    // Existing is a full name, new is non-empty: take new.
    let merged = merge_pair(full.clone(), code).location.unwrap();
    assert_eq!(merged.country, "SG");

    // New is empty: keep existing.
    let mut empty = hotel("H1", 1, "A");
    empty.location = Some(location(None, "", "", ""));
    let merged = merge_pair(full, empty).location.unwrap();
    assert_eq!(merged.country, "Singapore");
}

// -----------------------------------------------------------------------
// merge_pair: amenities
// -----------------------------------------------------------------------

#[test]
fn room_amenities_take_precedence_over_general() {
    let mut a = hotel("H1", 1, "A");
    a.amenities = amenities(&["WiFi", "Pool"], &[]);
    let mut b = hotel("H1", 1, "A");
    b.amenities = amenities(&[], &["Pool", "TV"]);

    let merged = merge_pair(a, b).amenities.unwrap();
    assert_eq!(merged.general, vec!["wifi"]);
    assert_eq!(merged.room, vec!["pool", "tv"]);
}

#[test]
fn amenity_union_is_case_and_whitespace_insensitive() {
    let mut a = hotel("H1", 1, "A");
    a.amenities = amenities(&["Outdoor Pool", " WiFi"], &["Kettle"]);
    let mut b = hotel("H1", 1, "A");
    b.amenities = amenities(&["outdoor pool ", "wifi", "Childcare"], &["kettle ", "Iron"]);

    let merged = merge_pair(a, b).amenities.unwrap();
    assert_eq!(merged.general, vec!["outdoor pool", "wifi", "childcare"]);
    assert_eq!(merged.room, vec!["kettle", "iron"]);
}

#[test]
fn amenity_merge_with_itself_is_idempotent() {
    let mut a = hotel("H1", 1, "A");
    a.amenities = amenities(&["WiFi", "Pool", "pool"], &["TV", "Tv "]);

    let once = merge_pair(a.clone(), a.clone());
    let twice = merge_pair(once.clone(), once.clone());
    let once_amenities = once.amenities.unwrap();
    assert_eq!(once_amenities.general, vec!["wifi", "pool"]);
    assert_eq!(once_amenities.room, vec!["tv"]);
    assert_eq!(twice.amenities.unwrap(), once_amenities);
}

#[test]
fn merged_general_never_contains_room_amenity() {
    let mut a = hotel("H1", 1, "A");
    a.amenities = amenities(&["Aircon", "TV", "Iron", "Pool"], &["aircon"]);
    let mut b = hotel("H1", 1, "A");
    b.amenities = amenities(&["BusinessCenter"], &["tv", "IRON"]);

    let merged = merge_pair(a, b).amenities.unwrap();
    for general in &merged.general {
        assert!(
            !merged.room.contains(general),
            "{general} appears in both general and room"
        );
    }
    assert_eq!(merged.general, vec!["pool", "businesscenter"]);
}

#[test]
fn absent_amenities_take_present_side_normalized() {
    let mut a = hotel("H1", 1, "A");
    a.amenities = amenities(&["WiFi", "TV"], &["tv"]);
    let merged = merge_pair(hotel("H1", 1, "A"), a.clone());
    assert_eq!(merged.amenities, amenities(&["wifi"], &["tv"]));

    let merged = merge_pair(a, hotel("H1", 1, "A"));
    assert_eq!(merged.amenities, amenities(&["wifi"], &["tv"]));
}

#[test]
fn both_absent_amenities_stay_absent() {
    let merged = merge_pair(hotel("H1", 1, "A"), hotel("H1", 1, "A"));
    assert!(merged.amenities.is_none());
}

// -----------------------------------------------------------------------
// merge_pair: images
// -----------------------------------------------------------------------

#[test]
fn images_merge_per_category() {
    let mut a = hotel("H1", 1, "A");
    a.images = Some(Images {
        rooms: vec![image("a-room")],
        site: vec![image("a-site")],
        amenities: vec![],
    });
    let mut b = hotel("H1", 1, "A");
    b.images = Some(Images {
        rooms: vec![image("b-room-1"), image("b-room-2")],
        site: vec![],
        amenities: vec![image("b-amenity")],
    });

    let merged = merge_pair(a, b).images.unwrap();
    assert_eq!(merged.rooms, vec![image("b-room-1"), image("b-room-2")]);
    assert_eq!(merged.site, vec![image("a-site")]);
    assert_eq!(merged.amenities, vec![image("b-amenity")]);
}

#[test]
fn absent_images_take_present_side() {
    let mut a = hotel("H1", 1, "A");
    a.images = Some(Images {
        rooms: vec![image("room")],
        ..Images::default()
    });
    let merged = merge_pair(a.clone(), hotel("H1", 1, "A"));
    assert_eq!(merged.images, a.images);
}
