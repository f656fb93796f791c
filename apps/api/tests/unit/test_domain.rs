use waterlog_api::{
    domain::{
        city::entity::MapBounds,
        risk::level::{RiskLevel, UNKNOWN_RISK_COLOR},
        ward::{entity::Coordinates, repository::WardCatalog, value_objects::CatalogSlug},
    },
    infrastructure::catalog::StaticWardCatalog,
};

#[test]
fn catalog_slug_normalises_case_and_whitespace() {
    let slug = CatalogSlug::new("  Pumpwell ").expect("valid slug");
    assert_eq!(slug.as_str(), "pumpwell");
}

#[test]
fn catalog_slug_rejects_paths_and_symbols() {
    assert!(CatalogSlug::new("../etc/passwd").is_err());
    assert!(CatalogSlug::new("kadri ward").is_err());
    assert!(CatalogSlug::new("").is_err());
    assert!(CatalogSlug::new(&"a".repeat(65)).is_err());
}

#[test]
fn risk_levels_parse_case_insensitively() {
    assert_eq!("critical".parse::<RiskLevel>().unwrap(), RiskLevel::Critical);
    assert_eq!(" Medium ".parse::<RiskLevel>().unwrap(), RiskLevel::Medium);
    assert!("flooded".parse::<RiskLevel>().is_err());
}

#[test]
fn risk_levels_are_ordered_by_severity() {
    assert!(RiskLevel::Safe < RiskLevel::Low);
    assert!(RiskLevel::High < RiskLevel::Critical);
    assert_eq!(RiskLevel::default(), RiskLevel::Safe);
}

#[test]
fn map_bounds_contain_city_center() {
    let bounds = MapBounds {
        south_west: Coordinates::new(12.840, 74.800),
        north_east: Coordinates::new(12.930, 74.900),
    };
    assert!(bounds.contains(&Coordinates::new(12.871138, 74.846998)));
    assert!(!bounds.contains(&Coordinates::new(13.34, 74.74)));
}

#[tokio::test]
async fn every_catalog_ward_lies_inside_its_city() {
    let catalog = StaticWardCatalog::new();
    let city = catalog.find_city("mangalore").await.unwrap();
    let wards = catalog.fetch_ward_catalog("MANGALORE").await.unwrap();

    assert_eq!(wards.len(), 6);
    for ward in &wards {
        assert!(ward.coordinates.is_valid(), "{} has bad coordinates", ward.id);
        assert!(city.bounds.contains(&ward.coordinates), "{} outside bounds", ward.id);
    }

    let unlabelled: Vec<_> = wards
        .iter()
        .filter(|w| w.marker_color() == UNKNOWN_RISK_COLOR)
        .map(|w| w.id.as_str())
        .collect();
    assert_eq!(unlabelled, ["balmatta", "kulshekar"]);
}
