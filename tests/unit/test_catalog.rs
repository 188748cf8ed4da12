use joyas_api::domain::{
    catalog::{
        filters::JoyaFilters,
        hateoas::shape,
        order_by::{JoyaColumn, OrderBy, SortDirection},
        pagination::{PageDefaults, PageSpec},
    },
    joya::entity::Joya,
};
use rust_decimal::Decimal;

const DEFAULTS: PageDefaults = PageDefaults {
    limit: 10,
    page: 1,
    max_limit: 100,
};

fn joya(id: i32, nombre: &str, precio: i64) -> Joya {
    Joya {
        id,
        nombre: nombre.to_string(),
        categoria: "collares".to_string(),
        metal: "plata".to_string(),
        precio: Decimal::new(precio, 0),
        stock: 2,
    }
}

#[test]
fn order_by_only_desc_flips_direction() {
    // Anything that is not a case-insensitive DESC must come back ascending.
    for input in ["precio_ASC", "precio_asc", "precio_down", "precio_", "precio"] {
        let order = OrderBy::parse(Some(input), JoyaColumn::Id);
        assert_eq!(order.direction, SortDirection::Asc, "input: {input}");
    }
    assert_eq!(
        OrderBy::parse(Some("precio_DeSc"), JoyaColumn::Id).direction,
        SortDirection::Desc
    );
}

#[test]
fn order_by_unlisted_column_uses_default_regardless_of_direction() {
    for input in ["password_DESC", "precio;drop_ASC", "__DESC", "1_DESC"] {
        let order = OrderBy::parse(Some(input), JoyaColumn::Id);
        assert_eq!(order.column, JoyaColumn::Id, "input: {input}");
    }
}

#[test]
fn pagination_offset_arithmetic_holds() {
    for (limit, page, expected) in [(5, 2, 5), (10, 1, 0), (3, 7, 18), (100, 1, 0)] {
        let limit = limit.to_string();
        let page = page.to_string();
        let spec = PageSpec::from_raw(Some(limit.as_str()), Some(page.as_str()), DEFAULTS)
            .expect("valid pagination input");
        assert_eq!(spec.offset(), expected);
    }
}

#[test]
fn pagination_rejects_what_order_by_would_forgive() {
    // order_by degrades silently; pagination is strict by design.
    assert!(PageSpec::from_raw(Some("abc"), None, DEFAULTS).is_err());
    assert!(PageSpec::from_raw(None, Some("0"), DEFAULTS).is_err());
    assert!(PageSpec::from_raw(Some("-1"), Some("1"), DEFAULTS).is_err());
}

#[test]
fn shape_empty_input_boundary() {
    let listing = shape("http://h/joyas", "joya", &[]);
    assert_eq!(listing.total_joyas, 0);
    assert!(listing.results.is_empty());
}

#[test]
fn shape_builds_entity_hrefs() {
    let listing = shape("http://h/joyas", "joya", &[joya(5, "Ring", 1000)]);
    assert_eq!(listing.total_joyas, 1);
    assert_eq!(listing.results[0].name, "Ring");
    assert_eq!(listing.results[0].href, "http://h/joyas/joya/5");
}

#[test]
fn shape_total_matches_page_not_table() {
    let rows: Vec<Joya> = (1..=4).map(|i| joya(i, "x", 100)).collect();
    let listing = shape("http://h/joyas", "joya", &rows);
    assert_eq!(listing.total_joyas, rows.len());
}

#[test]
fn filters_price_round_trip_bounds() {
    let filters = JoyaFilters::normalize(Some("10"), Some("20"), None, None).unwrap();
    assert_eq!(filters.precio_min, Some(Decimal::new(10, 0)));
    assert_eq!(filters.precio_max, Some(Decimal::new(20, 0)));

    assert!(JoyaFilters::normalize(Some("20"), Some("10"), None, None).is_err());
}
