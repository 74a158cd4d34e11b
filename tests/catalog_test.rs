use seecure_homecare::domain::catalog::catalog;
use seecure_homecare::domain::options::{is_service_option, service_options};
use seecure_homecare::{get_all_services, get_service_by_id, get_sub_service_by_id};

#[test]
fn test_lab_service_has_six_sub_services() {
    let lab = get_service_by_id("lab-service").expect("lab-service should exist");

    assert_eq!(lab.name, "Laboratory Services");
    assert_eq!(lab.sub_services.len(), 6);
    assert_eq!(lab.sub_services[0].id, "sample-collection");
    assert_eq!(lab.sub_services[0].price, "NO Charge");
}

#[test]
fn test_unknown_service_is_absent() {
    assert!(get_service_by_id("not-real").is_none());
    assert!(get_service_by_id("").is_none());
    assert!(get_service_by_id("Lab-Service").is_none());
}

#[test]
fn test_cbg_analysis_price() {
    let sub = get_sub_service_by_id("home-care", "cbg-analysis").expect("cbg-analysis should exist");

    assert_eq!(sub.name, "CBG Analysis");
    assert_eq!(sub.price, "₹100");
    assert_eq!(sub.duration, Some("5-10 mins"));
}

#[test]
fn test_unknown_sub_service_pairs_are_absent() {
    assert!(get_sub_service_by_id("home-care", "not-real").is_none());
    assert!(get_sub_service_by_id("not-real", "cbg-analysis").is_none());
    // 子服務存在，但不屬於該類別
    assert!(get_sub_service_by_id("lab-service", "cbg-analysis").is_none());
}

#[test]
fn test_category_sizes() {
    let sizes: Vec<(&str, usize)> = get_all_services()
        .iter()
        .map(|c| (c.id, c.sub_services.len()))
        .collect();

    assert_eq!(
        sizes,
        vec![
            ("lab-service", 6),
            ("home-care", 6),
            ("procedures", 5),
            ("emergency", 4)
        ]
    );
}

#[test]
fn test_every_sub_service_is_a_form_option() {
    for category in get_all_services() {
        for sub in category.sub_services {
            assert!(is_service_option(sub.id), "{} missing from form options", sub.id);
            let (owner, _) = catalog().find_sub_service(sub.id).unwrap();
            assert_eq!(owner.id, category.id);
        }
    }
    assert_eq!(service_options().len(), 22);
}
