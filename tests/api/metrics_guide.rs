use seo_subscribe::metrics_guide::{Band, METRICS_GUIDE};

#[test]
fn every_report_metric_can_be_looked_up_for_its_tooltip() {
    let pairs = [
        ("Technical SEO", "Robots.txt"),
        ("On-Page SEO", "Meta Description"),
        ("Content SEO", "Keyword Density"),
        ("User Experience", "Tap Targets"),
        ("Schema Markup", "Implementation"),
        ("Speed Insights", "First Contentful Paint"),
        ("Ranking Analysis", "Domain Authority"),
    ];

    for (category, metric) in pairs {
        let definition = METRICS_GUIDE
            .get(category, metric)
            .unwrap_or_else(|| panic!("{} / {} is not defined", category, metric));
        assert!(definition.threshold(Band::Good).is_some());
        assert!(!definition.why.is_empty());
    }
}

#[test]
fn json_guide_keeps_category_and_metric_order() {
    let json = serde_json::to_string(&METRICS_GUIDE).unwrap();

    let technical = json.find("\"Technical SEO\"").unwrap();
    let ranking = json.find("\"Ranking Analysis\"").unwrap();
    let load_time = json.find("\"Load Time\"").unwrap();
    let sitemap = json.find("\"Sitemap.xml\"").unwrap();
    assert!(technical < ranking);
    assert!(load_time < sitemap);
}
