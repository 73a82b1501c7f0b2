use solid_principles::principles::open_closed::{Color, Size};
use solid_principles::{build_demo, DemoConfig, DemoRunner, Principle, Variant};

fn transcript(principle: Principle, variant: Variant) -> Vec<String> {
    let demo = build_demo(principle, variant, &DemoConfig::default());
    DemoRunner::capture(demo.as_ref()).unwrap().lines
}

const CATALOG_TRANSCRIPT: [&str; 18] = [
    "All products:",
    "- Chilly is green and small",
    "- Apple is red and small",
    "- Jackfruit is green and medium",
    "- Pumkin is orange and large",
    "- Coriander is green and small",
    "",
    "All orange products:",
    "- Pumkin is orange and large",
    "",
    "All small products:",
    "- Chilly is green and small",
    "- Apple is red and small",
    "- Coriander is green and small",
    "",
    "All small green products:",
    "- Chilly is green and small",
    "- Coriander is green and small",
];

#[test]
fn test_open_closed_variants_print_the_same_catalog() {
    let before = transcript(Principle::OpenClosed, Variant::Before);
    let after = transcript(Principle::OpenClosed, Variant::After);

    assert_eq!(before, CATALOG_TRANSCRIPT.to_vec());
    assert_eq!(after, before);
}

#[test]
fn test_open_closed_with_custom_query() {
    let mut config = DemoConfig::default();
    config.catalog.color = Color::Red;
    config.catalog.size = Size::Large;
    config.catalog.combined_color = Color::Green;
    config.catalog.combined_size = Size::Medium;
    let demo = build_demo(Principle::OpenClosed, Variant::After, &config);

    let lines = DemoRunner::capture(demo.as_ref()).unwrap().lines;

    assert_eq!(
        lines[6..].to_vec(),
        vec![
            "",
            "All red products:",
            "- Apple is red and small",
            "",
            "All large products:",
            "- Pumkin is orange and large",
            "",
            "All medium green products:",
            "- Jackfruit is green and medium",
        ]
    );
}

#[test]
fn test_single_responsibility_transcripts() {
    let expected = vec![
        "=====",
        "1: Completed GitHub advance course",
        "2: Completed ReactNative course",
        "=====",
        "1: Completed GitHub advance course",
        "Saving journal to myJournal.txt",
    ];

    assert_eq!(
        transcript(Principle::SingleResponsibility, Variant::Before),
        expected
    );
    assert_eq!(
        transcript(Principle::SingleResponsibility, Variant::After),
        expected
    );
}

#[test]
fn test_liskov_before_lets_penguin_fly() {
    assert_eq!(
        transcript(Principle::LiskovSubstitution, Variant::Before),
        vec!["Sparrow is flying.", "Penguin cannot fly."]
    );
}

#[test]
fn test_liskov_after_only_flies_flyable_birds() {
    assert_eq!(
        transcript(Principle::LiskovSubstitution, Variant::After),
        vec!["Sparrow is flying."]
    );
}

#[test]
fn test_interface_segregation_transcripts() {
    let online = [
        "",
        "Online order:",
        "- Order placed online",
        "- Payment processed online",
        "- Order delivered to customer",
        "- Email receipt sent to customer",
        "",
        "In store order:",
        "- Order placed in store",
    ];

    let mut before = online.to_vec();
    before.push("- Payment processed at counter");
    let mut after = online.to_vec();
    after.push("- Payment processed at the counter");

    assert_eq!(
        transcript(Principle::InterfaceSegregation, Variant::Before),
        before
    );
    assert_eq!(
        transcript(Principle::InterfaceSegregation, Variant::After),
        after
    );
}

#[test]
fn test_dependency_inversion_amount_format() {
    let lines = transcript(Principle::DependencyInversion, Variant::After);
    assert_eq!(lines[0], "- Initiating payment of $100.0 using PayPal.");
}

#[test]
fn test_dependency_inversion_before_only_uses_paypal() {
    assert_eq!(
        transcript(Principle::DependencyInversion, Variant::Before),
        vec![
            "- Initiating payment of $100.0 using PayPal.",
            "- Verifying payment using PayPal.",
            "- Payment of $100.0 processed successfully.",
            "- Refunding $80.0 using PayPal.",
        ]
    );
}

#[test]
fn test_dependency_inversion_after_switches_processor() {
    assert_eq!(
        transcript(Principle::DependencyInversion, Variant::After),
        vec![
            "- Initiating payment of $100.0 using PayPal.",
            "- Verifying payment using PayPal.",
            "- Payment of $100.0 processed successfully.",
            "- Refunding $80.0 using PayPal.",
            "- Initiating payment of $200.0 using Stripe.",
            "- Verifying payment using Stripe.",
            "- Payment of $200.0 processed successfully.",
            "- Refunding $75.0 using Stripe.",
        ]
    );
}
