//! End-to-end recommendation tests against a small realistic catalog.

use chargescout::{
    format_summary, generate_filter_options, parse_charger_specs, BatteryRequirement, ChargeTime,
    Chemistry, MatchTier, Phase, ProductRecord, RecommendOptions, Recommender,
};

fn catalog() -> Vec<ProductRecord> {
    serde_json::from_str(
        r#"[
        {
            "id": "chg-1",
            "slug": "green2-24v-60a",
            "name": "Green2 24V 60A Charger",
            "description": "Single phase industrial battery charger",
            "brand": "FSIP",
            "category_slug": "battery-chargers",
            "price": 1295.0,
            "quick_ship": true
        },
        {
            "id": "chg-2",
            "slug": "green2-24v-45a",
            "name": "Green2 24V 45A Charger",
            "brand": "FSIP",
            "category_slug": "battery-chargers"
        },
        {
            "id": "chg-3",
            "slug": "green2-24v-20a",
            "name": "Green2 24V 20A Charger",
            "brand": "FSIP",
            "category_slug": "battery-chargers"
        },
        {
            "id": "chg-4",
            "slug": "green6-36v-100a",
            "name": "Green6 36V 100A Charger",
            "brand": "FSIP",
            "category_slug": "battery-chargers"
        },
        {
            "id": "chg-5",
            "slug": "greenx-80v-120a",
            "name": "GreenX 80V 120A Lithium Charger",
            "brand": "FSIP",
            "category_slug": "battery-chargers",
            "voltage": 80,
            "current_amps": 120,
            "phase": "3P",
            "chemistries": ["Lithium"]
        },
        {
            "id": "chg-6",
            "slug": "shop-charger",
            "name": "Shop Charger",
            "category_slug": "battery-chargers"
        },
        {
            "id": "part-1",
            "slug": "forklift-seat",
            "name": "Forklift Seat",
            "category_slug": "seats"
        }
    ]"#,
    )
    .expect("catalog fixture must parse")
}

fn requirement() -> BatteryRequirement {
    BatteryRequirement {
        voltage: 24,
        amp_hours: 600.0,
        chemistry: Chemistry::LeadAcid,
        charge_time: ChargeTime::Overnight,
        input_phase: Some(Phase::Single),
        prefer_quick_ship: true,
    }
}

#[test]
fn test_voltage_mismatch_never_reaches_matches() {
    let result = Recommender::with_defaults().recommend(
        &catalog(),
        &requirement(),
        &RecommendOptions::default(),
    );

    for m in result.matches.iter().chain(result.fallbacks.iter()) {
        assert_ne!(m.product.slug, "green6-36v-100a", "36V charger must be excluded");
        assert_ne!(m.product.slug, "greenx-80v-120a", "80V charger must be excluded");
    }
}

#[test]
fn test_exact_voltage_bonus_is_isolated() {
    // Zero out everything except the voltage rule: the remaining score is
    // exactly the exact-match bonus.
    let mut weights = chargescout::default_weights();
    weights.current.in_band = 0;
    weights.current.near_band = 0;
    weights.current.out_of_band = 0;
    weights.chemistry.listed = 0;
    weights.chemistry.lead_acid_covers_agm = 0;
    weights.chemistry.unknown = 0;
    weights.phase.matched = 0;
    weights.phase.unknown = 0;
    weights.bonus.quick_ship = 0;
    weights.bonus.preferred_brand = 0;

    let engine = Recommender::new(weights);
    let products = catalog();
    let green2 = products
        .iter()
        .find(|p| p.slug == "green2-24v-60a")
        .unwrap();

    let scored = engine.score_charger(green2, &requirement(), &RecommendOptions::default());
    assert_eq!(scored.score, 100);
}

#[test]
fn test_current_banding_is_monotonic() {
    // 600 Ah overnight wants 51-69A: 60A in band, 45A in the loose band
    // only, 20A outside both.
    let engine = Recommender::with_defaults();
    let products = catalog();
    let options = RecommendOptions::default();
    let req = requirement();

    let score_of = |slug: &str| {
        let product = products.iter().find(|p| p.slug == slug).unwrap();
        engine.score_charger(product, &req, &options).score
    };

    let in_band = score_of("green2-24v-60a");
    let near_band = score_of("green2-24v-45a");
    let out_of_band = score_of("green2-24v-20a");

    assert!(in_band > near_band, "{} vs {}", in_band, near_band);
    assert!(near_band > out_of_band, "{} vs {}", near_band, out_of_band);
}

#[test]
fn test_recommendation_is_idempotent() {
    let engine = Recommender::with_defaults();
    let products = catalog();
    let req = requirement();
    let options = RecommendOptions::default();

    let first = engine.recommend(&products, &req, &options);
    let second = engine.recommend(&products, &req, &options);
    assert_eq!(first, second);
}

#[test]
fn test_partition_is_complete_and_disjoint() {
    let result = Recommender::with_defaults().recommend(
        &catalog(),
        &requirement(),
        &RecommendOptions::default(),
    );

    for m in &result.matches {
        assert_eq!(m.tier, MatchTier::Qualified);
        assert!(
            !result.fallbacks.iter().any(|f| f.product.slug == m.product.slug),
            "{} appears in both tiers",
            m.product.slug
        );
    }
    for f in &result.fallbacks {
        assert_eq!(f.tier, MatchTier::Suboptimal);
    }

    // Every considered charger is in exactly one of: matches, fallbacks,
    // or the disqualified void.
    let placed = result.matches.len() + result.fallbacks.len();
    assert!(placed <= result.diagnostics.considered_chargers);
    assert_eq!(result.diagnostics.considered_chargers, 6);
    assert_eq!(result.diagnostics.total_products, 7);
}

#[test]
fn test_empty_catalog_yields_empty_result() {
    let result = Recommender::with_defaults().recommend(
        &[],
        &requirement(),
        &RecommendOptions::default(),
    );
    assert!(result.matches.is_empty());
    assert!(result.fallbacks.is_empty());
    assert_eq!(result.diagnostics.total_products, 0);
    assert_eq!(result.diagnostics.considered_chargers, 0);
}

#[test]
fn test_green2_example_scenario() {
    // 24V 600Ah lead-acid battery, overnight charging, single-phase shop,
    // quick-ship preferred: the Green2 24V 60A is the textbook answer.
    let result = Recommender::with_defaults().recommend(
        &catalog(),
        &requirement(),
        &RecommendOptions::default(),
    );

    let top = result.matches.first().expect("expected a qualified match");
    assert_eq!(top.product.slug, "green2-24v-60a");

    // voltage 100 + current 50 + chemistry-unknown 5 + phase 20 +
    // quick-ship 15 + brand 10
    assert_eq!(top.score, 200);

    let reasons = top.reasons.join("\n");
    assert!(reasons.contains("24V output matches the battery"), "{}", reasons);
    assert!(reasons.contains("recommended 51-69A range"), "{}", reasons);
    assert!(reasons.contains("Runs on 1P facility power"), "{}", reasons);
    assert!(reasons.contains("Ships from stock"), "{}", reasons);
    assert!(reasons.contains("Preferred charger line"), "{}", reasons);
}

#[test]
fn test_formatter_contains_exactly_the_partitioned_products() {
    let products = catalog();
    let result = Recommender::with_defaults().recommend(
        &products,
        &requirement(),
        &RecommendOptions::default(),
    );
    let summary = format_summary(&result);

    for m in result.matches.iter().take(3) {
        assert!(summary.contains(&m.product.name), "missing match {}", m.product.name);
    }

    let rendered: Vec<&str> = result
        .matches
        .iter()
        .chain(result.fallbacks.iter())
        .map(|m| m.product.name.as_str())
        .collect();
    for product in &products {
        if !rendered.contains(&product.name.as_str()) {
            assert!(
                !summary.contains(&product.name),
                "{} should not be rendered:\n{}",
                product.name,
                summary
            );
        }
    }
}

#[test]
fn test_filter_options_over_the_catalog() {
    let options = generate_filter_options(&catalog());
    assert_eq!(options.voltages, vec![24, 36, 80]);
    assert_eq!(options.current_amps, vec![20, 45, 60, 100, 120]);
    assert_eq!(options.phases, vec!["1P", "3P"]);
    assert!(options.chemistries.contains(&"Lithium".to_string()));
    assert!(options.chemistries.contains(&"Lead-Acid".to_string()));
}

#[test]
fn test_parse_specs_of_fixture_rows() {
    let products = catalog();
    let green6 = products.iter().find(|p| p.slug == "green6-36v-100a").unwrap();
    let specs = parse_charger_specs(green6);
    assert_eq!(specs.voltage, Some(36));
    assert_eq!(specs.current_amps, Some(100));
    assert_eq!(specs.phase, Phase::Three);
    assert!(specs.chemistry_inferred);
}
