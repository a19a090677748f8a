use contourmatch::{resolve_overlaps, FoundMatch, OverlapConfig, Point, Template};

fn box_sample(x: i32, y: i32, w: i32, h: i32) -> Template {
    let points = [
        Point::new(x, y),
        Point::new(x + w - 1, y),
        Point::new(x + w - 1, y + h - 1),
        Point::new(x, y + h - 1),
    ];
    Template::sample(&points, f64::from(w * h), 30).unwrap()
}

fn found<'a>(template: &'a Template, sample: &'a Template, rate: f64) -> FoundMatch<'a> {
    FoundMatch {
        template,
        sample,
        rate,
        angle: 0.0,
    }
}

#[test]
fn near_equal_nested_rects_keep_the_better_rate() {
    let tpl = box_sample(0, 0, 10, 10);
    let outer = box_sample(0, 0, 100, 100);
    let inner = box_sample(2, 0, 95, 100);

    for (outer_rate, inner_rate) in [(0.90, 0.95), (0.97, 0.92)] {
        let out = resolve_overlaps(
            vec![found(&tpl, &inner, inner_rate), found(&tpl, &outer, outer_rate)],
            &OverlapConfig::default(),
        );
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].rate, outer_rate.max(inner_rate));
    }
}

#[test]
fn much_smaller_nested_rect_is_dropped() {
    let tpl = box_sample(0, 0, 10, 10);
    let outer = box_sample(0, 0, 100, 100);
    let inner = box_sample(10, 10, 50, 100 - 10);
    let small = box_sample(20, 20, 50, 50);

    let out = resolve_overlaps(
        vec![found(&tpl, &small, 0.99), found(&tpl, &outer, 0.86)],
        &OverlapConfig::default(),
    );
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].sample.source_rect().width, 100);

    let out = resolve_overlaps(
        vec![found(&tpl, &outer, 0.86), found(&tpl, &inner, 0.99)],
        &OverlapConfig::default(),
    );
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].rate, 0.86);
}

#[test]
fn margin_tolerates_slight_overhang() {
    let tpl = box_sample(0, 0, 10, 10);
    let outer = box_sample(10, 10, 100, 100);
    let overhang = box_sample(7, 30, 40, 40);
    let outside = box_sample(2, 30, 40, 40);

    let out = resolve_overlaps(
        vec![found(&tpl, &outer, 0.9), found(&tpl, &overhang, 0.9)],
        &OverlapConfig::default(),
    );
    assert_eq!(out.len(), 1);

    let out = resolve_overlaps(
        vec![found(&tpl, &outer, 0.9), found(&tpl, &outside, 0.9)],
        &OverlapConfig::default(),
    );
    assert_eq!(out.len(), 2);

    let strict = OverlapConfig {
        margin: 0,
        ..OverlapConfig::default()
    };
    let out = resolve_overlaps(
        vec![found(&tpl, &outer, 0.9), found(&tpl, &overhang, 0.9)],
        &strict,
    );
    assert_eq!(out.len(), 2);
}

#[test]
fn output_is_ordered_by_rect_area() {
    let tpl = box_sample(0, 0, 10, 10);
    let a = box_sample(0, 0, 10, 10);
    let b = box_sample(100, 0, 30, 30);
    let c = box_sample(200, 0, 20, 20);
    let out = resolve_overlaps(
        vec![found(&tpl, &a, 0.9), found(&tpl, &b, 0.9), found(&tpl, &c, 0.9)],
        &OverlapConfig::default(),
    );
    let widths: Vec<i32> = out.iter().map(|m| m.sample.source_rect().width).collect();
    assert_eq!(widths, vec![30, 20, 10]);
    assert!(resolve_overlaps(Vec::new(), &OverlapConfig::default()).is_empty());
}
