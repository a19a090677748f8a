#![cfg(feature = "serde")]

use contourmatch::{polygon_area, Point, Template, TemplateBank, TemplateFinder};

fn hexagon(r: i32) -> Vec<Point> {
    vec![
        Point::new(2 * r, 0),
        Point::new(3 * r, r),
        Point::new(3 * r, 3 * r),
        Point::new(2 * r, 4 * r),
        Point::new(0, 3 * r),
        Point::new(0, r),
    ]
}

#[test]
fn bank_survives_a_json_round_trip() {
    let mut bank = TemplateBank::new(24).unwrap();
    let points = hexagon(20);
    bank.add_polygon("hex", &points, polygon_area(&points)).unwrap();
    let limited = Template::from_points("hex-upright", &points, polygon_area(&points), 24)
        .unwrap()
        .with_rotation_limit(true);
    bank.push(limited).unwrap();

    let json = serde_json::to_string(&bank).unwrap();
    let restored: TemplateBank = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, bank);
    assert_eq!(restored.template_size(), 24);
    assert!(restored.templates()[1].rotation_limited());

    let sample = Template::sample(&hexagon(30), 0.0, 24).unwrap();
    let finder = TemplateFinder::default();
    let a = finder.find_template(bank.templates(), &sample).unwrap();
    let b = finder.find_template(restored.templates(), &sample).unwrap();
    assert_eq!(a.template.name(), b.template.name());
    assert_eq!(a.rate, b.rate);
}
