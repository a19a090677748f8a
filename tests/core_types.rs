use contourmatch::{
    Contour, ContourMatchError, FinderConfig, FrameConfig, FrameProcessor, OverlapConfig, Point,
    Template, TemplateBank, TemplateFinder,
};

fn square(side: i32) -> Vec<Point> {
    vec![
        Point::new(0, 0),
        Point::new(side, 0),
        Point::new(side, side),
        Point::new(0, side),
    ]
}

#[test]
fn contour_rejects_too_few_points() {
    let err = Contour::from_points(&[Point::new(3, 4)]).err().unwrap();
    assert_eq!(err, ContourMatchError::TooFewPoints { got: 1, min: 2 });

    let err = Contour::from_points(&[]).err().unwrap();
    assert_eq!(err, ContourMatchError::TooFewPoints { got: 0, min: 2 });
}

#[test]
fn equalize_rejects_zero_length() {
    let mut contour = Contour::from_points(&square(10)).unwrap();
    let err = contour.equalize(0).err().unwrap();
    assert_eq!(
        err,
        ContourMatchError::InvalidLength {
            len: 0,
            context: "equalization",
        }
    );
    assert_eq!(contour.len(), 4);
}

#[test]
fn template_rejects_degenerate_outline() {
    let points = vec![Point::new(5, 5); 6];
    let err = Template::from_points("dot", &points, 0.0, 30).err().unwrap();
    assert!(matches!(err, ContourMatchError::DegenerateContour { .. }));

    let err = Template::from_points("tiny", &square(10), 100.0, 1).err().unwrap();
    assert!(matches!(err, ContourMatchError::InvalidLength { len: 1, .. }));
}

#[test]
fn bank_enforces_its_template_size() {
    let mut bank = TemplateBank::new(24).unwrap();
    let foreign = Template::from_points("sq", &square(10), 100.0, 30).unwrap();
    assert!(matches!(
        bank.push(foreign),
        Err(ContourMatchError::InvalidLength { len: 30, .. })
    ));
    assert!(bank.is_empty());

    let added = bank.add_polygon("sq", &square(10), 100.0).unwrap();
    assert_eq!(added.size(), 24);
    assert_eq!(bank.len(), 1);

    let err = bank.remove(3).err().unwrap();
    assert_eq!(
        err,
        ContourMatchError::IndexOutOfBounds {
            index: 3,
            len: 1,
            context: "template",
        }
    );
    assert!(TemplateBank::new(0).is_err());
}

#[test]
fn configs_are_validated() {
    let bad_finder = FinderConfig {
        min_icf: -0.1,
        ..FinderConfig::default()
    };
    assert!(matches!(
        TemplateFinder::new(bad_finder),
        Err(ContourMatchError::InvalidConfig { .. })
    ));

    let bad_overlap = FrameConfig {
        overlap: OverlapConfig {
            same_shape_ratio: 1.5,
            ..OverlapConfig::default()
        },
        ..FrameConfig::default()
    };
    assert!(FrameProcessor::new(bad_overlap).is_err());
    assert!(FrameProcessor::new(FrameConfig::default()).is_ok());
}

#[test]
fn error_messages_name_the_problem() {
    let err = ContourMatchError::TooFewPoints { got: 1, min: 2 };
    assert_eq!(err.to_string(), "too few points: got 1, need at least 2");
}
